use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article snapshot as the content API returns it.
///
/// Created and mutated exclusively by the API; the client only reads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "isPublished", default)]
    pub is_published: Option<bool>,
    pub slug: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Deserialize)]
pub struct BlogListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

#[derive(Debug, Deserialize)]
pub struct SingleBlogResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub blog: Option<Blog>,
}

/// Tri-state result of the single-blog lookup, so a view can tell
/// "still loading" apart from "genuinely not found".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    NotFound,
    Loaded(T),
}

impl<T> Loadable<T> {
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}
