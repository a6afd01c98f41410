use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment snapshot as the content API returns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CommentListRequest {
    #[serde(rename = "blogSlug")]
    pub blog_slug: String,
}

#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub blog: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
