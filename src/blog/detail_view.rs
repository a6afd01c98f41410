use log::{error, warn};
use reqwest::Url;
use serde_json::Value;

use crate::api::client::ApiClient;
use crate::blog::model::{Blog, Loadable};
use crate::blog::related::select_related;
use crate::blog::seo;
use crate::blog::service::BlogService;
use crate::blog::share::{self, SharePlatform};
use crate::comment::model::Comment;
use crate::comment::service::CommentService;
use crate::newsletter::service::SubscriptionService;
use crate::utils::error::ClientError;

/// State owned by one blog-detail view instance.
///
/// The blog itself is tri-state so the view can render a loading screen, a
/// not-found page, or the article. Comment and related fetches degrade to
/// empty collections; submission and subscription failures are transient
/// and leave rendered content untouched.
pub struct BlogDetailView {
    blog_service: BlogService,
    comment_service: CommentService,
    subscription_service: SubscriptionService,
    base_url: String,
    slug: String,
    blog: Loadable<Blog>,
    comments: Vec<Comment>,
    related: Vec<Blog>,
    is_submitting: bool,
    is_subscribing: bool,
}

impl BlogDetailView {
    pub fn new(client: &ApiClient, slug: &str) -> Self {
        BlogDetailView {
            blog_service: BlogService::new(client),
            comment_service: CommentService::new(client),
            subscription_service: SubscriptionService::new(client),
            base_url: client.base_url.clone(),
            slug: slug.to_string(),
            blog: Loadable::Loading,
            comments: Vec::new(),
            related: Vec::new(),
            is_submitting: false,
            is_subscribing: false,
        }
    }

    /// Fetch the blog, its comments and the related set.
    ///
    /// A failed blog fetch confirms the page as absent, like the not-found
    /// case; the view never surfaces a blocking error.
    pub async fn load(&mut self) {
        match self.blog_service.fetch_by_slug(&self.slug).await {
            Ok(Some(blog)) => self.blog = Loadable::Loaded(blog),
            Ok(None) => self.blog = Loadable::NotFound,
            Err(e) => {
                error!("Error fetching blog {}: {}", self.slug, e);
                self.blog = Loadable::NotFound;
            }
        }
        self.load_comments().await;
        self.load_related().await;
    }

    async fn load_comments(&mut self) {
        self.comments = match self.comment_service.fetch_for_blog(&self.slug).await {
            Ok(comments) => comments,
            Err(e) => {
                error!("Error fetching comments: {}", e);
                Vec::new()
            }
        };
    }

    /// Recompute the related set once the active blog's category is known.
    async fn load_related(&mut self) {
        let Some(active) = self.blog.as_loaded() else {
            self.related = Vec::new();
            return;
        };
        self.related = match self.blog_service.fetch_all().await {
            Ok(all) => select_related(active, &all),
            Err(e) => {
                warn!("Error fetching related blogs: {}", e);
                Vec::new()
            }
        };
    }

    /// Submit a comment and refresh the comment list on success.
    ///
    /// Failures are retryable by resubmission.
    pub async fn submit_comment(&mut self, name: &str, content: &str) -> Result<(), ClientError> {
        let Some(blog_id) = self.blog.as_loaded().map(|blog| blog.id.clone()) else {
            return Err(ClientError::ValidationError("No blog loaded".into()));
        };
        self.is_submitting = true;
        let result = self.comment_service.add_comment(&blog_id, name, content).await;
        if result.is_ok() {
            self.load_comments().await;
        }
        self.is_submitting = false;
        result
    }

    /// Subscribe an email address; returns the API's user-facing message.
    pub async fn subscribe(&mut self, email: &str) -> Result<String, ClientError> {
        self.is_subscribing = true;
        let result = self.subscription_service.subscribe(email).await;
        self.is_subscribing = false;
        result
    }

    /// JSON-LD for the page, once the blog is loaded.
    pub fn structured_data(&self) -> Option<Value> {
        self.blog
            .as_loaded()
            .map(|blog| seo::structured_data(blog, &self.comments, &self.base_url))
    }

    /// Share-dialog URL for the loaded blog.
    pub fn share_url(&self, platform: SharePlatform) -> Option<Url> {
        let blog = self.blog.as_loaded()?;
        share::share_url(platform, &self.base_url, &blog.slug, &blog.title)
    }

    pub fn blog(&self) -> &Loadable<Blog> {
        &self.blog
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn related(&self) -> &[Blog] {
        &self.related
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_subscribing(&self) -> bool {
        self.is_subscribing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: "http://localhost:8000".to_string(),
            company: "acme".to_string(),
        }
    }

    fn loaded_blog() -> Blog {
        Blog {
            id: "64b0f1".to_string(),
            title: "Intro to ABM".to_string(),
            description: "<p>Account-based marketing</p>".to_string(),
            category: "ABM".to_string(),
            image: None,
            author: Some("Jordan".to_string()),
            created_at: None,
            is_published: Some(true),
            slug: "intro-abm".to_string(),
            company: "acme".to_string(),
        }
    }

    #[test]
    fn starts_in_the_loading_state() {
        let view = BlogDetailView::new(&client(), "intro-abm");
        assert!(view.blog().is_loading());
        assert!(view.structured_data().is_none());
        assert!(view.share_url(SharePlatform::Twitter).is_none());
    }

    #[tokio::test]
    async fn comment_on_an_unloaded_blog_is_rejected_locally() {
        let mut view = BlogDetailView::new(&client(), "intro-abm");
        let err = view.submit_comment("Sam", "Great read").await.unwrap_err();
        assert!(matches!(err, ClientError::ValidationError(_)));
        assert!(!view.is_submitting());
    }

    #[test]
    fn loaded_blog_exposes_page_metadata() {
        let mut view = BlogDetailView::new(&client(), "intro-abm");
        view.blog = Loadable::Loaded(loaded_blog());

        let doc = view.structured_data().unwrap();
        assert_eq!(doc["headline"], "Intro to ABM");

        let url = view.share_url(SharePlatform::Facebook).unwrap();
        assert_eq!(url.host_str(), Some("www.facebook.com"));
    }
}
