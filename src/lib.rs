//! Client-side core for a multi-tenant blog site: an async fetch layer over
//! the remote content API plus the pure listing-filter, related-content and
//! view-state logic that feeds the rendering layer.

pub mod api;
pub mod blog;
pub mod comment;
pub mod newsletter;
pub mod utils;

pub use api::client::{ApiClient, SiteConfig};
pub use blog::detail_view::BlogDetailView;
pub use blog::list_view::BlogListView;
pub use blog::model::{Blog, Loadable};
pub use blog::service::BlogService;
pub use comment::model::Comment;
pub use comment::service::CommentService;
pub use newsletter::service::SubscriptionService;
pub use utils::error::ClientError;
