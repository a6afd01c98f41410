use crate::api::client::{ApiClient, check_success};
use crate::comment::model::{
    AckResponse, AddCommentRequest, Comment, CommentListRequest, CommentListResponse,
};
use crate::utils::error::ClientError;

pub struct CommentService {
    client: ApiClient,
}

impl CommentService {
    pub fn new(client: &ApiClient) -> Self {
        CommentService {
            client: client.clone(),
        }
    }

    /// Get all comments for a blog
    pub async fn fetch_for_blog(&self, slug: &str) -> Result<Vec<Comment>, ClientError> {
        let url = self.client.url("/api/blog/comments");
        let response = self
            .client
            .http
            .post(&url)
            .json(&CommentListRequest {
                blog_slug: slug.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(format!("Failed to fetch comments: {}", e)))?;

        let body = check_success(response)
            .await?
            .json::<CommentListResponse>()
            .await
            .map_err(|e| ClientError::DecodeError(format!("Failed to parse comments: {}", e)))?;

        if !body.success {
            return Ok(Vec::new());
        }
        Ok(body.comments)
    }

    /// Add a new comment to a blog
    pub async fn add_comment(
        &self,
        blog_id: &str,
        name: &str,
        content: &str,
    ) -> Result<(), ClientError> {
        let name = name.trim();
        let content = content.trim();
        if name.is_empty() || content.is_empty() {
            return Err(ClientError::ValidationError(
                "Name and comment text are required".into(),
            ));
        }

        let url = self.client.url("/api/blog/add-comment");
        let response = self
            .client
            .http
            .post(&url)
            .json(&AddCommentRequest {
                blog: blog_id.to_string(),
                name: name.to_string(),
                content: content.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(format!("Failed to add comment: {}", e)))?;

        let body = check_success(response)
            .await?
            .json::<AckResponse>()
            .await
            .map_err(|e| {
                ClientError::DecodeError(format!("Failed to parse comment response: {}", e))
            })?;

        if !body.success {
            return Err(ClientError::ApiError(
                body.message
                    .unwrap_or_else(|| "Failed to add comment".to_string()),
            ));
        }
        Ok(())
    }
}
