use std::env;

use crate::utils::error::ClientError;

/// Site configuration injected into the fetch layer.
///
/// The company value scopes every fetch and subscription to one tenant;
/// tests substitute their own value instead of reading shared globals.
pub struct SiteConfig {
    pub base_url: String,
    pub company: String,
}

impl SiteConfig {
    /// Load site configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            base_url: env::var("BLOG_API_URL").map_err(|_| "BLOG_API_URL is required")?,
            company: env::var("BLOG_COMPANY").map_err(|_| "BLOG_COMPANY is required")?,
        })
    }
}

/// Shared handle to the remote content API.
#[derive(Clone)]
pub struct ApiClient {
    pub http: reqwest::Client,
    pub base_url: String,
    pub company: String,
}

impl ApiClient {
    pub fn new(config: &SiteConfig) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            company: config.company.clone(),
        }
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check a response for a non-success status.
///
/// Returns the response unchanged on success; otherwise folds the status
/// and body into [`ClientError::ApiError`].
pub(crate) async fn check_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::ApiError(format!("status {}: {}", status, body)));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> SiteConfig {
        SiteConfig {
            base_url: base_url.to_string(),
            company: "acme".to_string(),
        }
    }

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new(&config("http://localhost:8000"));
        assert_eq!(client.url("/api/blog/all"), "http://localhost:8000/api/blog/all");
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let client = ApiClient::new(&config("http://localhost:8000/"));
        assert_eq!(client.url("/api/blog/all"), "http://localhost:8000/api/blog/all");
    }

    #[tokio::test]
    async fn check_success_passes_ok_responses() {
        assert!(check_success(mock_response(200, "")).await.is_ok());
    }

    #[tokio::test]
    async fn check_success_maps_server_errors() {
        let err = check_success(mock_response(500, "boom")).await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError(message) if message.contains("500")));
    }
}
