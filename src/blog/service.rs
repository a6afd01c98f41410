use crate::api::client::{ApiClient, check_success};
use crate::blog::model::{Blog, BlogListResponse, SingleBlogResponse};
use crate::utils::error::ClientError;

pub struct BlogService {
    client: ApiClient,
}

impl BlogService {
    pub fn new(client: &ApiClient) -> Self {
        BlogService {
            client: client.clone(),
        }
    }

    /// Fetch the tenant-scoped listing.
    ///
    /// The response is re-filtered by company locally, so no foreign-tenant
    /// blog reaches a view even if the API ignores the query parameter.
    pub async fn fetch_blogs(&self) -> Result<Vec<Blog>, ClientError> {
        let url = self.client.url("/api/admin/blogs");
        let response = self
            .client
            .http
            .get(&url)
            .query(&[("company", self.client.company.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(format!("Failed to fetch blogs: {}", e)))?;

        let body = check_success(response)
            .await?
            .json::<BlogListResponse>()
            .await
            .map_err(|e| ClientError::DecodeError(format!("Failed to parse blog list: {}", e)))?;

        Ok(retain_company(body.blogs, &self.client.company))
    }

    /// Fetch a single blog by slug.
    ///
    /// `Ok(None)` covers HTTP 404, `success = false`, a missing payload and
    /// a company mismatch; only transport and decode problems are errors.
    pub async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Blog>, ClientError> {
        let url = self.client.url(&format!("/api/blog/slug/{}", slug));
        let response = self.client.http.get(&url).send().await.map_err(|e| {
            ClientError::NetworkError(format!("Failed to fetch blog {}: {}", slug, e))
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = check_success(response)
            .await?
            .json::<SingleBlogResponse>()
            .await
            .map_err(|e| {
                ClientError::DecodeError(format!("Failed to parse blog {}: {}", slug, e))
            })?;

        if !body.success {
            return Ok(None);
        }

        Ok(body
            .blog
            .filter(|blog| blog.company == self.client.company))
    }

    /// Fetch the full collection used as related-content input.
    ///
    /// Not tenant-scoped; the related selector filters by company.
    pub async fn fetch_all(&self) -> Result<Vec<Blog>, ClientError> {
        let url = self.client.url("/api/blog/all");
        let response = self.client.http.get(&url).send().await.map_err(|e| {
            ClientError::NetworkError(format!("Failed to fetch blog collection: {}", e))
        })?;

        let body = check_success(response)
            .await?
            .json::<BlogListResponse>()
            .await
            .map_err(|e| {
                ClientError::DecodeError(format!("Failed to parse blog collection: {}", e))
            })?;

        Ok(body.blogs)
    }
}

/// Drop blogs that belong to another tenant.
pub(crate) fn retain_company(mut blogs: Vec<Blog>, company: &str) -> Vec<Blog> {
    blogs.retain(|blog| blog.company == company);
    blogs
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_FIXTURE: &str = r#"{
        "success": true,
        "blogs": [
            {
                "_id": "64b0f1",
                "title": "Intro to ABM",
                "description": "<p>Account-based marketing</p>",
                "category": "ABM",
                "image": "https://cdn.example.com/abm.jpg",
                "author": "Jordan",
                "createdAt": "2025-04-02T10:15:00Z",
                "isPublished": true,
                "slug": "intro-abm",
                "company": "acme"
            },
            {
                "_id": "64b0f2",
                "title": "Foreign Post",
                "category": "Sales",
                "slug": "foreign-post",
                "company": "other"
            }
        ]
    }"#;

    #[test]
    fn decodes_listing_payload() {
        let body: BlogListResponse = serde_json::from_str(LIST_FIXTURE).unwrap();
        assert!(body.success);
        assert_eq!(body.blogs.len(), 2);
        assert_eq!(body.blogs[0].slug, "intro-abm");
        assert_eq!(body.blogs[0].is_published, Some(true));
        // Omitted optional fields decode to defaults
        assert_eq!(body.blogs[1].description, "");
        assert_eq!(body.blogs[1].is_published, None);
    }

    #[test]
    fn retain_company_drops_foreign_tenants() {
        let body: BlogListResponse = serde_json::from_str(LIST_FIXTURE).unwrap();
        let scoped = retain_company(body.blogs, "acme");
        assert_eq!(scoped.len(), 1);
        assert!(scoped.iter().all(|b| b.company == "acme"));
    }

    #[test]
    fn decodes_single_blog_payload() {
        let body: SingleBlogResponse =
            serde_json::from_str(r#"{"success": false, "blog": null}"#).unwrap();
        assert!(!body.success);
        assert!(body.blog.is_none());
    }
}
