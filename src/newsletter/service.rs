use crate::api::client::{ApiClient, check_success};
use crate::newsletter::model::{SubscribeRequest, SubscribeResponse};
use crate::utils::error::ClientError;

pub struct SubscriptionService {
    client: ApiClient,
}

impl SubscriptionService {
    pub fn new(client: &ApiClient) -> Self {
        SubscriptionService {
            client: client.clone(),
        }
    }

    /// Subscribe an email address to the active tenant's newsletter.
    ///
    /// Returns the API's user-facing message on success; failures are
    /// transient and retryable by resubmission.
    pub async fn subscribe(&self, email: &str) -> Result<String, ClientError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ClientError::ValidationError(
                "Please enter your email".into(),
            ));
        }

        let url = self.client.url("/api/blog/subscribe");
        let response = self
            .client
            .http
            .post(&url)
            .json(&SubscribeRequest {
                email: email.to_string(),
                company: self.client.company.clone(),
            })
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(format!("Failed to subscribe: {}", e)))?;

        let body = check_success(response)
            .await?
            .json::<SubscribeResponse>()
            .await
            .map_err(|e| {
                ClientError::DecodeError(format!("Failed to parse subscribe response: {}", e))
            })?;

        if !body.success {
            return Err(ClientError::ApiError(
                body.user_message()
                    .unwrap_or("Subscription failed")
                    .to_string(),
            ));
        }

        Ok(body
            .user_message()
            .unwrap_or("Subscribed successfully")
            .to_string())
    }
}
