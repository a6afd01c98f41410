use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub company: String,
}

/// Subscription acknowledgement; the API answers with `msg` on success and
/// `message` on failure.
#[derive(Debug, Deserialize)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubscribeResponse {
    /// User-facing message, whichever field the API populated.
    pub fn user_message(&self) -> Option<&str> {
        self.msg.as_deref().or(self.message.as_deref())
    }
}
