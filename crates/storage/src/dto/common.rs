use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by endpoints that do not echo a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
