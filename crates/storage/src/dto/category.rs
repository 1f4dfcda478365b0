use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nome")]
    pub name: String,
}
