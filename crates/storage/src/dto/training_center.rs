use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "proprietario")]
    pub owner: String,
}
