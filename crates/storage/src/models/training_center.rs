use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingCenter {
    pub id: i64,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    #[sqlx(rename = "endereco")]
    pub address: String,
    #[serde(rename = "proprietario")]
    #[sqlx(rename = "proprietario")]
    pub owner: String,
}
