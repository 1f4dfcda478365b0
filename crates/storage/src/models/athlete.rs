use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `atleta` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i64,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    #[serde(rename = "peso")]
    #[sqlx(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "altura")]
    #[sqlx(rename = "altura")]
    pub height: f64,
    #[serde(rename = "idade")]
    #[sqlx(rename = "idade")]
    pub age: i64,
    #[serde(rename = "sexo")]
    #[sqlx(rename = "sexo")]
    pub sex: String,
    /// National ID, unique across athletes
    pub cpf: String,
    #[serde(rename = "telefone")]
    #[sqlx(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "categoria_id")]
    #[sqlx(rename = "categoria_id")]
    pub category_id: Option<i64>,
    #[serde(rename = "centro_treinamento_id")]
    #[sqlx(rename = "centro_treinamento_id")]
    pub training_center_id: Option<i64>,
}
