use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "peso")]
    pub weight: f64,

    #[serde(rename = "altura")]
    pub height: f64,

    #[serde(rename = "idade")]
    pub age: i64,

    #[serde(rename = "sexo")]
    pub sex: String,

    pub cpf: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    #[serde(rename = "categoria_id")]
    pub category_id: i64,
}

/// Request payload for a partial athlete update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAthleteRequest {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "peso", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(rename = "altura", default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,

    #[serde(rename = "sexo", default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(rename = "categoria_id", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Typed parameter for one `column = ?` assignment
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Real(f64),
    Integer(i64),
}

impl UpdateAthleteRequest {
    /// Column assignments for the supplied fields, in table order
    pub fn changes(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut changes = Vec::new();

        if let Some(name) = &self.name {
            changes.push(("nome", ColumnValue::Text(name.clone())));
        }
        if let Some(weight) = self.weight {
            changes.push(("peso", ColumnValue::Real(weight)));
        }
        if let Some(height) = self.height {
            changes.push(("altura", ColumnValue::Real(height)));
        }
        if let Some(age) = self.age {
            changes.push(("idade", ColumnValue::Integer(age)));
        }
        if let Some(sex) = &self.sex {
            changes.push(("sexo", ColumnValue::Text(sex.clone())));
        }
        if let Some(cpf) = &self.cpf {
            changes.push(("cpf", ColumnValue::Text(cpf.clone())));
        }
        if let Some(phone) = &self.phone {
            changes.push(("telefone", ColumnValue::Text(phone.clone())));
        }
        if let Some(category_id) = self.category_id {
            changes.push(("categoria_id", ColumnValue::Integer(category_id)));
        }

        changes
    }
}
