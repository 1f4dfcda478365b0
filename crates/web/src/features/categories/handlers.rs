use axum::{Json, extract::State};
use storage::{Database, dto::category::CreateCategoryRequest, models::Category};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/categorias/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created successfully", body = Category),
        (status = 500, description = "Storage failure")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, WebError> {
    let category = services::create_category(&db, &req).await?;

    Ok(Json(category))
}
