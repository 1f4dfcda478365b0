use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::training_center::CreateTrainingCenterRequest,
    models::{Athlete, TrainingCenter},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/centros_treinamento/",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 200, description = "Training center created successfully", body = TrainingCenter),
        (status = 500, description = "Storage failure")
    ),
    tag = "training_centers"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> Result<Json<TrainingCenter>, WebError> {
    let center = services::create_training_center(&db, &req).await?;

    Ok(Json(center))
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/{center_id}/atletas",
    params(
        ("center_id" = i64, Path, description = "Training center ID")
    ),
    responses(
        (status = 200, description = "Athletes attached to the training center", body = Vec<Athlete>),
        (status = 500, description = "Storage failure")
    ),
    tag = "training_centers"
)]
pub async fn list_center_athletes(
    State(db): State<Database>,
    Path(center_id): Path<i64>,
) -> Result<Json<Vec<Athlete>>, WebError> {
    let athletes = services::list_athletes(&db, center_id).await?;

    Ok(Json(athletes))
}
