use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::{
        athlete::{CreateAthleteRequest, UpdateAthleteRequest},
        common::MessageResponse,
    },
    models::Athlete,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/atletas/",
    request_body = CreateAthleteRequest,
    responses(
        (status = 200, description = "Athlete created successfully", body = Athlete),
        (status = 400, description = "CPF or phone already registered"),
        (status = 500, description = "Storage failure")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Json<Athlete>, WebError> {
    let athlete = services::create_athlete(&db, &req).await?;

    Ok(Json(athlete))
}

#[utoipa::path(
    put,
    path = "/atletas/{athlete_id}",
    params(
        ("athlete_id" = i64, Path, description = "Athlete ID")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = MessageResponse),
        (status = 400, description = "No field supplied"),
        (status = 500, description = "Storage failure")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(athlete_id): Path<i64>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> Result<Json<MessageResponse>, WebError> {
    services::update_athlete(&db, athlete_id, &update_req).await?;

    Ok(Json(MessageResponse::new(format!(
        "Atleta com ID {athlete_id} atualizado com sucesso"
    ))))
}

#[utoipa::path(
    post,
    path = "/atletas/{athlete_id}/associar_centro/{center_id}",
    params(
        ("athlete_id" = i64, Path, description = "Athlete ID"),
        ("center_id" = i64, Path, description = "Training center ID")
    ),
    responses(
        (status = 200, description = "Athlete associated with the training center", body = MessageResponse),
        (status = 500, description = "Storage failure")
    ),
    tag = "athletes"
)]
pub async fn associate_center(
    State(db): State<Database>,
    Path((athlete_id, center_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, WebError> {
    services::associate_center(&db, athlete_id, center_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Atleta {athlete_id} associado ao Centro de Treinamento {center_id}"
    ))))
}
