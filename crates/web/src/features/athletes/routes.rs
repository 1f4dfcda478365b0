use axum::{
    Router,
    routing::{post, put},
};
use storage::Database;

use super::handlers::{associate_center, create_athlete, update_athlete};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/atletas/", post(create_athlete))
        .route("/atletas/:athlete_id", put(update_athlete))
        .route(
            "/atletas/:athlete_id/associar_centro/:center_id",
            post(associate_center),
        )
}
