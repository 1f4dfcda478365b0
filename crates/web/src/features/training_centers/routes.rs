use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_training_center, list_center_athletes};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/centros_treinamento/", post(create_training_center))
        .route(
            "/centros_treinamento/:center_id/atletas",
            get(list_center_athletes),
        )
}
