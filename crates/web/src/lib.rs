use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

use features::{athletes, categories, training_centers};

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::associate_center,
        categories::handlers::create_category,
        training_centers::handlers::create_training_center,
        training_centers::handlers::list_center_athletes,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::common::MessageResponse,
            storage::models::Athlete,
            storage::models::Category,
            storage::models::TrainingCenter,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration and updates"),
        (name = "categories", description = "Athlete categories"),
        (name = "training_centers", description = "Training centers and their athletes"),
    )
)]
pub struct ApiDoc;

/// Build the application router
pub fn app(db: Database) -> Router {
    Router::new()
        .merge(athletes::routes::routes())
        .merge(categories::routes::routes())
        .merge(training_centers::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
