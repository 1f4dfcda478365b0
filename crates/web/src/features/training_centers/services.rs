use storage::{
    Database,
    dto::training_center::CreateTrainingCenterRequest,
    error::Result,
    models::{Athlete, TrainingCenter},
    repository::{athlete::AthleteRepository, training_center::TrainingCenterRepository},
};

/// Create a new training center
pub async fn create_training_center(
    db: &Database,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let mut conn = db.connect().await?;
    let center = TrainingCenterRepository::new(&mut conn)
        .create(request)
        .await?;

    tracing::info!(center_id = center.id, "Training center created");

    Ok(center)
}

/// List the athletes attached to a training center
pub async fn list_athletes(db: &Database, center_id: i64) -> Result<Vec<Athlete>> {
    let mut conn = db.connect().await?;
    AthleteRepository::new(&mut conn)
        .list_by_center(center_id)
        .await
}
