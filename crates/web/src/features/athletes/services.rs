use storage::{
    Database,
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// Create a new athlete
pub async fn create_athlete(db: &Database, request: &CreateAthleteRequest) -> Result<Athlete> {
    let mut conn = db.connect().await?;
    let athlete = AthleteRepository::new(&mut conn).create(request).await?;

    tracing::info!(athlete_id = athlete.id, "Athlete created");

    Ok(athlete)
}

/// Apply a partial update to an athlete
pub async fn update_athlete(
    db: &Database,
    athlete_id: i64,
    request: &UpdateAthleteRequest,
) -> Result<()> {
    let mut conn = db.connect().await?;
    let touched = AthleteRepository::new(&mut conn)
        .update(athlete_id, request)
        .await?;

    tracing::info!(athlete_id, rows = touched, "Athlete updated");

    Ok(())
}

/// Attach an athlete to a training center
pub async fn associate_center(db: &Database, athlete_id: i64, center_id: i64) -> Result<()> {
    let mut conn = db.connect().await?;
    let touched = AthleteRepository::new(&mut conn)
        .associate_center(athlete_id, center_id)
        .await?;

    tracing::info!(athlete_id, center_id, rows = touched, "Athlete associated with center");

    Ok(())
}
