use sqlx::SqliteConnection;

use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::Result;
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a new training center
    pub async fn create(&mut self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO centro_treinamento (nome, endereco, proprietario)
            VALUES (?, ?, ?)
            RETURNING id, nome, endereco, proprietario
            "#,
        )
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.owner)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(center)
    }
}
