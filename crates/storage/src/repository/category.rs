use sqlx::SqliteConnection;

use crate::dto::category::CreateCategoryRequest;
use crate::error::Result;
use crate::models::Category;

pub struct CategoryRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a new category. Names are not required to be unique.
    pub async fn create(&mut self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categoria (nome) VALUES (?) RETURNING id, nome",
        )
        .bind(&req.name)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(category)
    }
}
