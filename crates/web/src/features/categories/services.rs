use storage::{
    Database, dto::category::CreateCategoryRequest, error::Result, models::Category,
    repository::category::CategoryRepository,
};

/// Create a new category
pub async fn create_category(db: &Database, request: &CreateCategoryRequest) -> Result<Category> {
    let mut conn = db.connect().await?;
    let category = CategoryRepository::new(&mut conn).create(request).await?;

    tracing::info!(category_id = category.id, "Category created");

    Ok(category)
}
