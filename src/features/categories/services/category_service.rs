use crate::core::database::ConnectionProvider;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::Category;

/// Service for category operations
pub struct CategoryService {
    db: ConnectionProvider,
}

impl CategoryService {
    pub fn new(db: ConnectionProvider) -> Self {
        Self { db }
    }

    /// List all categories ordered by ascending id
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let mut conn = self.db.connect().await?;

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Create a new category
    ///
    /// A duplicate name surfaces as a conflict carrying the store's
    /// error message.
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let mut conn = self.db.connect().await?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&dto.name)
        .fetch_one(&mut conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::from_db(e)
        })?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    /// Delete a category by id
    ///
    /// Deleting an id that does not exist is a no-op; referencing files
    /// have their category reference nulled by the store.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Category delete: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );

        Ok(())
    }
}
