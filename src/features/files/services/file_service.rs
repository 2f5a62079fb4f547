use crate::core::database::ConnectionProvider;
use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{CreateFileDto, FileResponseDto};
use crate::features::files::models::{File, FileWithCategory};

/// Service for file-metadata operations
pub struct FileService {
    db: ConnectionProvider,
}

impl FileService {
    pub fn new(db: ConnectionProvider) -> Self {
        Self { db }
    }

    /// List all files newest-first, each joined with its category name
    pub async fn list(&self) -> Result<Vec<FileResponseDto>> {
        let mut conn = self.db.connect().await?;

        let rows = sqlx::query_as::<_, FileWithCategory>(
            r#"
            SELECT f.id, f.title, f.description, f.source_url, f.media_type,
                   c.id AS category_id, c.name AS category_name
            FROM files f
            LEFT JOIN categories c ON f.category_id = c.id
            ORDER BY f.id DESC
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list files: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Insert a file record and return its generated id
    ///
    /// `category_id` is not checked before the insert; an orphaned
    /// reference is rejected by the store's foreign key.
    pub async fn create(&self, dto: CreateFileDto) -> Result<i32> {
        let mut conn = self.db.connect().await?;

        let file = sqlx::query_as::<_, File>(
            r#"
            INSERT INTO files (title, description, source_url, category_id, media_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, source_url, category_id, media_type
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.source_url)
        .bind(dto.category_id)
        .bind(&dto.media_type)
        .fetch_one(&mut conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create file: {:?}", e);
            AppError::from_db(e)
        })?;

        tracing::info!("File created: id={}, title={}", file.id, file.title);

        Ok(file.id)
    }

    /// Delete a file record by id; a missing id is a no-op
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete file: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "File delete: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );

        Ok(())
    }
}
