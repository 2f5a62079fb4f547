use sqlx::FromRow;

/// Database model for file metadata
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct File {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub source_url: String,
    pub category_id: Option<i32>,
    pub media_type: String,
}

/// Row shape of the file listing, left-joined with categories.
///
/// `category_id` and `category_name` come from the categories side of the
/// join, so both are NULL when the referenced category is gone.
#[derive(Debug, Clone, FromRow)]
pub struct FileWithCategory {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub source_url: String,
    pub media_type: String,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}
