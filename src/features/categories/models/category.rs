use sqlx::FromRow;

use crate::features::categories::dtos::CategoryResponseDto;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}
