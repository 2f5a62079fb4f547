use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::files::models::FileWithCategory;
use crate::shared::constants::{UNCATEGORIZED_ID, UNCATEGORIZED_LABEL};

/// Request DTO for creating a file record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFileDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 255, message = "Description must not exceed 255 characters"))]
    pub description: String,

    pub source_url: String,

    /// Referenced category; existence is left to the store's foreign key
    pub category_id: Option<i32>,

    /// video / pdf / image / other
    #[validate(length(max = 50, message = "Media type must not exceed 50 characters"))]
    pub media_type: String,
}

/// Response DTO for a listed file, joined with its category name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileResponseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub source_url: String,
    pub category_id: i32,
    pub media_type: String,
    pub category_name: String,
}

impl From<FileWithCategory> for FileResponseDto {
    fn from(row: FileWithCategory) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            source_url: row.source_url,
            category_id: row.category_id.unwrap_or(UNCATEGORIZED_ID),
            media_type: row.media_type,
            category_name: row
                .category_name
                .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string()),
        }
    }
}

/// Response DTO for file creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFileResponseDto {
    pub id: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: Option<(i32, &str)>) -> FileWithCategory {
        FileWithCategory {
            id: 7,
            title: "Doc1".to_string(),
            description: "d".to_string(),
            source_url: "http://x".to_string(),
            media_type: "pdf".to_string(),
            category_id: category.map(|(id, _)| id),
            category_name: category.map(|(_, name)| name.to_string()),
        }
    }

    #[test]
    fn joined_category_passes_through() {
        let dto = FileResponseDto::from(row(Some((3, "Work"))));
        assert_eq!(dto.category_id, 3);
        assert_eq!(dto.category_name, "Work");
    }

    #[test]
    fn missing_category_renders_sentinel() {
        let dto = FileResponseDto::from(row(None));
        assert_eq!(dto.category_id, UNCATEGORIZED_ID);
        assert_eq!(dto.category_name, UNCATEGORIZED_LABEL);
    }

    #[test]
    fn response_dto_uses_snake_case_fields() {
        let dto = FileResponseDto::from(row(Some((3, "Work"))));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["source_url"], "http://x");
        assert_eq!(json["media_type"], "pdf");
        assert_eq!(json["category_name"], "Work");
    }

    #[test]
    fn create_dto_rejects_empty_title() {
        let dto = CreateFileDto {
            title: String::new(),
            description: "d".to_string(),
            source_url: "http://x".to_string(),
            category_id: Some(1),
            media_type: "pdf".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_accepts_null_category() {
        let dto: CreateFileDto = serde_json::from_value(serde_json::json!({
            "title": "Doc1",
            "description": "d",
            "source_url": "http://x",
            "category_id": null,
            "media_type": "pdf"
        }))
        .unwrap();
        assert_eq!(dto.category_id, None);
        assert!(dto.validate().is_ok());
    }
}
