use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category name (unique)
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_rejects_empty_name() {
        let dto = CreateCategoryDto {
            name: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_oversized_name() {
        let dto = CreateCategoryDto {
            name: "x".repeat(101),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn response_dto_serializes_flat() {
        let dto = CategoryResponseDto {
            id: 1,
            name: "Work".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Work"}));
    }
}
