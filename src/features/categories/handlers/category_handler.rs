use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::MessageResponse;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate category name")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<CategoryResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok(Json(category))
}

/// Delete a category by id
///
/// Deleting a nonexistent id returns the same success response.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Category deleted")))
}
