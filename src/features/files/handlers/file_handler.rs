use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::files::dtos::{CreateFileDto, CreateFileResponseDto, FileResponseDto};
use crate::features::files::services::FileService;
use crate::shared::types::MessageResponse;

/// List all files with their category names
#[utoipa::path(
    get,
    path = "/files",
    responses(
        (status = 200, description = "List of files, newest first", body = Vec<FileResponseDto>),
    ),
    tag = "files"
)]
pub async fn list_files(
    State(service): State<Arc<FileService>>,
) -> Result<Json<Vec<FileResponseDto>>> {
    let files = service.list().await?;
    Ok(Json(files))
}

/// Create a file record
#[utoipa::path(
    post,
    path = "/files",
    request_body = CreateFileDto,
    responses(
        (status = 200, description = "File created", body = CreateFileResponseDto),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "files"
)]
pub async fn create_file(
    State(service): State<Arc<FileService>>,
    AppJson(dto): AppJson<CreateFileDto>,
) -> Result<Json<CreateFileResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok(Json(CreateFileResponseDto {
        id,
        message: "File added".to_string(),
    }))
}

/// Delete a file record by id
///
/// Deleting a nonexistent id returns the same success response.
#[utoipa::path(
    delete,
    path = "/files/{id}",
    params(
        ("id" = i32, Path, description = "File id")
    ),
    responses(
        (status = 200, description = "File deleted", body = MessageResponse),
    ),
    tag = "files"
)]
pub async fn delete_file(
    State(service): State<Arc<FileService>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Deleted successfully")))
}
