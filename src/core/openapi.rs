use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::delete_category,
        // Files
        files_handlers::list_files,
        files_handlers::create_file,
        files_handlers::delete_file,
        // Search
        search_handlers::search,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            ErrorResponse,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryResponseDto,
            // Files
            files_dtos::CreateFileDto,
            files_dtos::FileResponseDto,
            files_dtos::CreateFileResponseDto,
            // Search
            search_dtos::SearchQueryDto,
            search_dtos::SearchResultDto,
            search_dtos::SearchResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Category records"),
        (name = "files", description = "File metadata records"),
        (name = "search", description = "Search stub"),
    ),
    info(
        title = "Cloudio API",
        version = "0.1.0",
        description = "API documentation for Cloudio",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
