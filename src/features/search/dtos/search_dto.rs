use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for a search query
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQueryDto {
    pub text: String,
}

/// A single search result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub text: String,
    pub source: String,
}

/// Response DTO for a search query
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponseDto {
    pub results: Vec<SearchResultDto>,
}
