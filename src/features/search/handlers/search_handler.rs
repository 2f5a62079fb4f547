use axum::Json;

use crate::core::extractor::AppJson;
use crate::features::search::dtos::{SearchQueryDto, SearchResponseDto, SearchResultDto};

/// Run a search query
///
/// Stub: returns two canned results echoing the query text.
#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchQueryDto,
    responses(
        (status = 200, description = "Search results", body = SearchResponseDto),
        (status = 400, description = "Malformed body")
    ),
    tag = "search"
)]
pub async fn search(AppJson(query): AppJson<SearchQueryDto>) -> Json<SearchResponseDto> {
    tracing::info!("Received search query: {}", query.text);

    Json(SearchResponseDto {
        results: vec![
            SearchResultDto {
                text: format!("Example result 1: {}", query.text),
                source: "Source A".to_string(),
            },
            SearchResultDto {
                text: "Example result 2: hello world".to_string(),
                source: "Source B".to_string(),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use crate::features::search::routes;

    #[tokio::test]
    async fn search_echoes_query_in_canned_results() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server.post("/search").json(&json!({"text": "torah"})).await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["text"], "Example result 1: torah");
        assert_eq!(results[0]["source"], "Source A");
        assert_eq!(results[1]["source"], "Source B");
    }

    #[tokio::test]
    async fn search_rejects_malformed_body() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server.post("/search").json(&json!({"query": "torah"})).await;
        response.assert_status_bad_request();
    }
}
