//! Photos demo
//!
//! Lists the latest photos, fetches one of them and runs a search.
//! Set `UNSPLASH_ACCESS_KEY` to talk to the real API, and `RUST_LOG=debug`
//! to see the composed requests.

// Demo-specific lint allowances
#![allow(missing_docs)]

use serde::Deserialize;
use splash::prelude::*;
use splash::{HandleRequest, create_api_with};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub username: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Photo {
    pub id: String,
    pub description: Option<String>,
    pub likes: u32,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Search<T> {
    pub total: u32,
    pub total_pages: u32,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchPhotosParams {
    pub query: String,
    pub pagination: Pagination,
    pub orientation: Option<String>,
    pub collection_ids: Vec<String>,
}

// ============================================================================
// Endpoints
// ============================================================================

mod photos {
    use super::{Pagination, SearchPhotosParams};
    use splash::{BaseRequestParams, HandleRequest, Query, create_request_handler};

    pub fn list() -> impl HandleRequest<Pagination> + Clone {
        create_request_handler(|Pagination { page, per_page }: Pagination| {
            BaseRequestParams::get("/photos").with_query(
                Query::new().with("page", page).with("per_page", per_page),
            )
        })
    }

    pub fn get() -> impl HandleRequest<String> + Clone {
        create_request_handler(|photo_id: String| {
            BaseRequestParams::get(format!("/photos/{photo_id}"))
        })
    }

    pub fn search() -> impl HandleRequest<SearchPhotosParams> + Clone {
        create_request_handler(|params: SearchPhotosParams| {
            let collections = (!params.collection_ids.is_empty())
                .then(|| params.collection_ids.join(","));
            BaseRequestParams::get("/search/photos").with_query(
                Query::new()
                    .with("query", params.query)
                    .with("page", params.pagination.page)
                    .with("per_page", params.pagination.per_page)
                    .with("orientation", params.orientation)
                    .with("collections", collections),
            )
        })
    }
}

// ============================================================================
// Main
// ============================================================================

fn init_config() -> splash::Result<InitConfig> {
    let mut builder = InitConfig::builder();
    if let Ok(access_key) = std::env::var("UNSPLASH_ACCESS_KEY") {
        builder = builder.access_key(access_key);
    }
    if let Ok(api_url) = std::env::var("UNSPLASH_API_URL") {
        builder = builder.api_url(api_url);
    }
    builder.build()
}

fn log_error<T>(result: &ApiResult<T>) {
    if let ApiResult::Error {
        status,
        source,
        errors,
    } = result
    {
        warn!(status, %source, ?errors, "call failed");
    }
}

#[tokio::main]
async fn main() -> splash::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let http = HyperClient::builder().with_logging().build();
    let api = create_api_with(init_config()?, http);

    let list_photos = api.bind(photos::list(), cast_response::<Vec<Photo>>());
    let get_photo = api.bind(photos::get(), cast_response::<Photo>());
    let search_photos = api.bind(photos::search(), cast_response::<Search<Photo>>());

    let latest = list_photos
        .call(Pagination {
            page: Some(1),
            per_page: Some(5),
        })
        .await?;
    log_error(&latest);

    if let Some(first) = latest.response().and_then(|photos| photos.first()) {
        info!(id = %first.id, by = %first.user.username, "latest photo");

        let photo = get_photo.call(first.id.clone()).await?;
        match &photo {
            ApiResult::Success { response, .. } => {
                info!(
                    id = %response.id,
                    likes = response.likes,
                    description = ?response.description,
                    "photo"
                );
            }
            ApiResult::Error { .. } => log_error(&photo),
        }
    }

    let preview = photos::search().handle(
        SearchPhotosParams {
            query: "mountains".to_string(),
            ..SearchPhotosParams::default()
        },
        CallOverrides::new(),
    );
    info!(pathname = %preview.pathname, "searching");

    let found = search_photos
        .call(SearchPhotosParams {
            query: "mountains".to_string(),
            orientation: Some("landscape".to_string()),
            ..SearchPhotosParams::default()
        })
        .await?;
    match &found {
        ApiResult::Success { response, .. } => {
            info!(total = response.total, pages = response.total_pages, "search results");
        }
        ApiResult::Error { .. } => log_error(&found),
    }

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param, query_param_is_missing},
    };

    fn api(server: &MockServer) -> ApiClient {
        let config = InitConfig::builder()
            .access_key("demo-key")
            .api_url(server.uri())
            .build()
            .expect("config");
        splash::create_api(config)
    }

    fn photo_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "description": null,
            "likes": 12,
            "user": {"username": "jane", "name": "Jane"},
        })
    }

    #[tokio::test]
    async fn test_list_photos() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/photos"))
            .and(query_param("page", "2"))
            .and(query_param_is_missing("per_page"))
            .and(header("Authorization", "Client-ID demo-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([photo_json("a"), photo_json("b")])),
            )
            .mount(&mock_server)
            .await;

        let list_photos = api(&mock_server).bind(photos::list(), cast_response::<Vec<Photo>>());
        let result = list_photos
            .call(Pagination {
                page: Some(2),
                per_page: None,
            })
            .await
            .expect("result");

        let photos = result.response().expect("success");
        assert_eq!(photos.len(), 2);
        assert_eq!(photos.first().expect("first photo").user.username, "jane");
    }

    #[tokio::test]
    async fn test_get_photo_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/photos/nope"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"errors": ["Couldn't find Photo"]})),
            )
            .mount(&mock_server)
            .await;

        let get_photo = api(&mock_server).bind(photos::get(), cast_response::<Photo>());
        let result = get_photo.call("nope".to_string()).await.expect("result");

        assert_eq!(result.status(), 404);
        assert_eq!(result.source(), Some(ErrorSource::Api));
        assert_eq!(result.errors(), Some(&["Couldn't find Photo".to_string()][..]));
    }

    #[tokio::test]
    async fn test_search_photos() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("query", "sea"))
            .and(query_param("collections", "1,2"))
            .and(query_param_is_missing("orientation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 1,
                "total_pages": 1,
                "results": [photo_json("s1")],
            })))
            .mount(&mock_server)
            .await;

        let search = api(&mock_server).bind(photos::search(), cast_response::<Search<Photo>>());
        let result = search
            .call(SearchPhotosParams {
                query: "sea".to_string(),
                collection_ids: vec!["1".to_string(), "2".to_string()],
                ..SearchPhotosParams::default()
            })
            .await
            .expect("result");

        let found = result.response().expect("success");
        assert_eq!(found.total, 1);
        assert_eq!(found.results.first().expect("first result").id, "s1");
    }
}
