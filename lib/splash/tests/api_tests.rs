//! End-to-end tests: endpoint definitions, composer, transport and classifier.

use std::time::Duration;

use assert2::{check, let_assert};
use serde::Deserialize;
use splash::prelude::*;
use splash::{Errors, UNRECOGNISED_ERROR_BODY};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Photo {
    id: String,
    likes: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct SearchPhotos {
    total: u32,
    results: Vec<Photo>,
}

fn api(server: &MockServer) -> ApiClient {
    let config = InitConfig::builder()
        .access_key("test-key")
        .api_url(server.uri())
        .header("User-Agent", "splash-tests")
        .build()
        .expect("config");
    create_api(config)
}

#[tokio::test]
async fn success_is_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/photos/abc"))
        .and(header("Accept-Version", "v1"))
        .and(header("Authorization", "Client-ID test-key"))
        .and(header("User-Agent", "splash-tests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc", "likes": 7})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let get_photo = api(&mock_server).bind(
        create_request_handler(|id: String| BaseRequestParams::get(format!("/photos/{id}"))),
        cast_response::<Photo>(),
    );

    let result = get_photo.call("abc".to_string()).await.expect("result");

    check!(
        result
            == ApiResult::Success {
                status: 200,
                response: Photo {
                    id: "abc".to_string(),
                    likes: 7,
                },
            }
    );
}

#[tokio::test]
async fn undefined_query_values_are_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "forest"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 1,
            "results": [{"id": "p1", "likes": 1}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let search = api(&mock_server).bind(
        create_request_handler(|(query, page, color): (String, u32, Option<String>)| {
            BaseRequestParams::get("/search/photos").with_query(
                Query::new()
                    .with("query", query)
                    .with("page", page)
                    .with("color", color),
            )
        }),
        cast_response::<SearchPhotos>(),
    );

    let result = search
        .call(("forest".to_string(), 2, None))
        .await
        .expect("result");

    let_assert!(ApiResult::Success { response, .. } = result);
    check!(response.total == 1);

    let requests = mock_server.received_requests().await.expect("recording");
    let_assert!([received] = requests.as_slice());
    check!(received.url.query() == Some("query=forest&page=2"));
}

#[tokio::test]
async fn api_error_is_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/photos/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"errors": ["Couldn't find Photo"]})),
        )
        .mount(&mock_server)
        .await;

    let get_photo = api(&mock_server).bind(
        create_request_handler(|id: String| BaseRequestParams::get(format!("/photos/{id}"))),
        cast_response::<Photo>(),
    );

    let result = get_photo.call("missing".to_string()).await.expect("result");

    check!(
        result
            == ApiResult::Error {
                status: 404,
                source: ErrorSource::Api,
                errors: vec!["Couldn't find Photo".to_string()],
            }
    );
}

#[tokio::test]
async fn unrecognised_error_body_is_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "oops"})),
        )
        .mount(&mock_server)
        .await;

    let me = api(&mock_server).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/me")),
        cast_response::<serde_json::Value>(),
    );

    let result = me.call(()).await.expect("result");

    check!(result.status() == 500);
    check!(result.source() == Some(ErrorSource::Decoding));
    check!(result.errors() == Some(&[UNRECOGNISED_ERROR_BODY.to_string()][..]));
}

#[tokio::test]
async fn html_error_page_is_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503).set_body_raw("<h1>Service Unavailable</h1>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let photos = api(&mock_server).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/photos")),
        cast_response::<Vec<Photo>>(),
    );

    let result = photos.call(()).await.expect("result");

    check!(result.status() == 503);
    check!(result.source() == Some(ErrorSource::Decoding));
}

#[tokio::test]
async fn success_with_wrong_shape_is_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1, "likes": "many"})),
        )
        .mount(&mock_server)
        .await;

    let get_photo = api(&mock_server).bind(
        create_request_handler(|id: String| BaseRequestParams::get(format!("/photos/{id}"))),
        cast_response::<Photo>(),
    );

    let result = get_photo.call("abc".to_string()).await.expect("result");

    let_assert!(
        ApiResult::Error {
            status: 200,
            source: ErrorSource::Decoding,
            errors,
        } = result
    );
    let_assert!([message] = errors.as_slice());
    check!(message.contains("id"));
}

#[tokio::test]
async fn per_call_headers_cannot_override_forced_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Accept-Version", "v1"))
        .and(header("Authorization", "Client-ID test-key"))
        .and(header("X-Per-Call", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let photos = api(&mock_server).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/photos")),
        cast_response::<Vec<Photo>>(),
    );

    let result = photos
        .call_with(
            (),
            CallOverrides::new()
                .header("X-Per-Call", "yes")
                .header("Accept-Version", "v0")
                .header("authorization", "Bearer other"),
        )
        .await
        .expect("result");

    check!(result.is_success());
}

#[tokio::test]
async fn json_body_is_sent() {
    #[derive(serde::Serialize)]
    struct NewCollection<'a> {
        title: &'a str,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections"))
        .and(header("Content-Type", "application/json"))
        .and(wiremock::matchers::body_json(serde_json::json!({"title": "Sea"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "c1", "likes": 0})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let create_collection = api(&mock_server).bind(
        create_request_handler(|(): ()| BaseRequestParams::post("/collections")),
        cast_response::<Photo>(),
    );

    let overrides = CallOverrides::new()
        .json(&NewCollection { title: "Sea" })
        .expect("json");
    let result = create_collection.call_with((), overrides).await.expect("result");

    check!(result.status() == 201);
}

#[tokio::test]
async fn custom_response_handler() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Total", "1234"))
        .mount(&mock_server)
        .await;

    let total = api(&mock_server).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/photos")),
        |response: splash::Response| async move {
            response
                .header("x-total")
                .and_then(|total| total.parse::<u64>().ok())
                .ok_or_else(|| Error::decoding("missing X-Total header"))
        },
    );

    let result = total.call(()).await.expect("result");
    check!(result.response() == Some(&1234));
}

#[tokio::test]
async fn abort_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let photos = api(&mock_server).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/photos")),
        cast_response::<Vec<Photo>>(),
    );

    let signal = CancellationToken::new();
    let canceller = signal.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let result = photos
        .call_with((), CallOverrides::new().signal(signal))
        .await;

    let_assert!(Err(Error::Aborted) = result);
}

#[tokio::test]
async fn init_timeout_applies_when_call_has_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let config = InitConfig::builder()
        .api_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .expect("config");
    let photos = create_api(config).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/photos")),
        cast_response::<Vec<Photo>>(),
    );

    let_assert!(Err(err) = photos.call(()).await);
    check!(err.is_timeout());
}

#[tokio::test]
async fn custom_classifier() {
    struct StatusOnly;

    impl splash::ErrorClassifier for StatusOnly {
        fn classify(&self, status: u16, _body: &serde_json::Value) -> (ErrorSource, Errors) {
            (ErrorSource::Api, vec![format!("HTTP {status}")])
        }
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let photos = api(&mock_server).with_classifier(StatusOnly).bind(
        create_request_handler(|(): ()| BaseRequestParams::get("/photos")),
        cast_response::<Vec<Photo>>(),
    );

    let result = photos.call(()).await.expect("result");
    check!(result.errors() == Some(&["HTTP 429".to_string()][..]));
}
