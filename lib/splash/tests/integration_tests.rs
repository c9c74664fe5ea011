//! Integration tests for `HyperClient` using wiremock.

use std::time::Duration;

use splash::{CancellationToken, HttpClient, HyperClient, Method, Request};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path, query_param},
};

fn request(method: Method, server: &MockServer, pathname: &str) -> splash::RequestBuilder {
    let url = format!("{}{pathname}", server.uri()).parse().expect("url");
    Request::builder(method, url)
}

#[tokio::test]
async fn test_get_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/photos/abc"))
        .and(header("Accept-Version", "v1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc", "likes": 3})),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = request(Method::Get, &mock_server, "/photos/abc")
        .header("Accept-Version", "v1")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_ok());
    assert_eq!(response.status(), 200);
    assert_eq!(response.content_type(), Some("application/json"));

    let body: serde_json::Value = serde_json::from_slice(response.body()).expect("json");
    assert_eq!(body["likes"], 3);
}

#[tokio::test]
async fn test_post_request_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"title":"Mountains"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 42})))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = request(Method::Post, &mock_server, "/collections")
        .header("Content-Type", "application/json")
        .body(r#"{"title":"Mountains"}"#)
        .build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_http_error_status_is_a_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = request(Method::Get, &mock_server, "/not-found").build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_client_error());
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "red car"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = request(Method::Get, &mock_server, "/search/photos")
        .query("query", "red car")
        .query("page", "1")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_response_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/with-headers"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Ratelimit-Remaining", "49")
                .set_body_json(serde_json::json!({"ok": true})),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = request(Method::Get, &mock_server, "/with-headers").build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.header("x-ratelimit-remaining"), Some("49"));
}

#[tokio::test]
async fn test_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let request = request(Method::Get, &mock_server, "/slow").build();

    let err = client.execute(request).await.expect_err("expected timeout error");
    assert!(err.is_timeout(), "Expected timeout error, got: {err}");
}

#[tokio::test]
async fn test_request_timeout_overrides_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let request = request(Method::Get, &mock_server, "/slow")
        .timeout(Some(Duration::from_secs(5)))
        .build();

    let response = client.execute(request).await.expect("response");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_cancelled_signal_aborts_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let signal = CancellationToken::new();
    signal.cancel();

    let client = HyperClient::new();
    let request = request(Method::Get, &mock_server, "/photos")
        .signal(Some(signal))
        .build();

    let err = client.execute(request).await.expect_err("expected abort");
    assert!(err.is_aborted(), "Expected abort, got: {err}");
}

#[tokio::test]
async fn test_signal_aborts_in_flight_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let signal = CancellationToken::new();
    let canceller = signal.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let client = HyperClient::new();
    let request = request(Method::Get, &mock_server, "/slow")
        .signal(Some(signal))
        .build();

    let err = client.execute(request).await.expect_err("expected abort");
    assert!(err.is_aborted(), "Expected abort, got: {err}");
}

#[tokio::test]
async fn test_connection_error() {
    let client = HyperClient::new();

    let url = "http://127.0.0.1:1".parse().expect("url");
    let request = Request::builder(Method::Get, url).build();

    let err = client.execute(request).await.expect_err("expected connection error");
    assert!(err.is_connection(), "Expected connection error, got: {err}");
}

#[tokio::test]
async fn test_delete_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/collections/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = request(Method::Delete, &mock_server, "/collections/1").build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.status(), 204);
    assert!(response.body().is_empty());
}
