//! Integration tests for the publishing clients (wiremock-based)

use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_publishing::{
    BlogClient, BlogPost, CutoutClient, CutoutRequest, HttpBlogClient, HttpCutoutClient,
    PublishingConfig, PublishingError,
};

fn config_for_mock(base_url: &str) -> PublishingConfig {
    PublishingConfig {
        cutout_url: format!("{base_url}/cutout"),
        blog_api_url: format!("{base_url}/api"),
        ..PublishingConfig::for_testing()
    }
}

fn andromeda() -> CutoutRequest {
    CutoutRequest {
        ra_degrees: 10.684_708,
        dec_degrees: 41.268_75,
    }
}

fn post() -> BlogPost {
    BlogPost {
        title: "M 31 above Paris".into(),
        body: "<p>Galaxies can contain...</p>".into(),
        tags: vec!["Paris, France".into(), "Galaxy".into()],
    }
}

#[tokio::test]
async fn cutout_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cutout"))
        .and(query_param("ra", "10.684708"))
        .and(query_param("width", "64"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]),
        )
        .mount(&server)
        .await;

    let client = HttpCutoutClient::new(&config_for_mock(&server.uri())).unwrap();
    let bytes = client.fetch(andromeda()).await.unwrap();
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test]
async fn cutout_rejects_html() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cutout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html>outside footprint</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let client = HttpCutoutClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch(andromeda()).await.unwrap_err();
    assert!(matches!(err, PublishingError::NotAnImage(ct) if ct == "text/html"));
}

#[tokio::test]
async fn publish_returns_link() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(serde_json::json!({"title": "M 31 above Paris"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_string(r#"{"id":"42","url":"https://blog.example/m-31-above-paris"}"#),
        )
        .mount(&server)
        .await;

    let client = HttpBlogClient::new(&config_for_mock(&server.uri())).unwrap();
    let link = client.publish(&post()).await.unwrap();
    assert_eq!(link, "https://blog.example/m-31-above-paris");
}

#[tokio::test]
async fn publish_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = HttpBlogClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.publish(&post()).await.unwrap_err();
    assert!(matches!(err, PublishingError::Unauthorized));
}

#[tokio::test]
async fn publish_without_link_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"42"}"#))
        .mount(&server)
        .await;

    let client = HttpBlogClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.publish(&post()).await.unwrap_err();
    assert!(matches!(err, PublishingError::ParseError(_)));
}
