//! End-to-end tests for the wired sky-reply pipeline (wiremock-based)
//!
//! Every external service is served by one mock server under its own path
//! prefix; the services are built from configuration exactly as the binary
//! builds them.

use application::ports::InboundRecord;
use application::{DRY_RUN_LINK, Outcome};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infrastructure::{AppConfig, build_services};

const CREATED_AT: &str = "Sat Nov 08 21:30:00 +0000 2014";

fn config_for_mock(base_url: &str, dry_run: bool) -> AppConfig {
    let mut config = AppConfig::for_testing();
    config.bot.dry_run = dry_run;
    config.places.base_url = format!("{base_url}/places");
    config.simbad.base_url = format!("{base_url}/simbad");
    config.tagger.base_url = base_url.to_string();
    config.twitter.api_base_url = format!("{base_url}/twitter");
    config.twitter.upload_base_url = format!("{base_url}/twitter");
    config.twitter.stream_url = format!("{base_url}/twitter/statuses/filter.json");
    config.publishing.cutout_url = format!("{base_url}/cutout");
    config.publishing.blog_api_url = format!("{base_url}/blog");
    config
}

async fn mount_place(server: &MockServer, input: &str, description: &str, terms: &[&str]) {
    let terms: Vec<_> = terms
        .iter()
        .map(|t| serde_json::json!({"offset": 0, "value": t}))
        .collect();
    let body = serde_json::json!({
        "status": "OK",
        "predictions": [{"place_id": "place-1", "description": description, "terms": terms}]
    });

    Mock::given(method("GET"))
        .and(path("/places/autocomplete/json"))
        .and(query_param("input", input))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/places/details/json"))
        .and(query_param("placeid", "place-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"OK","result":{"geometry":{"location":{"lat":48.856614,"lng":2.3522219}}}}"#,
        ))
        .mount(server)
        .await;
}

async fn mount_catalog(server: &MockServer) {
    let columns = 2 + 9;
    let missing = vec!["~"; columns - 1].join("|");
    let output = format!(
        "C.D.S.  -  SIMBAD4\n\n::data::::::::::::::::::::\n\nNGC 2403|G|07 36 51.396|+65 36 09.17|0.000445|{missing}\n"
    );

    Mock::given(method("POST"))
        .and(path("/simbad/sim-script"))
        .respond_with(ResponseTemplate::new(200).set_body_string(output))
        .mount(server)
        .await;
}

fn message(id: &str, author: &str, text: &str) -> InboundRecord {
    InboundRecord::message(id, author, text, CREATED_AT).with_time_zone("Paris")
}

#[tokio::test]
async fn direct_request_is_published_and_posted() {
    let server = MockServer::start().await;
    mount_place(&server, "Paris", "Paris, France", &["Paris", "France"]).await;
    mount_catalog(&server).await;

    Mock::given(method("GET"))
        .and(path("/cutout"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF]),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/blog/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"short_url":"https://b.lg/1"}"#))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/twitter/media/upload.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"media_id_string":"777"}"#))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/twitter/statuses/update.json"))
        .and(body_string_contains("in_reply_to_status_id=42"))
        .and(body_string_contains("media_ids=777"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id_str":"43"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let services = build_services(&config_for_mock(&server.uri(), false)).unwrap();
    let outcome = services
        .sky_reply
        .handle(&message("42", "stargazer", "@WhatsAboveMe Paris"))
        .await
        .unwrap();

    let Some(Outcome::Replied(reply)) = outcome else {
        panic!("expected a sky reply, got {outcome:?}");
    };
    assert!(reply.posted);
    assert!(reply.has_image);
    assert_eq!(reply.link, "https://b.lg/1");
    assert_eq!(reply.report.object.name, "NGC 2403");
    assert!(reply.text.starts_with("@stargazer"));
    assert!(reply.text.ends_with("https://b.lg/1"));
}

#[tokio::test]
async fn dry_run_touches_only_lookups() {
    let server = MockServer::start().await;
    mount_place(&server, "Paris", "Paris, France", &["Paris", "France"]).await;
    mount_catalog(&server).await;

    for (verb, route) in [
        ("GET", "/cutout"),
        ("POST", "/blog/posts"),
        ("POST", "/twitter/statuses/update.json"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
    }

    let mut config = config_for_mock(&server.uri(), true);
    config.twitter.bearer_token = String::new();
    let services = build_services(&config).unwrap();

    let outcome = services
        .sky_reply
        .handle(&message("42", "stargazer", "@WhatsAboveMe Paris"))
        .await
        .unwrap();

    let Some(Outcome::Replied(reply)) = outcome else {
        panic!("expected a sky reply, got {outcome:?}");
    };
    assert!(!reply.posted);
    assert_eq!(reply.link, DRY_RUN_LINK);
}

#[tokio::test]
async fn embedded_location_goes_through_tagger() {
    let server = MockServer::start().await;
    mount_place(&server, "Rome", "Rome, Metropolitan City of Rome, Italy", &["Rome", "Italy"])
        .await;
    mount_catalog(&server).await;

    Mock::given(method("POST"))
        .and(path("/tag"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "I O\nam O\nvisiting O\nRome B-GPE\nnext O\nweek O\n",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let services = build_services(&config_for_mock(&server.uri(), true)).unwrap();
    let outcome = services
        .sky_reply
        .handle(&message("7", "traveller", "I am visiting Rome next week"))
        .await
        .unwrap();

    let Some(Outcome::Replied(reply)) = outcome else {
        panic!("expected a sky reply, got {outcome:?}");
    };
    assert_eq!(reply.report.location.description(), "Rome, Metropolitan City of Rome, Italy");
}

#[tokio::test]
async fn unknown_place_gets_no_reply() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/autocomplete/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"status":"ZERO_RESULTS","predictions":[]}"#),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/simbad/sim-script"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let services = build_services(&config_for_mock(&server.uri(), true)).unwrap();
    let outcome = services
        .sky_reply
        .handle(&message("9", "stargazer", "@WhatsAboveMe Xyzzyville"))
        .await
        .unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn stream_run_follows_and_skips_keep_alives() {
    let server = MockServer::start().await;

    let follow = serde_json::json!({
        "id_str": "100",
        "text": "@WhatsAboveMe follow",
        "created_at": CREATED_AT,
        "user": {"screen_name": "stargazer", "time_zone": "Paris"}
    });
    let own = serde_json::json!({
        "id_str": "101",
        "text": "@stargazer Above Paris is NGC 2403",
        "created_at": CREATED_AT,
        "user": {"screen_name": "WhatsAboveMe"}
    });
    let body = format!("\r\n{follow}\r\n\r\n{own}\r\n");

    Mock::given(method("GET"))
        .and(path("/twitter/statuses/filter.json"))
        .and(query_param("track", "@WhatsAboveMe"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/twitter/friendships/create.json"))
        .and(body_string_contains("screen_name=stargazer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/twitter/statuses/update.json"))
        .and(body_string_contains("in_reply_to_status_id=100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id_str":"102"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let services = build_services(&config_for_mock(&server.uri(), false)).unwrap();
    let stream = services.social.open_stream().await.unwrap();
    let summary = services.sky_reply.run(stream).await.unwrap();

    assert_eq!(summary.replied, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.received, summary.replied + summary.ignored);
    assert!(summary.ignored >= 1);
}

#[tokio::test]
async fn malformed_stream_line_does_not_stop_run() {
    let server = MockServer::start().await;

    let first = serde_json::json!({
        "id_str": "200",
        "text": "@WhatsAboveMe follow",
        "created_at": CREATED_AT,
        "user": {"screen_name": "stargazer"}
    });
    let second = serde_json::json!({
        "id_str": "202",
        "text": "@WhatsAboveMe follow",
        "created_at": CREATED_AT,
        "user": {"screen_name": "nightowl"}
    });
    let body = format!("{first}\r\n{{\"id_str\":\"201\",\"text\r\n{second}\r\n");

    Mock::given(method("GET"))
        .and(path("/twitter/statuses/filter.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/twitter/friendships/create.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/twitter/statuses/update.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id_str":"300"}"#))
        .expect(2)
        .mount(&server)
        .await;

    let services = build_services(&config_for_mock(&server.uri(), false)).unwrap();
    let stream = services.social.open_stream().await.unwrap();
    let summary = services.sky_reply.run(stream).await.unwrap();

    assert_eq!(summary.received, 3);
    assert_eq!(summary.replied, 2);
    assert_eq!(summary.ignored, 1);
    assert_eq!(summary.failed, 0);
}
