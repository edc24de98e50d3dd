//! Integration tests for the SIMBAD client (wiremock-based)

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_simbad::{CatalogClient, ConeSearch, SimbadClient, SimbadConfig, SimbadError};

fn config_for_mock(base_url: &str) -> SimbadConfig {
    SimbadConfig {
        base_url: base_url.to_string(),
        ..SimbadConfig::for_testing()
    }
}

fn orion_search() -> ConeSearch {
    ConeSearch {
        ra_degrees: 83.822,
        dec_degrees: -5.391,
        radius_degrees: 0.25,
        fields: vec!["redshift".into(), "flux_V".into()],
        max_rows: 50,
    }
}

const fn sample_output() -> &'static str {
    "C.D.S.  -  SIMBAD4 rel 1.8  -  2026.10.19CEST12:00:00\n\
     \n\
     ::data::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::\n\
     \n\
     M  42|HII|05 35 17.300|-05 23 28.00|~|4.0\n\
     * tet01 Ori C|Star|05 35 16.463|-05 23 22.85|0.000093|5.13\n"
}

#[tokio::test]
async fn cone_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sim-script"))
        .and(body_string_contains("query+coo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_output()))
        .mount(&server)
        .await;

    let client = SimbadClient::new(&config_for_mock(&server.uri())).unwrap();
    let rows = client.cone_search(&orion_search()).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].type_code, "HII");
    assert_eq!(rows[1].name, "* tet01 Ori C");
    assert_eq!(rows[1].fields.get("redshift"), Some(&0.000_093));
    assert_eq!(rows[1].fields.get("flux_V"), Some(&5.13));
}

#[tokio::test]
async fn cone_search_without_objects() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sim-script"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "::error::::::::::::::::::::::::::::\n\n[6] No astronomical object found : \n",
        ))
        .mount(&server)
        .await;

    let client = SimbadClient::new(&config_for_mock(&server.uri())).unwrap();
    let rows = client.cone_search(&orion_search()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn cone_search_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sim-script"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = SimbadClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.cone_search(&orion_search()).await.unwrap_err();
    assert!(matches!(err, SimbadError::ServiceUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unsupported_field_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = SimbadClient::new(&config_for_mock(&server.uri())).unwrap();
    let search = ConeSearch {
        fields: vec!["flux_XY".into()],
        ..orion_search()
    };
    let err = client.cone_search(&search).await.unwrap_err();
    assert!(matches!(err, SimbadError::UnsupportedField(_)));
}
