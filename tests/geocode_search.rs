mod common;

use skycast::data::geocode::GeocodeClient;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const SPRINGFIELDS: &str = r#"
[
  {"name": "Springfield", "lat": 39.799, "lon": -89.644, "country": "US", "state": "Illinois"},
  {"name": "Springfield", "lat": 44.046, "lon": -123.022, "country": "US", "state": "Oregon"},
  {"name": "Springfield", "lat": 42.101, "lon": -72.590, "country": "US", "state": "Massachusetts"}
]
"#;

#[tokio::test]
async fn search_preserves_upstream_order_and_caps_via_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .and(query_param("q", "Springfield"))
        .and(query_param("limit", "5"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SPRINGFIELDS, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(server.uri(), "test-key");
    let results = client.search("Springfield").await.expect("search");

    let states: Vec<Option<&str>> = results.iter().map(|l| l.state.as_deref()).collect();
    assert_eq!(
        states,
        [Some("Illinois"), Some("Oregon"), Some("Massachusetts")]
    );
}

#[tokio::test]
async fn unknown_city_is_an_empty_list_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(server.uri(), "test-key");
    let results = client.search("Nowhereville").await.expect("search");
    assert!(results.is_empty());
}

#[tokio::test]
async fn reverse_lookup_returns_first_candidate() {
    let server = MockServer::start().await;
    let body = r#"[{"name": "New York", "lat": 40.7128, "lon": -74.006, "country": "US", "state": "New York"}]"#;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(server.uri(), "test-key");
    let location = client
        .reverse(40.7128, -74.006)
        .await
        .expect("reverse")
        .expect("candidate");

    assert_eq!(location.name, "New York");
    assert_eq!(location.country.as_deref(), Some("US"));
}

#[tokio::test]
async fn reverse_lookup_handles_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = GeocodeClient::with_base_url(server.uri(), "test-key");
    let location = client.reverse(0.0, 0.0).await.expect("reverse");
    assert!(location.is_none());
}
