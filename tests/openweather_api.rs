mod common;

use common::{current_weather_json, forecast_json, stockholm};
use skycast::{
    data::{FetchError, openweather::WeatherClient},
    domain::weather::Units,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mock_current(server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_raw(current_weather_json(), "application/json")
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mock_forecast(server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_raw(forecast_json(), "application/json")
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn current_conditions_decode_into_sample() {
    let server = MockServer::start().await;
    mock_current(&server, 200).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let sample = client
        .fetch_current(59.3293, 18.0686, Units::Metric)
        .await
        .expect("current conditions");

    assert_eq!(sample.condition_code, 500);
    assert_eq!(sample.condition_description, "light rain");
    assert!((sample.temperature - 17.3).abs() < 1e-9);
    assert_eq!(sample.humidity, 62);
    assert_eq!(sample.pressure, 1013);
    assert_eq!(sample.visibility_m, Some(10_000));
    assert!(sample.sunrise < sample.sunset);
}

#[tokio::test]
async fn unit_system_is_forwarded_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(current_weather_json(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    client
        .fetch_current(59.3293, 18.0686, Units::Imperial)
        .await
        .expect("current conditions");
}

#[tokio::test]
async fn non_success_status_is_a_typed_error() {
    let server = MockServer::start().await;
    mock_current(&server, 503).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let err = client
        .fetch_current(59.3293, 18.0686, Units::Metric)
        .await
        .expect_err("should fail");

    match err {
        FetchError::Status { status } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn snapshot_fetch_joins_both_endpoints() {
    let server = MockServer::start().await;
    mock_current(&server, 200).await;
    mock_forecast(&server, 200).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let snapshot = client
        .fetch_snapshot(stockholm(), Units::Metric)
        .await
        .expect("snapshot");

    assert_eq!(snapshot.forecast.len(), 16);
    assert_eq!(snapshot.daily.len(), 2);
    assert!(snapshot.daily[0].date < snapshot.daily[1].date);
    assert!((snapshot.daily[0].temp_min - 10.0).abs() < 1e-9);
    assert!((snapshot.daily[0].temp_max - 18.0).abs() < 1e-9);
    assert_eq!(snapshot.daily[0].condition_code, 500);
    assert_eq!(snapshot.daily[1].condition_code, 800);
}

#[tokio::test]
async fn forecast_failure_fails_the_whole_snapshot() {
    let server = MockServer::start().await;
    mock_current(&server, 200).await;
    mock_forecast(&server, 500).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let result = client.fetch_snapshot(stockholm(), Units::Metric).await;

    assert!(result.is_err(), "partial success must not produce a snapshot");
}

#[tokio::test]
async fn garbage_payload_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let err = client
        .fetch_current(59.3293, 18.0686, Units::Metric)
        .await
        .expect_err("should fail");

    assert!(matches!(err, FetchError::Decode(_)));
}
