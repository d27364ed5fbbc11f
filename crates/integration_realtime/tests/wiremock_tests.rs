//! Integration tests for the realtime readings client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering both response envelope shapes and the error triage paths.

use domain::Metric;
use integration_realtime::{RealtimeApi, RealtimeClient, RealtimeConfig, RealtimeError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Sample legacy-shape response for the air-temperature endpoint
fn legacy_temperature_response() -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "stations": [
                {
                    "id": "S117",
                    "device_id": "S117",
                    "name": "Banyan Road",
                    "location": {"latitude": 1.256, "longitude": 103.679}
                },
                {
                    "id": "S94",
                    "device_id": "S94",
                    "name": "Pasir Ris Street 51",
                    "location": {"latitude": 1.3662, "longitude": 103.9528}
                }
            ]
        },
        "items": [
            {
                "timestamp": "2026-08-31T14:00:00+08:00",
                "readings": [
                    {"station_id": "S117", "value": 29.4},
                    {"station_id": "S94", "value": 30.8}
                ]
            }
        ],
        "api_info": {"status": "healthy"}
    })
}

/// Sample v2-shape response for the rainfall endpoint
fn v2_rainfall_response() -> serde_json::Value {
    serde_json::json!({
        "code": 0,
        "errorMsg": "",
        "data": {
            "stations": [
                {
                    "id": "S94",
                    "name": "Pasir Ris Street 51",
                    "location": {"latitude": 1.3662, "longitude": 103.9528}
                }
            ],
            "readings": [
                {
                    "timestamp": "2026-08-31T14:05:00+08:00",
                    "data": [
                        {"stationId": "S94", "value": 2.4}
                    ]
                }
            ]
        }
    })
}

/// Create a test client pointed at the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> RealtimeClient {
    let config = RealtimeConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    RealtimeClient::new(config).expect("Failed to create client")
}

async fn mount_endpoint(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn legacy_envelope_is_normalized() {
    let mock_server = MockServer::start().await;
    mount_endpoint(
        &mock_server,
        "air-temperature",
        ResponseTemplate::new(200).set_body_json(legacy_temperature_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let readings = client
        .latest_readings(Metric::Temperature)
        .await
        .expect("readings should parse");

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].station_id.as_str(), "S117");
    assert!((readings[0].value - 29.4).abs() < f64::EPSILON);
    assert_eq!(readings[1].metric, Metric::Temperature);
}

#[tokio::test]
async fn v2_envelope_is_normalized() {
    let mock_server = MockServer::start().await;
    mount_endpoint(
        &mock_server,
        "rainfall",
        ResponseTemplate::new(200).set_body_json(v2_rainfall_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let readings = client
        .latest_readings(Metric::Rainfall)
        .await
        .expect("readings should parse");

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].station_id.as_str(), "S94");
    assert!((readings[0].value - 2.4).abs() < f64::EPSILON);
}

#[tokio::test]
async fn each_metric_hits_its_own_endpoint() {
    let mock_server = MockServer::start().await;
    mount_endpoint(
        &mock_server,
        "relative-humidity",
        ResponseTemplate::new(200).set_body_json(legacy_temperature_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    // Only relative-humidity is mounted; wind-speed must 404.
    assert!(client.latest_readings(Metric::Humidity).await.is_ok());
    assert!(matches!(
        client.latest_readings(Metric::WindSpeed).await,
        Err(RealtimeError::RequestFailed(_))
    ));
}

#[tokio::test]
async fn server_error_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;
    mount_endpoint(&mock_server, "air-temperature", ResponseTemplate::new(500)).await;

    let client = create_test_client(&mock_server);
    let err = client
        .latest_readings(Metric::Temperature)
        .await
        .expect_err("500 should fail");

    assert!(matches!(err, RealtimeError::ServiceUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn rate_limit_maps_to_dedicated_error() {
    let mock_server = MockServer::start().await;
    mount_endpoint(&mock_server, "wind-speed", ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let err = client
        .latest_readings(Metric::WindSpeed)
        .await
        .expect_err("429 should fail");

    assert!(matches!(err, RealtimeError::RateLimitExceeded));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn invalid_json_maps_to_parse_error() {
    let mock_server = MockServer::start().await;
    mount_endpoint(
        &mock_server,
        "rainfall",
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client
        .latest_readings(Metric::Rainfall)
        .await
        .expect_err("garbage body should fail");

    assert!(matches!(err, RealtimeError::ParseError(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn empty_items_yield_empty_reading_set() {
    let mock_server = MockServer::start().await;
    mount_endpoint(
        &mock_server,
        "rainfall",
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"metadata": {"stations": []}, "items": []})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let readings = client
        .latest_readings(Metric::Rainfall)
        .await
        .expect("empty body should still parse");

    assert!(readings.is_empty());
}

#[tokio::test]
async fn health_check_reflects_endpoint_status() {
    let mock_server = MockServer::start().await;
    mount_endpoint(
        &mock_server,
        "air-temperature",
        ResponseTemplate::new(200).set_body_json(legacy_temperature_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);

    let down_server = MockServer::start().await;
    mount_endpoint(&down_server, "air-temperature", ResponseTemplate::new(503)).await;
    let down_client = create_test_client(&down_server);
    assert!(!down_client.is_healthy().await);
}
