//! Integration tests for `HttpPlanner` using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use waypoint_client::{FailureKind, HttpPlanner, ItineraryPlanner, PlanError};
use waypoint_core::{FormValues, TripRequest};

fn test_planner(base_url: &str) -> HttpPlanner {
    HttpPlanner::with_base_url(base_url, "/api/plan", None, "waypoint-test/0.1")
        .expect("planner construction should not fail")
}

fn paris_request() -> TripRequest {
    TripRequest::from_form(&FormValues {
        city: "Paris".to_owned(),
        days: "2".to_owned(),
        attractions_per_day: "1".to_owned(),
    })
    .expect("valid form")
}

#[tokio::test]
async fn posts_form_encoded_trip_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/plan"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("city=Paris"))
        .and(body_string_contains("days=2"))
        .and(body_string_contains("attractions_per_day=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "Paris",
            "days": 2,
            "daily_plans": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let itinerary = test_planner(&server.uri())
        .plan(&paris_request())
        .await
        .expect("should parse itinerary");

    assert_eq!(itinerary.city, "Paris");
    assert_eq!(itinerary.daily_plans.map(|p| p.len()), Some(0));
}

#[tokio::test]
async fn city_with_spaces_is_percent_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/plan"))
        .and(body_string_contains("city=New+York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "city": "New York" })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TripRequest::from_form(&FormValues {
        city: "New York".to_owned(),
        days: "1".to_owned(),
        attractions_per_day: "1".to_owned(),
    })
    .unwrap();
    test_planner(&server.uri())
        .plan(&request)
        .await
        .expect("should succeed");
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/plan"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "City not found" })),
        )
        .mount(&server)
        .await;

    let err = test_planner(&server.uri())
        .plan(&paris_request())
        .await
        .unwrap_err();

    assert!(
        matches!(err, PlanError::Application { status: 404, message: Some(ref m) } if m == "City not found"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn error_status_with_html_body_has_no_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<h1>Bad Gateway</h1>"))
        .mount(&server)
        .await;

    let err = test_planner(&server.uri())
        .plan(&paris_request())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlanError::Application {
            status: 502,
            message: None
        }
    ));
}

#[tokio::test]
async fn success_with_invalid_json_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = test_planner(&server.uri())
        .plan(&paris_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedPayload);
}

#[tokio::test]
async fn success_with_wrongly_shaped_plans_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily_plans": [{ "day_number": 1, "attractions": [{ "name": "No category" }] }]
        })))
        .mount(&server)
        .await;

    let err = test_planner(&server.uri())
        .plan(&paris_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedPayload);
}

#[tokio::test]
async fn unreachable_planner_is_transport_error() {
    // Port 1 on the unspecified address refuses connections.
    let err = test_planner("http://0.0.0.0:1")
        .plan(&paris_request())
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::Http(_)), "unexpected error: {err:?}");
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn slow_planner_times_out_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "daily_plans": [] }))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let planner = HttpPlanner::with_base_url(
        &server.uri(),
        "/api/plan",
        Some(std::time::Duration::from_millis(100)),
        "waypoint-test/0.1",
    )
    .unwrap();
    let err = planner.plan(&paris_request()).await.unwrap_err();

    assert!(matches!(err, PlanError::Http(ref e) if e.is_timeout()), "unexpected error: {err:?}");
}
