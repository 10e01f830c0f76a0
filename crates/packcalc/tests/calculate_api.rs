//! End-to-end tests driving the real router in-process.
//!
//! No network or external services needed; requests go through
//! `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use packcalc::config::{ServerConfig, TerrainOverrides};
use packcalc::create_router;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_router(&ServerConfig::default())
}

fn app_with_reference_curves() -> Router {
    create_router(&ServerConfig {
        terrain: TerrainOverrides {
            reference_curves: true,
            ..TerrainOverrides::default()
        },
        ..ServerConfig::default()
    })
}

async fn post_calculate(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn reference_hike() -> Value {
    json!({
        "weight": 70.0,
        "isWeightKg": true,
        "pack_weight": 10.0,
        "isPackWeightKg": true,
        "speed": 1.2,
        "isSpeedMps": true,
        "incline_grade": 0.0,
        "terrain_type": "Paved Road",
        "hours": 2.0
    })
}

#[tokio::test]
async fn calculate_matches_hand_evaluated_pandolf_rate() {
    let (status, body) = post_calculate(app(), reference_hike()).await;
    assert_eq!(status, StatusCode::OK);

    // M = 1.5·70 + 2.0·80·(10/70)² + 80·1.5·1.2² ≈ 281.07 W ≈ 241.8 kcal/h
    let expected_watts =
        1.5 * 70.0 + 2.0 * 80.0 * (10.0f64 / 70.0).powi(2) + 80.0 * 1.5 * 1.2 * 1.2;
    let expected = expected_watts * 3600.0 / 4184.0;
    let rate = body["calories_per_hour"].as_f64().expect("rate");
    assert!((rate - expected).abs() < 1e-9, "got {rate}, want {expected}");
}

#[tokio::test]
async fn calculate_accepts_imperial_units() {
    let (_, metric) = post_calculate(app(), reference_hike()).await;

    let mut imperial = reference_hike();
    imperial["weight"] = json!(70.0 / 0.45359237);
    imperial["isWeightKg"] = json!(false);
    imperial["speed"] = json!(1.2 / 0.44704);
    imperial["isSpeedMps"] = json!(false);
    let (status, body) = post_calculate(app(), imperial).await;

    assert_eq!(status, StatusCode::OK);
    let a = metric["calories_per_hour"].as_f64().unwrap();
    let b = body["calories_per_hour"].as_f64().unwrap();
    assert!((a - b).abs() < 1e-6, "metric {a} vs imperial {b}");
}

#[tokio::test]
async fn calculate_defaults_unit_flags_to_metric() {
    let mut body = reference_hike();
    body.as_object_mut().unwrap().remove("isWeightKg");
    body.as_object_mut().unwrap().remove("isPackWeightKg");
    body.as_object_mut().unwrap().remove("isSpeedMps");
    let (status, with_defaults) = post_calculate(app(), body).await;
    assert_eq!(status, StatusCode::OK);

    let (_, explicit) = post_calculate(app(), reference_hike()).await;
    assert_eq!(
        with_defaults["calories_per_hour"],
        explicit["calories_per_hour"]
    );
}

#[tokio::test]
async fn calculate_rejects_missing_field() {
    let mut body = reference_hike();
    body.as_object_mut().unwrap().remove("weight");
    let (status, body) = post_calculate(app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("weight"), "{message}");
}

#[tokio::test]
async fn calculate_rejects_non_positive_speed() {
    let mut body = reference_hike();
    body["speed"] = json!(0.0);
    let (status, body) = post_calculate(app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("speed"));
}

#[tokio::test]
async fn calculate_rejects_unknown_terrain() {
    let mut body = reference_hike();
    body["terrain_type"] = json!("Moon Dust");
    let (status, body) = post_calculate(app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Moon Dust"));
}

#[tokio::test]
async fn vegetation_fails_without_configured_curve() {
    let mut body = reference_hike();
    body["terrain_type"] = json!("Vegetation");
    let (status, body) = post_calculate(app(), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Vegetation"));
}

#[tokio::test]
async fn vegetation_succeeds_with_reference_curves() {
    let mut body = reference_hike();
    body["terrain_type"] = json!("Vegetation");
    let (status, body) = post_calculate(app_with_reference_curves(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["calories_per_hour"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn terrain_listing_reports_availability() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/terrain")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let options: Value = serde_json::from_slice(&bytes).unwrap();
    let options = options.as_array().expect("array");
    assert_eq!(options.len(), 7);

    for option in options {
        let name = option["name"].as_str().unwrap();
        let available = option["available"].as_bool().unwrap();
        match name {
            "Vegetation" | "Sand" => assert!(!available, "{name} should be unavailable"),
            _ => assert!(available, "{name} should be available"),
        }
    }
}

#[tokio::test]
async fn health_check_responds_with_request_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn client_supplied_request_id_is_echoed() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-me-123"
    );
}
