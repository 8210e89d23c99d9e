//! Integration tests for the soil profile API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. The soil-health service is played by a small
//! Axum app bound to an ephemeral local port.

#![allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use agrisense_api::{AppState, build_router};
use agrisense_core::{Calendar, SoilHealthClient, SoilProfileEngine};
use agrisense_soil::synthesize_profile;
use agrisense_weather::{OpenMeteoClient, WeatherProvider};
use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::post;
use serde_json::Value;
use tower::ServiceExt;

const MONTH: u32 = 6;

fn offline_engine() -> SoilProfileEngine {
    SoilProfileEngine::new(
        WeatherProvider::Disabled,
        Duration::from_millis(100),
        Calendar::Fixed(MONTH),
    )
}

fn test_router(soil_health: Option<SoilHealthClient>) -> Router {
    build_router(Arc::new(AppState::new(offline_engine(), soil_health)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

/// Start a stand-in soil-health service and return its base URL.
async fn spawn_soil_health(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Service that echoes back what it received inside a success envelope.
fn echo_service() -> Router {
    Router::new().route(
        "/api/predict/soil-health",
        post(|Json(profile): Json<Value>| async move {
            Json(serde_json::json!({
                "status": "success",
                "data": {
                    "soil_health_score": 71.3,
                    "received": profile,
                }
            }))
        }),
    )
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index() {
    let response = test_router(None)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_soil_profile() {
    let response = test_router(None)
        .oneshot(
            Request::get("/api/soil-profile?lat=28.7041&lng=77.1025")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["weather_source"], "estimated");

    let expected =
        serde_json::to_value(synthesize_profile(28.7041, 77.1025, None, MONTH).unwrap()).unwrap();
    assert_eq!(json["data"], expected);
}

#[tokio::test]
async fn test_soil_profile_wire_format() {
    let response = test_router(None)
        .oneshot(
            Request::get("/api/soil-profile?lat=-1.2921&lng=36.8219")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    let data = json["data"].as_object().unwrap();
    for key in [
        "temperature",
        "humidity",
        "moisture",
        "soil_type",
        "nitrogen",
        "phosphorous",
        "potassium",
        "ph",
        "ec",
        "organic_carbon",
        "pathogen_presence",
        "salinity_class",
        "latitude",
        "longitude",
    ] {
        assert!(data.contains_key(key), "missing {key}");
    }
    assert_eq!(data.len(), 14);
    let pathogen = data["pathogen_presence"].as_u64().unwrap();
    assert!(pathogen <= 1);
    assert_eq!(data["latitude"], -1.2921);
}

#[tokio::test]
async fn test_soil_profile_out_of_range() {
    let response = test_router(None)
        .oneshot(
            Request::get("/api/soil-profile?lat=91&lng=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("invalid coordinate"));
}

#[tokio::test]
async fn test_soil_profile_missing_param() {
    let response = test_router(None)
        .oneshot(
            Request::get("/api/soil-profile?lat=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_soil_profile_non_numeric() {
    let response = test_router(None)
        .oneshot(
            Request::get("/api/soil-profile?lat=north&lng=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_soil_health_unconfigured() {
    let response = test_router(None)
        .oneshot(post_json(
            "/api/soil-health",
            r#"{"latitude":12.97,"longitude":77.59}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_soil_health_bad_body() {
    let response = test_router(None)
        .oneshot(post_json("/api/soil-health", r#"{"latitude":"x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_soil_health_forwards_profile() {
    let base_url = spawn_soil_health(echo_service()).await;
    let client = SoilHealthClient::new(base_url, Duration::from_secs(5)).unwrap();

    let response = test_router(Some(client))
        .oneshot(post_json(
            "/api/soil-health",
            r#"{"latitude":12.97,"longitude":77.59}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["analysis"]["soil_health_score"], 71.3);

    let profile = &json["data"]["soil_profile"];
    assert_eq!(json["data"]["analysis"]["received"], *profile);
    assert_eq!(profile["latitude"], 12.97);
}

#[tokio::test]
async fn test_soil_health_downstream_rejects() {
    let app = Router::new().route(
        "/api/predict/soil-health",
        post(|| async {
            Json(serde_json::json!({"status": "error", "message": "model not loaded"}))
        }),
    );
    let base_url = spawn_soil_health(app).await;
    let client = SoilHealthClient::new(base_url, Duration::from_secs(5)).unwrap();

    let response = test_router(Some(client))
        .oneshot(post_json(
            "/api/soil-health",
            r#"{"latitude":0.0,"longitude":0.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("model not loaded"));
}

#[tokio::test]
async fn test_soil_health_downstream_500() {
    let app = Router::new().route(
        "/api/predict/soil-health",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_soil_health(app).await;
    let client = SoilHealthClient::new(base_url, Duration::from_secs(5)).unwrap();

    let response = test_router(Some(client))
        .oneshot(post_json(
            "/api/soil-health",
            r#"{"latitude":45.0,"longitude":-120.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_soil_health_invalid_coordinate_before_forwarding() {
    let response = test_router(None)
        .oneshot(post_json(
            "/api/soil-health",
            r#"{"latitude":0.0,"longitude":200.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_soil_health_unconfigured_skips_weather_fetch() {
    // A weather endpoint that accepts and never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            let (socket, _) = listener.accept().await.unwrap();
            held.push(socket);
        }
    });
    let client =
        OpenMeteoClient::new(format!("http://{addr}/v1/forecast"), Duration::from_secs(30)).unwrap();
    let engine = SoilProfileEngine::new(
        WeatherProvider::OpenMeteo(client),
        Duration::from_secs(30),
        Calendar::Fixed(MONTH),
    );
    let router = build_router(Arc::new(AppState::new(engine, None)));

    let response = tokio::time::timeout(
        Duration::from_secs(2),
        router.oneshot(post_json(
            "/api/soil-health",
            r#"{"latitude":12.97,"longitude":77.59}"#,
        )),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
