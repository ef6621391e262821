//! HTTP API integration tests
//!
//! Drives the full router with a seeded simulator, an in-memory farm store
//! and an advisory service without a weather client.

use std::sync::Arc;

use agri_monitor_backend::config::{
    Config, ServerConfig, SimulatorConfig, StorageConfig, WeatherConfig,
};
use agri_monitor_backend::services::{
    AdvisoryService, FarmService, FieldSimulator, FixedClock, MemoryStore, SimulatorService,
    WeatherService,
};
use agri_monitor_backend::{create_app, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        weather: WeatherConfig {
            api_endpoint: "http://localhost".to_string(),
            api_key: String::new(),
            timeout_seconds: 1,
        },
        storage: StorageConfig {
            data_path: "unused.json".to_string(),
        },
        simulator: SimulatorConfig { seed: Some(42) },
    }
}

fn test_app() -> Router {
    let weather = WeatherService::new(StdRng::seed_from_u64(2));
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap());
    let state = AppState {
        config: Arc::new(test_config()),
        simulator: SimulatorService::new(FieldSimulator::new(StdRng::seed_from_u64(1))),
        farms: FarmService::new(
            Arc::new(MemoryStore::new()),
            weather.clone(),
            Arc::new(clock),
            StdRng::seed_from_u64(3),
        ),
        weather,
        advisory: AdvisoryService::offline(),
    };
    create_app(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn create_farm(app: &Router, crop_type: &str) -> u64 {
    let (status, body) = post_json(
        app,
        "/api/v1/farms",
        json!({
            "farm_size": 4.5,
            "crop_type": crop_type,
            "irrigation_method": "drip",
            "location": "Coimbatore"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["farm_id"].as_u64().unwrap()
}

// ============================================================================
// Service endpoints
// ============================================================================

mod service {
    use super::*;

    #[tokio::test]
    async fn root_banner() {
        let app = test_app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Agricultural Monitoring Platform API v1.0");
    }

    #[tokio::test]
    async fn api_health_reports_catalog_and_store() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["fields"], 4);
        assert_eq!(body["store"], "available");
    }
}

// ============================================================================
// Fields and sensors
// ============================================================================

mod fields {
    use super::*;

    #[tokio::test]
    async fn list_default_fields() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/fields").await;
        assert_eq!(status, StatusCode::OK);
        let fields = body.as_array().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0]["id"], 1);
    }

    #[tokio::test]
    async fn unknown_field_is_not_found() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/fields/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["message_ta"].is_string());
    }

    #[tokio::test]
    async fn poll_all_sensors_keyed_by_field() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/sensors").await;
        assert_eq!(status, StatusCode::OK);
        let readings = body.as_object().unwrap();
        assert_eq!(readings.len(), 4);
        for reading in readings.values() {
            let moisture = reading["moisture"].as_f64().unwrap();
            assert!((10.0..=80.0).contains(&moisture));
        }
    }

    #[tokio::test]
    async fn poll_unknown_field_is_empty_object() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/sensors/99").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn poll_malformed_field_id_is_empty_object() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/sensors/north").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        let (status, body) = get_json(&app, "/api/v1/sensors/-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn poll_one_field() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/sensors/3").await;
        assert_eq!(status, StatusCode::OK);
        let readings = body.as_object().unwrap();
        assert_eq!(readings.len(), 1);
        assert!(readings.contains_key("3"));
    }

    #[tokio::test]
    async fn recommendation_for_known_field() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/recommendations/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["field_id"], 2);
        let urgency = body["urgency"].as_str().unwrap();
        assert!(["high", "medium", "low"].contains(&urgency));
    }

    #[tokio::test]
    async fn recommendation_for_unknown_field() {
        let app = test_app();
        let (status, _) = get_json(&app, "/api/v1/recommendations/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn schedules_one_per_field() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/schedules").await;
        assert_eq!(status, StatusCode::OK);
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        for entry in entries {
            assert!(entry["schedule"].as_str().unwrap().starts_with("Every "));
        }
    }

    #[tokio::test]
    async fn simulated_alert_names_a_field() {
        let app = test_app();
        let (status, body) = get_json(&app, "/api/v1/alerts/simulate").await;
        assert_eq!(status, StatusCode::OK);
        let field_name = body["field_name"].as_str().unwrap();
        assert!(body["message"].as_str().unwrap().ends_with(field_name));
    }
}

// ============================================================================
// Moisture advisory
// ============================================================================

mod advisory {
    use super::*;

    #[tokio::test]
    async fn estimate_from_supplied_values() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/advisory/estimate",
            json!({ "location": "chennai", "humidity": 80.0, "rainfall_mm": 2.0 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["estimate"]["moisture"], 56);
        assert_eq!(body["estimate"]["irrigate"], false);
        assert_eq!(
            body["message"],
            "Chennai - Moisture: 56%, Rainfall: 2.0mm → ❌ No Irrigation Needed"
        );
    }

    #[tokio::test]
    async fn estimate_in_tamil() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/advisory/estimate",
            json!({ "location": "madurai", "language": "Tamil", "humidity": 60.0, "rainfall_mm": 1.0 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "Tamil");
        assert_eq!(
            body["message"],
            "Madurai - நிலத்தின் ஈரப்பதம்: 40%, மழை: 1.0mm → ✅ நீரூற்றி இப்போது"
        );
    }

    #[tokio::test]
    async fn unrecognized_language_falls_back_to_english() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/advisory/estimate",
            json!({ "location": "chennai", "language": "Hindi", "humidity": 80.0, "rainfall_mm": 2.0 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "English");
        assert_eq!(
            body["message"],
            "Chennai - Moisture: 56%, Rainfall: 2.0mm → ❌ No Irrigation Needed"
        );
    }

    #[tokio::test]
    async fn language_is_case_insensitive() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/advisory/estimate",
            json!({ "location": "chennai", "language": "TAMIL", "humidity": 80.0, "rainfall_mm": 2.0 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "Tamil");
        assert_eq!(body["estimate"]["moisture"], 56);
    }

    #[tokio::test]
    async fn estimate_rejects_humidity_out_of_range() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/advisory/estimate",
            json!({ "location": "chennai", "humidity": 140.0, "rainfall_mm": 0.0 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "humidity");
    }

    #[tokio::test]
    async fn live_advisory_without_weather_reports_fetch_error() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/advisory",
            json!({ "location": "salem", "language": "English" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["estimate"].is_null());
        assert_eq!(
            body["message"],
            "Error fetching weather for Salem. Please check the city name or try again later."
        );
    }

    #[tokio::test]
    async fn live_advisory_requires_location() {
        let app = test_app();
        let (status, body) = post_json(&app, "/api/v1/advisory", json!({ "location": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "location");
    }
}

// ============================================================================
// Farms
// ============================================================================

mod farms {
    use super::*;

    #[tokio::test]
    async fn setup_assigns_sequential_ids() {
        let app = test_app();
        let first = create_farm(&app, "rice").await;
        let second = create_farm(&app, "sugarcane").await;
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn sugarcane_gets_higher_threshold() {
        let app = test_app();
        let cane = create_farm(&app, "Sugarcane").await;
        let rice = create_farm(&app, "rice").await;

        let (_, cane_farm) = get_json(&app, &format!("/api/v1/farms/{}", cane)).await;
        let (_, rice_farm) = get_json(&app, &format!("/api/v1/farms/{}", rice)).await;
        assert_eq!(cane_farm["moisture_threshold"], 40);
        assert_eq!(rice_farm["moisture_threshold"], 35);
    }

    #[tokio::test]
    async fn setup_rejects_non_positive_size() {
        let app = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/farms",
            json!({
                "farm_size": 0.0,
                "crop_type": "rice",
                "irrigation_method": "drip",
                "location": "Erode"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "farm_size");
    }

    #[tokio::test]
    async fn dashboard_combines_reading_weather_and_recommendation() {
        let app = test_app();
        let farm_id = create_farm(&app, "cotton").await;
        let (status, body) = get_json(&app, &format!("/api/v1/farms/{}/dashboard", farm_id)).await;
        assert_eq!(status, StatusCode::OK);

        let moisture = body["sensor_data"]["moisture"].as_f64().unwrap();
        assert!((30.0..=60.0).contains(&moisture));
        assert_eq!(
            body["recommendation"]["needs_irrigation"].as_bool().unwrap(),
            moisture < 35.0
        );
        assert_eq!(body["weather"]["rain_prediction"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn dashboard_for_missing_farm() {
        let app = test_app();
        let (status, _) = get_json(&app, "/api/v1/farms/77/dashboard").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn historical_has_ten_days_ending_today() {
        let app = test_app();
        let farm_id = create_farm(&app, "rice").await;
        let (status, body) = get_json(&app, &format!("/api/v1/farms/{}/historical", farm_id)).await;
        assert_eq!(status, StatusCode::OK);

        let days = body.as_array().unwrap();
        assert_eq!(days.len(), 10);
        assert_eq!(days[9]["date"], "2024-03-15");
    }

    #[tokio::test]
    async fn historical_as_csv() {
        let app = test_app();
        let farm_id = create_farm(&app, "rice").await;
        let request = Request::builder()
            .uri(format!("/api/v1/farms/{}/historical?format=csv", farm_id))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,temperature,humidity,rainfall,moisture")
        );
        assert_eq!(lines.count(), 10);
    }

    #[tokio::test]
    async fn notifications_mention_crop() {
        let app = test_app();
        let farm_id = create_farm(&app, "groundnut").await;
        let (status, body) =
            get_json(&app, &format!("/api/v1/farms/{}/notifications", farm_id)).await;
        assert_eq!(status, StatusCode::OK);

        let notifications = body.as_array().unwrap();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0]["type"], "rain_alert");
        assert!(notifications[1]["message"]
            .as_str()
            .unwrap()
            .contains("groundnut"));
    }
}
