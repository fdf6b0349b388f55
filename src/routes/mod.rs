pub mod estimate;
pub mod health;
pub mod sessions;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Estimates
        .route("/calculate-estimate", post(estimate::calculate_estimate))
        .route("/pricing", get(estimate::get_pricing))
        // Wizard sessions
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/:session_id",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/sessions/:session_id/reset", post(sessions::reset_session))
        .route(
            "/sessions/:session_id/postal-code",
            post(sessions::submit_postal_code),
        )
        .route(
            "/sessions/:session_id/project-type",
            put(sessions::select_project_type),
        )
        // Rooms (nested under sessions)
        .route("/sessions/:session_id/rooms", post(sessions::add_room))
        .route(
            "/sessions/:session_id/rooms/:index",
            put(sessions::replace_room).delete(sessions::remove_room),
        )
        // Exterior items (nested under sessions)
        .route(
            "/sessions/:session_id/exterior-items",
            post(sessions::add_exterior_item),
        )
        .route(
            "/sessions/:session_id/exterior-items/:index",
            put(sessions::replace_exterior_item).delete(sessions::remove_exterior_item),
        )
        .route("/sessions/:session_id/prep", put(sessions::select_prep))
        .route(
            "/sessions/:session_id/paint-quality",
            put(sessions::select_paint_quality),
        )
        .route("/sessions/:session_id/advance", post(sessions::advance))
        .route("/sessions/:session_id/back", post(sessions::back))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::app::{create_app, AppState};
    use crate::config::Settings;
    use crate::estimator::PricingConfig;
    use crate::services::Evaluator;

    fn test_app(pairs: &[(&str, &str)]) -> Router {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let settings = Settings::from_lookup(|key| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap();

        let pricing = Arc::new(PricingConfig::default());
        let state = AppState::new(settings, pricing.clone(), Evaluator::Local(pricing));
        create_app(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn bedroom_request() -> Value {
        json!({
            "rooms": [{
                "type": "Bedroom",
                "length": 10,
                "width": "10",
                "ceilingHeight": 8,
                "paintWalls": true,
            }],
            "exteriorItems": [],
            "projectType": "interior",
            "selectedPrep": "good",
            "selectedPaintQuality": "good",
        })
    }

    #[tokio::test]
    async fn test_calculate_estimate() {
        let app = test_app(&[]);
        let (status, body) =
            send(&app, Method::POST, "/calculate-estimate", Some(bedroom_request())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "low": 550, "high": 700 }));
    }

    #[tokio::test]
    async fn test_calculate_estimate_without_specs() {
        let app = test_app(&[]);
        let (status, body) = send(
            &app,
            Method::POST,
            "/calculate-estimate",
            Some(json!({
                "rooms": [],
                "exteriorItems": [],
                "projectType": "both",
                "selectedPrep": "poor",
                "selectedPaintQuality": "best",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "low": 0, "high": 0 }));
    }

    #[tokio::test]
    async fn test_unrecognized_values_fall_back_by_default() {
        let app = test_app(&[]);
        let mut request = bedroom_request();
        request["selectedPrep"] = json!("pristine");

        let (status, body) = send(&app, Method::POST, "/calculate-estimate", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "low": 550, "high": 700 }));
    }

    #[tokio::test]
    async fn test_unrecognized_values_rejected_in_strict_mode() {
        let app = test_app(&[("STRICT_ENUMS", "true")]);
        let mut request = bedroom_request();
        request["selectedPrep"] = json!("pristine");

        let (status, body) = send(&app, Method::POST, "/calculate-estimate", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("selectedPrep"));
    }

    #[tokio::test]
    async fn test_pricing_table_is_served() {
        let app = test_app(&[]);
        let (status, body) = send(&app, Method::GET, "/pricing", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["hourlyLaborCost"], json!(40.0));
        assert_eq!(body["data"]["roundingIncrement"], json!(25.0));
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(&[]);
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["evaluator_mode"], "local");
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let app = test_app(&[]);
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = test_app(&[]);
        let uri = format!("/sessions/{}", uuid::Uuid::new_v4());
        let (status, body) = send(&app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wizard_flow() {
        let app = test_app(&[("SERVICE_AREA_POSTAL_CODES", "30301"), ("ESTIMATE_DEBOUNCE_MS", "0")]);

        let (status, body) = send(&app, Method::POST, "/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["step"], "postal_gate");
        let base = format!("/sessions/{}", body["data"]["id"].as_str().unwrap());

        let (status, _) = send(&app, Method::POST, &format!("{base}/advance"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("{base}/postal-code"),
            Some(json!({ "postalCode": "90210" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("{base}/postal-code"),
            Some(json!({ "postalCode": "30301" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::POST, &format!("{base}/advance"), None).await;
        assert_eq!(body["data"]["step"], "project_type_select");

        send(
            &app,
            Method::PUT,
            &format!("{base}/project-type"),
            Some(json!({ "projectType": "interior" })),
        )
        .await;
        send(&app, Method::POST, &format!("{base}/advance"), None).await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{base}/rooms"),
            Some(json!({ "type": "Bedroom", "length": 0, "width": 10, "paintWalls": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Length and width must be greater than zero");

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{base}/rooms"),
            Some(json!({ "type": "Bedroom", "length": 10, "width": 10, "paintWalls": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["rooms"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["estimateStatus"], "not_ready");

        send(&app, Method::POST, &format!("{base}/advance"), None).await;
        send(
            &app,
            Method::PUT,
            &format!("{base}/prep"),
            Some(json!({ "selectedPrep": "good" })),
        )
        .await;
        let (_, body) = send(
            &app,
            Method::PUT,
            &format!("{base}/paint-quality"),
            Some(json!({ "selectedPaintQuality": "good" })),
        )
        .await;
        assert_eq!(body["data"]["estimateStatus"], "calculating");

        let (_, body) = send(&app, Method::POST, &format!("{base}/advance"), None).await;
        assert_eq!(body["data"]["step"], "result");

        // Recalculation runs on a spawned task
        let mut estimate = Value::Null;
        for _ in 0..50 {
            let (_, body) = send(&app, Method::GET, &base, None).await;
            if body["data"]["estimateStatus"] == "ready" {
                estimate = body["data"]["estimate"].clone();
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(estimate, json!({ "low": 550, "high": 700 }));

        let (status, _) = send(&app, Method::DELETE, &format!("{base}/rooms/3"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &base, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &base, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unknown_siding_in_session() {
        let app = test_app(&[("STRICT_ENUMS", "true")]);
        let (_, body) = send(&app, Method::POST, "/sessions", None).await;
        let base = format!("/sessions/{}", body["data"]["id"].as_str().unwrap());

        send(
            &app,
            Method::POST,
            &format!("{base}/postal-code"),
            Some(json!({ "postalCode": "30301" })),
        )
        .await;
        send(&app, Method::POST, &format!("{base}/advance"), None).await;
        send(
            &app,
            Method::PUT,
            &format!("{base}/project-type"),
            Some(json!({ "projectType": "exterior" })),
        )
        .await;
        let (_, body) = send(&app, Method::POST, &format!("{base}/advance"), None).await;
        assert_eq!(body["data"]["step"], "build_specs");

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{base}/exterior-items"),
            Some(json!({ "siding": "Adobe", "sqft": 900, "stories": "1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{base}/exterior-items"),
            Some(json!({ "siding": "Brick", "sqft": 900, "stories": "1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["exteriorItems"].as_array().unwrap().len(), 1);
    }
}
