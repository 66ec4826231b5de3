use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app
        .oneshot(
            axum::http::Request::get("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "car-marketplace");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app().await;
    let response = app
        .oneshot(
            axum::http::Request::get("/api/unknown")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submission_shape() {
    // forma esperada de una submission derivada (status pendiente + fecha sintética)
    let submission = json!({
        "id": 42,
        "brand_id": 3,
        "brand_label": "Honda",
        "model": "Civic",
        "year": 2022,
        "price": "18000",
        "color": "Red",
        "status_label": "pending",
        "submitted_at": "2026-08-06"
    });

    assert_eq!(submission["status_label"], "pending");
    assert!(submission.get("status").is_none());
}

// Función helper para crear la app de test
async fn create_test_app() -> axum::Router {
    axum::Router::new().route(
        "/health",
        axum::routing::get(|| async {
            axum::Json(json!({
                "service": "car-marketplace",
                "status": "healthy",
            }))
        }),
    )
}
