use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_router() -> Router {
    let options = LeptosOptions::builder().output_name("inkpost").build();
    router(options, ApiConfig::new("https://cms.example.com"))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let response = test_router()
        .oneshot(Request::builder().uri("/pkg/does-not-exist.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
