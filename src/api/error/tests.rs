use super::*;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(bytes.as_ref()).unwrap()
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let response =
        ApiError::from(DomainError::NotFound("property not found".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Not Found", "message": "property not found" })
    );
}

#[tokio::test]
async fn conflict_maps_to_409() {
    let response =
        ApiError::from(DomainError::Conflict("serial already registered".to_string()))
            .into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Conflict", "message": "serial already registered" })
    );
}

#[tokio::test]
async fn unauthorized_maps_to_401() {
    let response =
        ApiError::from(DomainError::Unauthorized("invalid caller identity".to_string()))
            .into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Unauthorized", "message": "invalid caller identity" })
    );
}

#[tokio::test]
async fn persistence_failure_keeps_conflict_category_with_server_status() {
    let response = ApiError::from(DomainError::Persistence(anyhow::anyhow!("write timeout")))
        .into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Conflict");
    assert_eq!(
        body["message"],
        "failed to persist changes to the store: write timeout"
    );
}

#[tokio::test]
async fn unexpected_surfaces_its_own_message_text() {
    let response =
        ApiError::from(DomainError::Unexpected(anyhow::anyhow!("connection refused")))
            .into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Internal Server Error", "message": "connection refused" })
    );
}

#[tokio::test]
async fn validation_rejection_maps_to_400() {
    let response =
        ApiError::Validation("total_area must be greater than zero".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Bad Request", "message": "total_area must be greater than zero" })
    );
}
