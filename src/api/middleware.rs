use crate::{api::error::ApiError, domain::models::DomainError};
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;


pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";
pub const FARMER_ID_HEADER: &str = "x-farmer-id";

/// The trusted caller identity for a request, inserted by
/// [`require_farmer`]. JWT validation happens upstream; by the time a
/// request reaches this service the gateway has already exchanged the
/// token for the principal's farmer id.
#[derive(Debug, Clone, Copy)]
pub struct FarmerContext {
    pub farmer_id: Uuid,
}

/// The correlation identifier assigned to a request, available to
/// handlers through request extensions.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

/// Attaches a correlation id to every request and echoes it on the
/// response, regardless of outcome. An inbound id is reused; otherwise
/// a fresh one is generated.
pub async fn correlation_id(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(CorrelationId(id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

/// Resolves the caller's farmer id from the identity header and makes
/// it available as a [`FarmerContext`] extension. Requests without a
/// parseable identity never reach a handler.
pub async fn require_farmer(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let farmer_id = request
        .headers()
        .get(FARMER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Uuid>().ok())
        .ok_or_else(|| {
            ApiError::from(DomainError::Unauthorized(
                "missing or invalid farmer identity".to_string(),
            ))
        })?;

    request.extensions_mut().insert(FarmerContext { farmer_id });
    Ok(next.run(request).await)
}
