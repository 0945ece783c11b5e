use crate::domain::ports::{PropertyService, SensorService};
use axum::{Router, middleware::from_fn};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error;
pub mod health;
pub mod middleware;
pub mod properties;
pub mod sensors;
pub mod swagger;

pub fn router<P, S>(
    properties_state: properties::PropertiesState<P>,
    sensors_state: sensors::SensorsState<S>,
) -> Router
where
    P: PropertyService,
    S: SensorService,
{
    Router::new()
        .nest("/v1/api/properties", properties::router(properties_state))
        .nest("/v1/api/sensors", sensors::router(sensors_state))
        .layer(from_fn(middleware::require_farmer))
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
        .layer(from_fn(middleware::correlation_id))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve<P, S>(
    port: u16,
    properties_state: properties::PropertiesState<P>,
    sensors_state: sensors::SensorsState<S>,
) -> anyhow::Result<()>
where
    P: PropertyService,
    S: SensorService,
{
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening for http requests");
    axum::serve(listener, router(properties_state, sensors_state)).await?;
    Ok(())
}
