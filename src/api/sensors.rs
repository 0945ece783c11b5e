use crate::{
    api::{
        error::{ApiError, ErrorBody},
        middleware::FarmerContext,
    },
    domain::{
        models::{Sensor, SensorType},
        ports::SensorService,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(test)]
mod tests;

pub struct SensorsState<T> {
    service: Arc<T>,
}

impl<T> Clone for SensorsState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<T> SensorsState<T>
where
    T: SensorService,
{
    pub fn new(service: T) -> Self {
        SensorsState {
            service: Arc::new(service),
        }
    }
}

pub fn router<T>(state: SensorsState<T>) -> Router
where
    T: SensorService,
{
    Router::new()
        .route("/", get(get_sensors_handler))
        .route("/{sensor_id}", delete(delete_sensor_handler))
        .with_state(state)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SensorResponse {
    pub id: Uuid,
    pub serial: String,
    pub sensor_type: SensorType,
    pub owner_id: Uuid,
    pub field_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl SensorResponse {
    fn from_sensor(sensor: Sensor) -> Self {
        let Sensor {
            id,
            serial,
            sensor_type,
            owner_id,
            field_id,
            created_at,
        } = sensor;
        SensorResponse {
            id,
            serial,
            sensor_type,
            owner_id,
            field_id,
            created_at,
        }
    }
}

/// Lists the sensors owned by the calling farmer
#[utoipa::path(
    get,
    path = "/v1/api/sensors",
    tag = "sensors",
    operation_id = "get_sensors",
    responses(
        (status = 200, body = Vec<SensorResponse>),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn get_sensors_handler<T>(
    State(state): State<SensorsState<T>>,
    Extension(ctx): Extension<FarmerContext>,
) -> Result<Json<Vec<SensorResponse>>, ApiError>
where
    T: SensorService,
{
    let sensors = state.service.list_sensors(ctx.farmer_id).await?;
    Ok(Json(
        sensors.into_iter().map(SensorResponse::from_sensor).collect(),
    ))
}

/// Deletes a sensor by id
#[utoipa::path(
    delete,
    path = "/v1/api/sensors/{sensor_id}",
    tag = "sensors",
    operation_id = "delete_sensor",
    params(
        ("sensor_id" = Uuid, Path, description = "id of the sensor"),
    ),
    responses(
        (status = 204),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn delete_sensor_handler<T>(
    State(state): State<SensorsState<T>>,
    Extension(ctx): Extension<FarmerContext>,
    Path(sensor_id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    T: SensorService,
{
    state.service.delete_sensor(ctx.farmer_id, sensor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
