use super::*;
use crate::domain::models::DomainError;
use axum::{body::Body, http::Request};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

struct StubSensors {
    known_sensor: Uuid,
}

impl SensorService for StubSensors {
    async fn list_sensors(&self, farmer_id: Uuid) -> Result<Vec<Sensor>, DomainError> {
        Ok(vec![Sensor {
            id: self.known_sensor,
            serial: "SENSOR001".to_string(),
            sensor_type: SensorType::Temperature,
            owner_id: farmer_id,
            field_id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
        }])
    }

    async fn delete_sensor(&self, _farmer_id: Uuid, sensor_id: Uuid) -> Result<(), DomainError> {
        if sensor_id == self.known_sensor {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!(
                "sensor {sensor_id} not found"
            )))
        }
    }
}

fn stub_router(farmer_id: Uuid, known_sensor: Uuid) -> Router {
    router(SensorsState::new(StubSensors { known_sensor }))
        .layer(Extension(FarmerContext { farmer_id }))
}

#[tokio::test]
async fn lists_sensors_for_the_caller() {
    let farmer_id = Uuid::new_v4();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = stub_router(farmer_id, Uuid::new_v4())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(bytes.as_ref()).unwrap();
    assert_eq!(body[0]["serial"], "SENSOR001");
    assert_eq!(body[0]["sensor_type"], "temperature");
    assert_eq!(body[0]["owner_id"], farmer_id.to_string());
}

#[tokio::test]
async fn deletes_a_sensor_by_id() {
    let sensor_id = Uuid::new_v4();
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{sensor_id}"))
        .body(Body::empty())
        .unwrap();

    let response = stub_router(Uuid::new_v4(), sensor_id)
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleting_an_unknown_sensor_is_not_found() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = stub_router(Uuid::new_v4(), Uuid::new_v4())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(bytes.as_ref()).unwrap();
    assert_eq!(body["error"], "Not Found");
}
