use super::*;
use crate::domain::models::{DomainError, Field};
use axum::{body::Body, http::Request};
use http_body_util::BodyExt;
use serde_json::json;
use tower::util::ServiceExt;

struct StubProperties;

impl PropertyService for StubProperties {
    async fn list_properties(&self, farmer_id: Uuid) -> Result<Vec<Property>, DomainError> {
        Ok(vec![Property {
            id: Uuid::new_v4(),
            name: "Green Valley".to_string(),
            location: "Route 9".to_string(),
            total_area: 120.5,
            owner_id: farmer_id,
            fields: Vec::new(),
        }])
    }

    async fn get_property(
        &self,
        _farmer_id: Uuid,
        _property_id: Uuid,
    ) -> Result<Property, DomainError> {
        Err(DomainError::NotFound("property not found".to_string()))
    }

    async fn create_property(
        &self,
        farmer_id: Uuid,
        request: NewProperty,
    ) -> Result<Property, DomainError> {
        Ok(Property {
            id: Uuid::new_v4(),
            name: request.name,
            location: request.location,
            total_area: request.total_area,
            owner_id: farmer_id,
            fields: Vec::new(),
        })
    }

    async fn add_field(
        &self,
        farmer_id: Uuid,
        property_id: Uuid,
        request: NewField,
    ) -> Result<Property, DomainError> {
        Ok(Property {
            id: property_id,
            name: "Green Valley".to_string(),
            location: "Route 9".to_string(),
            total_area: 120.5,
            owner_id: farmer_id,
            fields: vec![Field {
                field_id: Uuid::new_v4(),
                name: request.name,
                crop_type: request.crop_type,
                area: request.area,
            }],
        })
    }
}

fn stub_router(farmer_id: Uuid) -> Router {
    router(PropertiesState::new(StubProperties)).layer(Extension(FarmerContext { farmer_id }))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(bytes.as_ref()).unwrap()
}

#[tokio::test]
async fn lists_properties_for_the_caller() {
    let farmer_id = Uuid::new_v4();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = stub_router(farmer_id).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["owner_id"], farmer_id.to_string());
    assert_eq!(body[0]["fields"], json!([]));
}

#[tokio::test]
async fn missing_property_is_not_found() {
    let request = Request::builder()
        .uri(format!("/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = stub_router(Uuid::new_v4()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "property not found");
}

#[tokio::test]
async fn creates_a_property_for_the_caller() {
    let farmer_id = Uuid::new_v4();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": "Green Valley", "location": "Route 9", "total_area": 120.5 })
                .to_string(),
        ))
        .unwrap();

    let response = stub_router(farmer_id).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["owner_id"], farmer_id.to_string());
    assert_eq!(body["fields"], json!([]));
    assert_eq!(body["total_area"], 120.5);
}

#[tokio::test]
async fn rejects_a_non_positive_total_area() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": "Green Valley", "location": "Route 9", "total_area": 0.0 })
                .to_string(),
        ))
        .unwrap();

    let response = stub_router(Uuid::new_v4()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn adds_a_field_to_a_property() {
    let property_id = Uuid::new_v4();
    let request = Request::builder()
        .method("POST")
        .uri(format!("/{property_id}"))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": "North Lot", "crop_type": "Corn", "area": 12.0 }).to_string(),
        ))
        .unwrap();

    let response = stub_router(Uuid::new_v4()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], property_id.to_string());
    assert_eq!(body["fields"][0]["name"], "North Lot");
    assert_eq!(body["fields"][0]["area"], 12.0);
}

#[tokio::test]
async fn rejects_a_field_with_an_empty_crop_type() {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}", Uuid::new_v4()))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": "North Lot", "crop_type": "", "area": 12.0 }).to_string(),
        ))
        .unwrap();

    let response = stub_router(Uuid::new_v4()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
