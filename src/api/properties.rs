use crate::{
    api::{
        error::{ApiError, ErrorBody},
        middleware::FarmerContext,
    },
    domain::{
        models::{NewField, NewProperty, Property},
        ports::PropertyService,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(test)]
mod tests;

pub struct PropertiesState<T> {
    service: Arc<T>,
}

impl<T> Clone for PropertiesState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<T> PropertiesState<T>
where
    T: PropertyService,
{
    pub fn new(service: T) -> Self {
        PropertiesState {
            service: Arc::new(service),
        }
    }
}

pub fn router<T>(state: PropertiesState<T>) -> Router
where
    T: PropertyService,
{
    Router::new()
        .route(
            "/",
            get(get_properties_handler).post(create_property_handler),
        )
        .route(
            "/{property_id}",
            get(get_property_handler).post(add_field_handler),
        )
        .with_state(state)
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePropertyRequest {
    /// display name, at most 100 characters
    pub name: String,
    /// free-form location description, at most 150 characters
    pub location: String,
    /// total area in hectares, strictly positive
    pub total_area: f64,
}

impl CreatePropertyRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() || self.name.len() > 100 {
            return Err(ApiError::Validation(
                "name must be between 1 and 100 characters".to_string(),
            ));
        }
        if self.location.is_empty() || self.location.len() > 150 {
            return Err(ApiError::Validation(
                "location must be between 1 and 150 characters".to_string(),
            ));
        }
        if !(self.total_area > 0.0) {
            return Err(ApiError::Validation(
                "total_area must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFieldRequest {
    /// display name, at most 100 characters
    pub name: String,
    /// crop planted on this field, at most 100 characters
    pub crop_type: String,
    /// area in hectares, strictly positive
    pub area: f64,
}

impl CreateFieldRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() || self.name.len() > 100 {
            return Err(ApiError::Validation(
                "name must be between 1 and 100 characters".to_string(),
            ));
        }
        if self.crop_type.is_empty() || self.crop_type.len() > 100 {
            return Err(ApiError::Validation(
                "crop_type must be between 1 and 100 characters".to_string(),
            ));
        }
        if !(self.area > 0.0) {
            return Err(ApiError::Validation(
                "area must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub total_area: f64,
    pub owner_id: Uuid,
    pub fields: Vec<FieldResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldResponse {
    pub field_id: Uuid,
    pub name: String,
    pub crop_type: String,
    pub area: f64,
}

impl PropertyResponse {
    fn from_property(property: Property) -> Self {
        let Property {
            id,
            name,
            location,
            total_area,
            owner_id,
            fields,
        } = property;
        PropertyResponse {
            id,
            name,
            location,
            total_area,
            owner_id,
            fields: fields
                .into_iter()
                .map(|field| FieldResponse {
                    field_id: field.field_id,
                    name: field.name,
                    crop_type: field.crop_type,
                    area: field.area,
                })
                .collect(),
        }
    }
}

/// Lists the properties owned by the calling farmer
#[utoipa::path(
    get,
    path = "/v1/api/properties",
    tag = "properties",
    operation_id = "get_properties",
    responses(
        (status = 200, body = Vec<PropertyResponse>),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn get_properties_handler<T>(
    State(state): State<PropertiesState<T>>,
    Extension(ctx): Extension<FarmerContext>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError>
where
    T: PropertyService,
{
    let properties = state.service.list_properties(ctx.farmer_id).await?;
    Ok(Json(
        properties
            .into_iter()
            .map(PropertyResponse::from_property)
            .collect(),
    ))
}

/// Gets one property owned by the calling farmer
#[utoipa::path(
    get,
    path = "/v1/api/properties/{property_id}",
    tag = "properties",
    operation_id = "get_property",
    params(
        ("property_id" = Uuid, Path, description = "id of the property"),
    ),
    responses(
        (status = 200, body = PropertyResponse),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn get_property_handler<T>(
    State(state): State<PropertiesState<T>>,
    Extension(ctx): Extension<FarmerContext>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<PropertyResponse>, ApiError>
where
    T: PropertyService,
{
    let property = state.service.get_property(ctx.farmer_id, property_id).await?;
    Ok(Json(PropertyResponse::from_property(property)))
}

/// Creates a property for the calling farmer
#[utoipa::path(
    post,
    path = "/v1/api/properties",
    tag = "properties",
    operation_id = "create_property",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, body = PropertyResponse),
        (status = 400, body = ErrorBody),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create_property_handler<T>(
    State(state): State<PropertiesState<T>>,
    Extension(ctx): Extension<FarmerContext>,
    Json(request): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyResponse>), ApiError>
where
    T: PropertyService,
{
    request.validate()?;

    let property = state
        .service
        .create_property(
            ctx.farmer_id,
            NewProperty {
                name: request.name,
                location: request.location,
                total_area: request.total_area,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PropertyResponse::from_property(property)),
    ))
}

/// Adds a field to a property owned by the calling farmer
#[utoipa::path(
    post,
    path = "/v1/api/properties/{property_id}",
    tag = "properties",
    operation_id = "add_field_to_property",
    params(
        ("property_id" = Uuid, Path, description = "id of the property"),
    ),
    request_body = CreateFieldRequest,
    responses(
        (status = 201, body = PropertyResponse),
        (status = 400, body = ErrorBody),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn add_field_handler<T>(
    State(state): State<PropertiesState<T>>,
    Extension(ctx): Extension<FarmerContext>,
    Path(property_id): Path<Uuid>,
    Json(request): Json<CreateFieldRequest>,
) -> Result<(StatusCode, Json<PropertyResponse>), ApiError>
where
    T: PropertyService,
{
    request.validate()?;

    let property = state
        .service
        .add_field(
            ctx.farmer_id,
            property_id,
            NewField {
                name: request.name,
                crop_type: request.crop_type,
                area: request.area,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PropertyResponse::from_property(property)),
    ))
}
