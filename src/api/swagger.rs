use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Farm Management API",
        description = "Farmer-scoped management of properties, fields and sensors"
    ),
    paths(
        crate::api::properties::get_properties_handler,
        crate::api::properties::get_property_handler,
        crate::api::properties::create_property_handler,
        crate::api::properties::add_field_handler,
        crate::api::sensors::get_sensors_handler,
        crate::api::sensors::delete_sensor_handler,
    ),
    components(schemas(
        crate::api::properties::PropertyResponse,
        crate::api::properties::FieldResponse,
        crate::api::properties::CreatePropertyRequest,
        crate::api::properties::CreateFieldRequest,
        crate::api::sensors::SensorResponse,
        crate::api::error::ErrorBody,
        crate::domain::models::SensorType,
    ))
)]
pub struct ApiDoc;
