//! The ports the domain services depend on. Store implementations live
//! in [`crate::outbound`]; the service traits are implemented in
//! [`crate::domain::services`] and consumed by the api layer.

use crate::domain::models::{DomainError, Farmer, NewField, NewProperty, Property, Sensor};
use uuid::Uuid;

/// Read access to the farmer identity records.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait FarmerReader: Send + Sync + 'static {
    type Err: Send;

    fn get_farmer_by_id(
        &self,
        farmer_id: Uuid,
    ) -> impl Future<Output = Result<Option<Farmer>, Self::Err>> + Send;
}

/// Storage for [`Property`] aggregates.
///
/// `replace_property` is a full-document overwrite keyed by id. There
/// is deliberately no partial update; an implementation that wants an
/// atomic nested-array push can provide it behind this same method
/// without changing the service contract.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait PropertyStore: Send + Sync + 'static {
    type Err: Send;

    fn create_property(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;

    fn get_properties_by_owner(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Property>, Self::Err>> + Send;

    fn get_property_by_id(
        &self,
        property_id: Uuid,
    ) -> impl Future<Output = Result<Option<Property>, Self::Err>> + Send;

    fn replace_property(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// Storage for [`Sensor`] records. Sensors are created elsewhere; this
/// core only reads and deletes them.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait SensorStore: Send + Sync + 'static {
    type Err: Send;

    fn get_sensor_by_id(
        &self,
        sensor_id: Uuid,
    ) -> impl Future<Output = Result<Option<Sensor>, Self::Err>> + Send;

    fn get_sensors_by_owner(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Sensor>, Self::Err>> + Send;

    fn delete_sensor_by_id(
        &self,
        sensor_id: Uuid,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// Farmer-scoped property operations. Every method validates the
/// caller against the farmer records before touching the property
/// store.
pub trait PropertyService: Send + Sync + 'static {
    fn list_properties(
        &self,
        farmer_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Property>, DomainError>> + Send;

    fn get_property(
        &self,
        farmer_id: Uuid,
        property_id: Uuid,
    ) -> impl Future<Output = Result<Property, DomainError>> + Send;

    fn create_property(
        &self,
        farmer_id: Uuid,
        request: NewProperty,
    ) -> impl Future<Output = Result<Property, DomainError>> + Send;

    fn add_field(
        &self,
        farmer_id: Uuid,
        property_id: Uuid,
        request: NewField,
    ) -> impl Future<Output = Result<Property, DomainError>> + Send;
}

/// Farmer-scoped sensor operations.
pub trait SensorService: Send + Sync + 'static {
    fn list_sensors(
        &self,
        farmer_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Sensor>, DomainError>> + Send;

    fn delete_sensor(
        &self,
        farmer_id: Uuid,
        sensor_id: Uuid,
    ) -> impl Future<Output = Result<(), DomainError>> + Send;
}
