use crate::domain::{
    models::{DomainError, Field, NewField, NewProperty, Property, Sensor},
    ports::{FarmerReader, PropertyService, PropertyStore, SensorService, SensorStore},
};
use uuid::Uuid;


/// Confirms a caller identity corresponds to an existing farmer.
///
/// This check is the mandatory first step of every domain-service
/// operation; no operation touches the property or sensor stores
/// before it succeeds.
pub struct OwnershipValidator<F> {
    farmers: F,
}

impl<F> OwnershipValidator<F>
where
    F: FarmerReader,
    anyhow::Error: From<F::Err>,
{
    pub fn new(farmers: F) -> Self {
        OwnershipValidator { farmers }
    }

    /// `NotFound` if the farmer does not exist; any reader failure is
    /// wrapped as `Unexpected` without masking the `NotFound` raised
    /// here.
    pub async fn ensure_farmer_exists(&self, farmer_id: Uuid) -> Result<(), DomainError> {
        let farmer = self
            .farmers
            .get_farmer_by_id(farmer_id)
            .await
            .map_err(DomainError::unexpected)?;

        match farmer {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound("farmer not found".to_string())),
        }
    }
}

/// Orchestrates property CRUD and nested-field insertion for a single
/// caller.
pub struct PropertyServiceImpl<F, P> {
    ownership: OwnershipValidator<F>,
    properties: P,
}

impl<F, P> PropertyServiceImpl<F, P>
where
    F: FarmerReader,
    P: PropertyStore,
    anyhow::Error: From<F::Err> + From<P::Err>,
{
    pub fn new(ownership: OwnershipValidator<F>, properties: P) -> Self {
        PropertyServiceImpl {
            ownership,
            properties,
        }
    }

    async fn owned_property(
        &self,
        farmer_id: Uuid,
        property_id: Uuid,
    ) -> Result<Property, DomainError> {
        // an absent property and one owned by a different farmer are
        // indistinguishable to the caller
        self.properties
            .get_property_by_id(property_id)
            .await
            .map_err(DomainError::unexpected)?
            .filter(|property| property.owner_id == farmer_id)
            .ok_or_else(|| DomainError::NotFound("property not found".to_string()))
    }
}

impl<F, P> PropertyService for PropertyServiceImpl<F, P>
where
    F: FarmerReader,
    P: PropertyStore,
    anyhow::Error: From<F::Err> + From<P::Err>,
{
    async fn list_properties(&self, farmer_id: Uuid) -> Result<Vec<Property>, DomainError> {
        self.ownership.ensure_farmer_exists(farmer_id).await?;

        self.properties
            .get_properties_by_owner(farmer_id)
            .await
            .map_err(DomainError::unexpected)
    }

    async fn get_property(
        &self,
        farmer_id: Uuid,
        property_id: Uuid,
    ) -> Result<Property, DomainError> {
        self.ownership.ensure_farmer_exists(farmer_id).await?;
        self.owned_property(farmer_id, property_id).await
    }

    async fn create_property(
        &self,
        farmer_id: Uuid,
        request: NewProperty,
    ) -> Result<Property, DomainError> {
        self.ownership.ensure_farmer_exists(farmer_id).await?;

        let property = Property {
            id: Uuid::new_v4(),
            name: request.name,
            location: request.location,
            total_area: request.total_area,
            owner_id: farmer_id,
            fields: Vec::new(),
        };

        if let Err(err) = self.properties.create_property(property.clone()).await {
            let err = anyhow::Error::from(err);
            tracing::error!(
                error = ?err,
                owner_id = %farmer_id,
                name = %property.name,
                "failed to persist new property"
            );
            return Err(DomainError::Persistence(err));
        }

        tracing::info!(property_id = %property.id, name = %property.name, "property created");
        Ok(property)
    }

    async fn add_field(
        &self,
        farmer_id: Uuid,
        property_id: Uuid,
        request: NewField,
    ) -> Result<Property, DomainError> {
        self.ownership.ensure_farmer_exists(farmer_id).await?;

        let mut property = self.owned_property(farmer_id, property_id).await?;

        let field = Field {
            field_id: Uuid::new_v4(),
            name: request.name,
            crop_type: request.crop_type,
            area: request.area,
        };
        property.fields.push(field);

        // read-modify-write of the whole aggregate, with no optimistic
        // concurrency check: concurrent additions to the same property
        // race and the last replace wins
        if let Err(err) = self.properties.replace_property(property.clone()).await {
            let err = anyhow::Error::from(err);
            tracing::error!(
                error = ?err,
                property_id = %property.id,
                "failed to persist field addition"
            );
            return Err(DomainError::Persistence(err));
        }

        tracing::info!(
            property_id = %property.id,
            field_count = property.fields.len(),
            "field added to property"
        );
        Ok(property)
    }
}

/// Orchestrates sensor listing and deletion for a single caller.
pub struct SensorServiceImpl<F, S> {
    ownership: OwnershipValidator<F>,
    sensors: S,
}

impl<F, S> SensorServiceImpl<F, S>
where
    F: FarmerReader,
    S: SensorStore,
    anyhow::Error: From<F::Err> + From<S::Err>,
{
    pub fn new(ownership: OwnershipValidator<F>, sensors: S) -> Self {
        SensorServiceImpl { ownership, sensors }
    }
}

impl<F, S> SensorService for SensorServiceImpl<F, S>
where
    F: FarmerReader,
    S: SensorStore,
    anyhow::Error: From<F::Err> + From<S::Err>,
{
    async fn list_sensors(&self, farmer_id: Uuid) -> Result<Vec<Sensor>, DomainError> {
        self.ownership.ensure_farmer_exists(farmer_id).await?;

        self.sensors
            .get_sensors_by_owner(farmer_id)
            .await
            .map_err(DomainError::unexpected)
    }

    async fn delete_sensor(&self, farmer_id: Uuid, sensor_id: Uuid) -> Result<(), DomainError> {
        self.ownership.ensure_farmer_exists(farmer_id).await?;

        let sensor = self
            .sensors
            .get_sensor_by_id(sensor_id)
            .await
            .map_err(DomainError::unexpected)?;

        if sensor.is_none() {
            return Err(DomainError::NotFound(format!(
                "sensor {sensor_id} not found"
            )));
        }

        // deletion is keyed by id alone; the fetched sensor's owner is
        // not compared against the caller, so any valid farmer can
        // delete a sensor it does not own
        self.sensors
            .delete_sensor_by_id(sensor_id)
            .await
            .map_err(DomainError::unexpected)?;

        tracing::info!(sensor_id = %sensor_id, "sensor deleted");
        Ok(())
    }
}
