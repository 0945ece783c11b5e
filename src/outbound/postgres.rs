//! Postgres adapter for the farmer, property and sensor store ports.
//!
//! Properties are held document-style: the nested field list lives in
//! a single JSONB column and `replace_property` overwrites the whole
//! row, matching the aggregate-replacement contract of the port.

use crate::domain::{
    models::{Farmer, Property, Sensor, UnknownSensorType},
    ports::{FarmerReader, PropertyStore, SensorStore},
};
use sqlx::{PgPool, prelude::FromRow, types::Json};
use thiserror::Error;
use uuid::Uuid;


/// Concrete implementation of the store ports against a postgres
/// instance.
#[derive(Debug, Clone)]
pub struct FarmPgStorage {
    pool: PgPool,
}

/// the types of errors that can occur on [FarmPgStorage]
#[derive(Debug, Error)]
pub enum StorageErr {
    /// there was a sqlx error
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    /// the stored sensor type column held an unknown value
    #[error(transparent)]
    SensorType(#[from] UnknownSensorType),
}

impl FarmPgStorage {
    pub fn new(pool: PgPool) -> Self {
        FarmPgStorage { pool }
    }
}

#[derive(FromRow)]
struct FarmerRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
}

impl FarmerRow {
    fn into_farmer(self) -> Farmer {
        let FarmerRow {
            id,
            name,
            email,
            password_hash,
        } = self;
        Farmer {
            id,
            name,
            email,
            password_hash,
        }
    }
}

impl FarmerReader for FarmPgStorage {
    type Err = StorageErr;

    async fn get_farmer_by_id(&self, farmer_id: Uuid) -> Result<Option<Farmer>, Self::Err> {
        let row: Option<FarmerRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, password_hash
            FROM farmers
            WHERE id = $1
            "#,
        )
        .bind(farmer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FarmerRow::into_farmer))
    }
}

#[derive(FromRow)]
struct PropertyRow {
    id: Uuid,
    name: String,
    location: String,
    total_area: f64,
    owner_id: Uuid,
    fields: Json<Vec<crate::domain::models::Field>>,
}

impl PropertyRow {
    fn into_property(self) -> Property {
        let PropertyRow {
            id,
            name,
            location,
            total_area,
            owner_id,
            fields,
        } = self;
        Property {
            id,
            name,
            location,
            total_area,
            owner_id,
            fields: fields.0,
        }
    }
}

impl PropertyStore for FarmPgStorage {
    type Err = StorageErr;

    async fn create_property(&self, property: Property) -> Result<(), Self::Err> {
        sqlx::query(
            r#"
            INSERT INTO properties (id, owner_id, name, location, total_area, fields)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(property.id)
        .bind(property.owner_id)
        .bind(&property.name)
        .bind(&property.location)
        .bind(property.total_area)
        .bind(Json(&property.fields))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_properties_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, Self::Err> {
        let rows: Vec<PropertyRow> = sqlx::query_as(
            r#"
            SELECT id, name, location, total_area, owner_id, fields
            FROM properties
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PropertyRow::into_property).collect())
    }

    async fn get_property_by_id(&self, property_id: Uuid) -> Result<Option<Property>, Self::Err> {
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            SELECT id, name, location, total_area, owner_id, fields
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PropertyRow::into_property))
    }

    async fn replace_property(&self, property: Property) -> Result<(), Self::Err> {
        // whole-document overwrite keyed by id; there is no version
        // column, so the last writer wins
        sqlx::query(
            r#"
            UPDATE properties
            SET name = $2,
                location = $3,
                total_area = $4,
                fields = $5
            WHERE id = $1
            "#,
        )
        .bind(property.id)
        .bind(&property.name)
        .bind(&property.location)
        .bind(property.total_area)
        .bind(Json(&property.fields))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[derive(FromRow)]
struct SensorRow {
    id: Uuid,
    serial: String,
    sensor_type: String,
    owner_id: Uuid,
    field_id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl SensorRow {
    fn into_sensor(self) -> Result<Sensor, UnknownSensorType> {
        let SensorRow {
            id,
            serial,
            sensor_type,
            owner_id,
            field_id,
            created_at,
        } = self;

        Ok(Sensor {
            id,
            serial,
            sensor_type: sensor_type.parse()?,
            owner_id,
            field_id,
            created_at,
        })
    }
}

impl SensorStore for FarmPgStorage {
    type Err = StorageErr;

    async fn get_sensor_by_id(&self, sensor_id: Uuid) -> Result<Option<Sensor>, Self::Err> {
        let row: Option<SensorRow> = sqlx::query_as(
            r#"
            SELECT id, serial, sensor_type, owner_id, field_id, created_at
            FROM sensors
            WHERE id = $1
            "#,
        )
        .bind(sensor_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SensorRow::into_sensor).transpose().map_err(Into::into)
    }

    async fn get_sensors_by_owner(&self, owner_id: Uuid) -> Result<Vec<Sensor>, Self::Err> {
        let rows: Vec<SensorRow> = sqlx::query_as(
            r#"
            SELECT id, serial, sensor_type, owner_id, field_id, created_at
            FROM sensors
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_sensor().map_err(StorageErr::from))
            .collect()
    }

    async fn delete_sensor_by_id(&self, sensor_id: Uuid) -> Result<(), Self::Err> {
        sqlx::query(
            r#"
            DELETE FROM sensors
            WHERE id = $1
            "#,
        )
        .bind(sensor_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
