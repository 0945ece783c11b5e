use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity record for a farmer. Owned by the identity subsystem; this
/// core only reads it to confirm a caller exists and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A property together with the fields it exclusively owns.
///
/// The aggregate is mutated only by whole-document replacement: adding
/// a field rewrites the entire stored property. `fields` keeps
/// insertion order and that order is the only ordering guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub total_area: f64,
    pub owner_id: Uuid,
    pub fields: Vec<Field>,
}

/// A cultivated lot inside a [`Property`]. Has no identity or storage
/// outside its parent aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub field_id: Uuid,
    pub name: String,
    pub crop_type: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: Uuid,
    pub serial: String,
    pub sensor_type: SensorType,
    pub owner_id: Uuid,
    /// Reference only; existence of the field is not validated here.
    pub field_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Temperature,
    Humidity,
    Pressure,
}

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Humidity => "humidity",
            SensorType::Pressure => "pressure",
        }
    }
}

/// the stored value did not name a known sensor type
#[derive(Debug, Error)]
#[error("unknown sensor type: {0}")]
pub struct UnknownSensorType(pub String);

impl FromStr for SensorType {
    type Err = UnknownSensorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(SensorType::Temperature),
            "humidity" => Ok(SensorType::Humidity),
            "pressure" => Ok(SensorType::Pressure),
            other => Err(UnknownSensorType(other.to_string())),
        }
    }
}

/// Attributes for a property to be created. The id is generated by the
/// service, never supplied by the caller.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub name: String,
    pub location: String,
    pub total_area: f64,
}

/// Attributes for a field to be appended to an existing property.
#[derive(Debug, Clone)]
pub struct NewField {
    pub name: String,
    pub crop_type: String,
    pub area: f64,
}

/// The closed set of failures a domain service can produce.
///
/// Variants are dispatched on programmatically by the translation
/// boundary; message text is never inspected. `NotFound` covers both a
/// genuinely absent entity and one owned by a different farmer, so
/// existence never leaks across owners.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    /// A write failed after validation succeeded. The cause is kept in
    /// the message chain for diagnostics.
    #[error("failed to persist changes to the store: {0}")]
    Persistence(anyhow::Error),
    /// Anything this core did not deliberately raise.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl DomainError {
    pub fn unexpected(err: impl Into<anyhow::Error>) -> Self {
        DomainError::Unexpected(err.into())
    }
}
