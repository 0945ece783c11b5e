use anyhow::Context;
use farm_management_service::{
    api::{self, properties::PropertiesState, sensors::SensorsState},
    config::Config,
    domain::services::{OwnershipValidator, PropertyServiceImpl, SensorServiceImpl},
    outbound::postgres::FarmPgStorage,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("expected to be able to generate config")?;
    tracing::trace!("initialized config");

    let db = PgPoolOptions::new()
        .min_connections(3)
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;
    tracing::trace!("initialized db connection");

    let storage = FarmPgStorage::new(db);

    let property_service = PropertyServiceImpl::new(
        OwnershipValidator::new(storage.clone()),
        storage.clone(),
    );
    let sensor_service =
        SensorServiceImpl::new(OwnershipValidator::new(storage.clone()), storage);

    api::serve(
        config.port,
        PropertiesState::new(property_service),
        SensorsState::new(sensor_service),
    )
    .await
}
