//! Farmer-scoped management of agricultural properties, their nested
//! fields, and field-attached sensors.
//!
//! The crate is organized hexagonally: [`domain`] holds the entities,
//! the persistence port traits and the service implementations,
//! [`outbound`] holds the Postgres adapter behind those ports, and
//! [`api`] holds the axum surface together with the single
//! error-translation boundary.

pub mod api;
pub mod config;
pub mod domain;
pub mod outbound;
