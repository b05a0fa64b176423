//! Typed CRUD access to a remote classroom record store.
//!
//! Each entity (students, classes, assignments, grades, attendance) is served
//! by the same [`EntityAccessor`], configured by the entity's field table.
//! The backend is reached through the [`RecordClient`] trait; the crate ships
//! an HTTP implementation and tests use a scripted stub.

pub mod accessor;
pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod services;

#[cfg(test)]
mod testutil;

pub use accessor::EntityAccessor;
pub use client::{HttpRecordClient, RecordClient};
pub use config::BackendConfig;
pub use entities::{Assignment, Attendance, Class, Grade, Student};
pub use error::{ClientError, ConfigError, ServiceError};
pub use mapping::Entity;
pub use services::Gradebook;
