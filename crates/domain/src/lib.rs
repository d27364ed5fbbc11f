//! Domain layer for ShoreCast
//!
//! Contains core business types, value objects, and domain errors for the
//! beach-cleanup weather pipeline. This layer has no I/O dependencies and
//! defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
