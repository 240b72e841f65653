//! Declarative content-schema contract.
//!
//! The hosted studio renders its editing widgets from these definitions,
//! and the query projections must use the same field names. Nothing here
//! computes; it is a passive contract kept in lock-step with the wire
//! DTOs.

mod definitions;
pub mod routes;
mod types;

pub use definitions::{author, category, post, project, schema_types, site_settings};
pub use types::{FieldDef, FieldKind, SchemaType};
