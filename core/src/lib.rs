//! Domain-model building blocks for Keel.
//!
//! This crate contains the pieces a domain model is assembled from:
//! first-failure-wins outcome aggregation, per-conversion field state
//! tracking, mapper seams, the write/read list pair for collection
//! attributes, and the pin value object.

mod aggregate;
mod list;
mod mapper;
mod pin;
mod state;

pub use aggregate::{aggregate, aggregate_owned, collect, first_failure};
pub use list::{ListAccess, ListEdit, ListPolicy, ReadList, WriteList};
pub use mapper::{DomainMapper, Mapper, MapperFactory};
pub use pin::{INVALID_PIN, Pin};
pub use state::{FieldKey, FieldOutcome, FieldStates};

pub use keel_types::{ContractViolation, Outcome, OutcomeSide, PinPolicy};
