//! Core outcome and contract types for Keel.
//!
//! This crate contains pure data types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of a domain model.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented on the accessors

mod outcome;
mod settings;
mod violation;

pub use outcome::Outcome;
pub use settings::{PinPolicy, PinPolicyError};
pub use violation::{ContractViolation, OutcomeSide};
