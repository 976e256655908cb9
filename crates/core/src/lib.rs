//! SafePath domain logic.
//!
//! Pure types and rules shared by the database, event and API crates:
//! geofence zones and the proximity evaluator, validation for logged
//! location readings, and the common error type.

pub mod error;
pub mod geofence;
pub mod location;
pub mod types;
