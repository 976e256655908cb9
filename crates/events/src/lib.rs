//! SafePath alert bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub for zone alerts, backed
//!   by `tokio::sync::broadcast`.
//! - [`AlertPersistence`]: background service that writes every published
//!   alert to the `zone_alerts` table.

pub mod bus;
pub mod persistence;

pub use bus::EventBus;
pub use persistence::AlertPersistence;
