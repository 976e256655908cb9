pub mod alerts;
pub mod location;
pub mod zones;
