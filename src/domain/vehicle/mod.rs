//! Vehicle aggregate

pub mod model;

pub use model::VehicleRegistration;
