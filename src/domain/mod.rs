pub mod gateway;
pub mod road_segment;
pub mod vehicle;

// Re-export commonly used types
pub use gateway::TollDataGateway;
pub use road_segment::RoadSegment;
pub use vehicle::VehicleRegistration;

// Re-export DomainError from shared for convenience
pub use crate::shared::{DomainError, DomainResult};
