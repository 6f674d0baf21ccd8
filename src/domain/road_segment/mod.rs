//! Road segment aggregate (read-only)

pub mod model;

pub use model::RoadSegment;
