use serde::{Deserialize, Serialize};

/// A classified stretch of tolled road
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub id: i32,
    /// Length in meters
    pub length: i32,
    pub start_coordinate: String,
    pub end_coordinate: String,
    pub name: String,
    pub segment_type: String,
}
