use serde::{Deserialize, Serialize};

/// Caller-supplied values for a new vehicle.
///
/// The registration date is not part of this value: the store stamps it
/// with its current date when the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRegistration {
    pub vehicle_id: i64,
    pub vehicle_class_id: i32,
    pub user_id: i32,
    pub plate: String,
    /// Chassis number (VIN)
    pub chassis_id: String,
    pub axles: i32,
    /// Weight in kilograms
    pub weight: i32,
    pub country: String,
}
