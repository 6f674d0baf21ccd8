//! Toll data gateway interface
//!
//! Reads are soft on absence: a missing unit reads as an empty status, a
//! charge with no vehicle chain resolves to user `0`, and an unknown
//! segment type lists nothing. Writes are hard on absence: a status
//! update or a delete that matches no row is a `DataAccess` error.

use async_trait::async_trait;

use super::road_segment::RoadSegment;
use super::vehicle::VehicleRegistration;
use crate::shared::DomainResult;

#[async_trait]
pub trait TollDataGateway: Send + Sync {
    /// Status token of the unit, or `""` when the unit does not exist.
    async fn get_on_board_unit_status(&self, unit_id: i64) -> DomainResult<String>;

    async fn set_on_board_unit_status(&self, unit_id: i64, status: &str) -> DomainResult<()>;

    /// Inert: touches nothing in the store.
    async fn update_on_board_unit_status(&self, unit_id: i64) -> DomainResult<()>;

    /// User liable for a toll charge, or `0` when the
    /// charge → unit → vehicle chain does not resolve.
    async fn resolve_user_for_toll(&self, toll_id: i32) -> DomainResult<i32>;

    async fn register_vehicle(&self, registration: &VehicleRegistration) -> DomainResult<()>;

    async fn delete_vehicle(&self, vehicle_id: i64) -> DomainResult<()>;

    /// Segments of the given type, in store order.
    async fn list_road_segments(&self, segment_type: &str) -> DomainResult<Vec<RoadSegment>>;
}
