//! SeaORM implementation of TollDataGateway

use async_trait::async_trait;
use log::{debug, error, info, warn};
use sea_orm::sea_query::{Expr, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::domain::{DomainError, DomainResult};
use crate::domain::{RoadSegment, TollDataGateway, VehicleRegistration};
use crate::infrastructure::database::entities::{on_board_unit, road_segment, toll_charge, vehicle};

/// Gateway over the toll schema.
///
/// Holds at most one connection. Every operation fails with
/// `DomainError::Configuration` until one is bound.
#[derive(Debug, Default)]
pub struct SeaOrmTollGateway {
    db: Option<DatabaseConnection>,
}

impl SeaOrmTollGateway {
    pub fn new() -> Self {
        Self { db: None }
    }

    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Replace the active connection. Liveness is not checked here; a dead
    /// handle surfaces as `DataAccess` on first use.
    pub fn bind_connection(&mut self, db: DatabaseConnection) {
        self.db = Some(db);
    }

    fn connection(&self) -> DomainResult<&DatabaseConnection> {
        self.db.as_ref().ok_or_else(DomainError::connection_not_set)
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn segment_from_model(model: road_segment::Model) -> RoadSegment {
    RoadSegment {
        id: model.id,
        length: model.length,
        start_coordinate: model.start_coordinate,
        end_coordinate: model.end_coordinate,
        name: model.name,
        segment_type: model.segment_type,
    }
}

fn registration_values(r: &VehicleRegistration) -> [SimpleExpr; 9] {
    [
        r.vehicle_id.into(),
        r.vehicle_class_id.into(),
        r.user_id.into(),
        r.plate.clone().into(),
        r.chassis_id.clone().into(),
        r.axles.into(),
        r.weight.into(),
        r.country.clone().into(),
        Expr::cust("CURRENT_DATE"),
    ]
}

/// Log a store fault and wrap it with the operation it interrupted.
fn store_fault(context: String) -> impl FnOnce(DbErr) -> DomainError {
    move |e| {
        error!("Failed {}: {}", context, e);
        DomainError::data_access(context, e)
    }
}

// ── Gateway implementation ──────────────────────────────────────

#[async_trait]
impl TollDataGateway for SeaOrmTollGateway {
    async fn get_on_board_unit_status(&self, unit_id: i64) -> DomainResult<String> {
        let db = self.connection()?;
        debug!("Reading status of on-board unit {}", unit_id);

        let status = on_board_unit::Entity::find_by_id(unit_id)
            .select_only()
            .column(on_board_unit::Column::Status)
            .into_tuple::<String>()
            .one(db)
            .await
            .map_err(store_fault(format!(
                "reading status of on-board unit {}",
                unit_id
            )))?;

        match status {
            Some(status) => Ok(status),
            None => {
                warn!("No status found for on-board unit {}", unit_id);
                Ok(String::new())
            }
        }
    }

    async fn set_on_board_unit_status(&self, unit_id: i64, status: &str) -> DomainResult<()> {
        let db = self.connection()?;
        debug!("Setting status of on-board unit {} to '{}'", unit_id, status);

        let result = on_board_unit::Entity::update_many()
            .col_expr(on_board_unit::Column::Status, Expr::value(status))
            .filter(on_board_unit::Column::Id.eq(unit_id))
            .exec(db)
            .await
            .map_err(store_fault(format!(
                "updating status of on-board unit {}",
                unit_id
            )))?;

        if result.rows_affected == 0 {
            warn!(
                "Status of on-board unit {} was not updated, unit may not exist",
                unit_id
            );
            return Err(DomainError::no_rows_affected(format!(
                "on-board unit {} not found or status unchanged",
                unit_id
            )));
        }

        info!("Status of on-board unit {} set to '{}'", unit_id, status);
        Ok(())
    }

    async fn update_on_board_unit_status(&self, _unit_id: i64) -> DomainResult<()> {
        self.connection()?;
        Ok(())
    }

    async fn resolve_user_for_toll(&self, toll_id: i32) -> DomainResult<i32> {
        let db = self.connection()?;
        debug!("Resolving user for toll charge {}", toll_id);

        // toll_charge -> on_board_unit -> vehicle.user_id
        let user_id = toll_charge::Entity::find_by_id(toll_id)
            .select_only()
            .column(vehicle::Column::UserId)
            .join(JoinType::InnerJoin, toll_charge::Relation::OnBoardUnit.def())
            .join(JoinType::InnerJoin, on_board_unit::Relation::Vehicle.def())
            .into_tuple::<i32>()
            .one(db)
            .await
            .map_err(store_fault(format!(
                "resolving user for toll charge {}",
                toll_id
            )))?;

        Ok(user_id.unwrap_or_else(|| {
            debug!("No vehicle chain found for toll charge {}", toll_id);
            0
        }))
    }

    async fn register_vehicle(&self, registration: &VehicleRegistration) -> DomainResult<()> {
        let db = self.connection()?;
        let vehicle_id = registration.vehicle_id;
        debug!(
            "Registering vehicle {} (plate {})",
            vehicle_id, registration.plate
        );

        let mut insert = Query::insert();
        insert.into_table(vehicle::Entity).columns([
            vehicle::Column::Id,
            vehicle::Column::VehicleClassId,
            vehicle::Column::UserId,
            vehicle::Column::Plate,
            vehicle::Column::ChassisId,
            vehicle::Column::Axles,
            vehicle::Column::Weight,
            vehicle::Column::Country,
            vehicle::Column::RegistrationDate,
        ]);
        insert
            .values(registration_values(registration))
            .map_err(|e| DbErr::Custom(e.to_string()))
            .map_err(store_fault(format!("building insert for vehicle {}", vehicle_id)))?;

        let backend = db.get_database_backend();
        let result = db
            .execute(backend.build(&insert))
            .await
            .map_err(store_fault(format!("registering vehicle {}", vehicle_id)))?;

        // Some engines report a rejected insert as zero rows instead of an error
        if result.rows_affected() == 0 {
            warn!("Vehicle {} could not be registered", vehicle_id);
            return Err(DomainError::no_rows_affected(format!(
                "vehicle {} could not be registered",
                vehicle_id
            )));
        }

        info!("Vehicle {} registered", vehicle_id);
        Ok(())
    }

    async fn delete_vehicle(&self, vehicle_id: i64) -> DomainResult<()> {
        let db = self.connection()?;
        debug!("Deleting vehicle {}", vehicle_id);

        let result = vehicle::Entity::delete_by_id(vehicle_id)
            .exec(db)
            .await
            .map_err(store_fault(format!("deleting vehicle {}", vehicle_id)))?;

        if result.rows_affected == 0 {
            warn!(
                "Vehicle {} could not be deleted, vehicle may not exist",
                vehicle_id
            );
            return Err(DomainError::no_rows_affected(format!(
                "vehicle {} not found or already deleted",
                vehicle_id
            )));
        }

        info!("Vehicle {} deleted", vehicle_id);
        Ok(())
    }

    async fn list_road_segments(&self, segment_type: &str) -> DomainResult<Vec<RoadSegment>> {
        let db = self.connection()?;

        let models = road_segment::Entity::find()
            .filter(road_segment::Column::SegmentType.eq(segment_type))
            .all(db)
            .await
            .map_err(store_fault(format!(
                "listing road segments of type '{}'",
                segment_type
            )))?;

        info!(
            "Loaded {} road segments of type '{}'",
            models.len(),
            segment_type
        );
        Ok(models.into_iter().map(segment_from_model).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use chrono::Utc;
    use sea_orm::{Database, EntityTrait};

    use super::*;
    use crate::infrastructure::database::test_support::{
        migrated_db, seed_segment, seed_toll_charge, seed_unit, seed_vehicle,
    };

    fn registration(vehicle_id: i64) -> VehicleRegistration {
        VehicleRegistration {
            vehicle_id,
            vehicle_class_id: 1,
            user_id: 7,
            plate: "B-XY-1".into(),
            chassis_id: "VIN1".into(),
            axles: 2,
            weight: 3500,
            country: "DE".into(),
        }
    }

    async fn gateway() -> (SeaOrmTollGateway, DatabaseConnection) {
        let db = migrated_db().await;
        (SeaOrmTollGateway::with_connection(db.clone()), db)
    }

    #[tokio::test]
    async fn every_operation_requires_a_bound_connection() {
        let gw = SeaOrmTollGateway::new();

        assert!(gw.get_on_board_unit_status(1).await.unwrap_err().is_configuration());
        assert!(gw
            .set_on_board_unit_status(1, "ACTIVE")
            .await
            .unwrap_err()
            .is_configuration());
        assert!(gw.update_on_board_unit_status(1).await.unwrap_err().is_configuration());
        assert!(gw.resolve_user_for_toll(1).await.unwrap_err().is_configuration());
        assert!(gw
            .register_vehicle(&registration(1))
            .await
            .unwrap_err()
            .is_configuration());
        assert!(gw.delete_vehicle(1).await.unwrap_err().is_configuration());
        assert!(gw.list_road_segments("URBAN").await.unwrap_err().is_configuration());
    }

    #[tokio::test]
    async fn bind_connection_enables_operations() {
        let db = migrated_db().await;
        seed_unit(&db, 3, None, "ACTIVE").await;

        let mut gw = SeaOrmTollGateway::new();
        gw.bind_connection(db);
        assert_eq!(gw.get_on_board_unit_status(3).await.unwrap(), "ACTIVE");
    }

    #[tokio::test]
    async fn missing_unit_reads_as_empty_status() {
        let (gw, _db) = gateway().await;
        assert_eq!(gw.get_on_board_unit_status(12345).await.unwrap(), "");
    }

    #[tokio::test]
    async fn set_status_then_read_it_back() {
        let (gw, db) = gateway().await;
        seed_unit(&db, 99, None, "INACTIVE").await;

        gw.set_on_board_unit_status(99, "ACTIVE").await.unwrap();
        assert_eq!(gw.get_on_board_unit_status(99).await.unwrap(), "ACTIVE");
    }

    #[tokio::test]
    async fn long_status_tokens_round_trip() {
        let (gw, db) = gateway().await;
        seed_unit(&db, 100, None, "ACTIVE").await;

        let status = "SUSPENDED_PENDING_MANUAL_REVIEW_BY_OPERATOR";
        gw.set_on_board_unit_status(100, status).await.unwrap();
        assert_eq!(gw.get_on_board_unit_status(100).await.unwrap(), status);
    }

    #[tokio::test]
    async fn set_status_on_missing_unit_fails() {
        let (gw, _db) = gateway().await;
        let err = gw.set_on_board_unit_status(404, "ACTIVE").await.unwrap_err();
        assert!(err.is_data_access());
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn placeholder_status_update_changes_nothing() {
        let (gw, db) = gateway().await;
        seed_unit(&db, 5, None, "BLOCKED").await;

        gw.update_on_board_unit_status(5).await.unwrap();
        gw.update_on_board_unit_status(6).await.unwrap();
        assert_eq!(gw.get_on_board_unit_status(5).await.unwrap(), "BLOCKED");
    }

    #[tokio::test]
    async fn resolves_user_through_unit_and_vehicle() {
        let (gw, db) = gateway().await;
        seed_vehicle(&db, 5, 77).await;
        seed_unit(&db, 10, Some(5), "ACTIVE").await;
        seed_toll_charge(&db, 1, 10).await;

        assert_eq!(gw.resolve_user_for_toll(1).await.unwrap(), 77);
    }

    #[tokio::test]
    async fn unresolvable_toll_yields_zero() {
        let (gw, db) = gateway().await;
        // unit without a vehicle
        seed_unit(&db, 11, None, "ACTIVE").await;
        seed_toll_charge(&db, 2, 11).await;

        assert_eq!(gw.resolve_user_for_toll(2).await.unwrap(), 0);
        assert_eq!(gw.resolve_user_for_toll(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn register_stamps_current_date() {
        let (gw, db) = gateway().await;
        let before = Utc::now().date_naive();
        gw.register_vehicle(&registration(42)).await.unwrap();
        let after = Utc::now().date_naive();

        let stored = vehicle::Entity::find_by_id(42i64)
            .one(&db)
            .await
            .unwrap()
            .expect("vehicle row");
        assert_eq!(stored.user_id, 7);
        assert_eq!(stored.plate, "B-XY-1");
        assert_eq!(stored.chassis_id, "VIN1");
        assert_eq!(stored.country, "DE");
        assert!(stored.registration_date >= before && stored.registration_date <= after);
    }

    #[tokio::test]
    async fn register_then_delete_leaves_nothing_behind() {
        let (gw, db) = gateway().await;
        gw.register_vehicle(&registration(42)).await.unwrap();
        gw.delete_vehicle(42).await.unwrap();

        let err = gw.delete_vehicle(42).await.unwrap_err();
        assert!(err.is_data_access());
        assert!(err.source().is_none());
        assert!(vehicle::Entity::find_by_id(42i64)
            .one(&db)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_registration_wraps_store_error() {
        let (gw, _db) = gateway().await;
        gw.register_vehicle(&registration(8)).await.unwrap();

        let err = gw.register_vehicle(&registration(8)).await.unwrap_err();
        assert!(err.is_data_access());
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn delete_missing_vehicle_fails() {
        let (gw, _db) = gateway().await;
        assert!(gw.delete_vehicle(1).await.unwrap_err().is_data_access());
    }

    #[tokio::test]
    async fn deleted_vehicle_no_longer_resolves_tolls() {
        let (gw, db) = gateway().await;
        seed_vehicle(&db, 5, 77).await;
        seed_unit(&db, 10, Some(5), "ACTIVE").await;
        seed_toll_charge(&db, 1, 10).await;

        gw.delete_vehicle(5).await.unwrap();
        assert_eq!(gw.resolve_user_for_toll(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn lists_only_segments_of_requested_type() {
        let (gw, db) = gateway().await;
        seed_segment(&db, 1, "Ring Road", "URBAN").await;
        seed_segment(&db, 2, "A9", "HIGHWAY").await;

        let urban = gw.list_road_segments("URBAN").await.unwrap();
        assert_eq!(urban.len(), 1);
        assert_eq!(urban[0].id, 1);
        assert_eq!(urban[0].name, "Ring Road");
        assert_eq!(urban[0].segment_type, "URBAN");
        assert_eq!(urban[0].length, 1000);
        assert_eq!(urban[0].start_coordinate, "52.52,13.40");
        assert_eq!(urban[0].end_coordinate, "52.53,13.41");
    }

    #[tokio::test]
    async fn lists_all_matching_segments_in_any_order() {
        let (gw, db) = gateway().await;
        seed_segment(&db, 3, "A7", "HIGHWAY").await;
        seed_segment(&db, 1, "A9", "HIGHWAY").await;
        seed_segment(&db, 2, "B2", "URBAN").await;

        let mut ids: Vec<i32> = gw
            .list_road_segments("HIGHWAY")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn unknown_segment_type_lists_nothing() {
        let (gw, db) = gateway().await;
        seed_segment(&db, 1, "Ring Road", "URBAN").await;
        assert!(gw.list_road_segments("RURAL").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_faults_surface_as_data_access() {
        // Schema never created: every statement fails in the store
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let gw = SeaOrmTollGateway::with_connection(db);

        let err = gw.get_on_board_unit_status(1).await.unwrap_err();
        assert!(err.is_data_access());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("unit 1"));

        assert!(gw.resolve_user_for_toll(1).await.unwrap_err().is_data_access());
        assert!(gw.list_road_segments("URBAN").await.unwrap_err().is_data_access());
        assert!(gw
            .register_vehicle(&registration(1))
            .await
            .unwrap_err()
            .is_data_access());
    }

    #[tokio::test]
    async fn write_faults_keep_the_store_cause() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let gw = SeaOrmTollGateway::with_connection(db);

        let err = gw.set_on_board_unit_status(1, "ACTIVE").await.unwrap_err();
        assert!(err.is_data_access());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("unit 1"));

        let err = gw.delete_vehicle(1).await.unwrap_err();
        assert!(err.is_data_access());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("vehicle 1"));
    }
}
