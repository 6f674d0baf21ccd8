//! In-memory SQLite fixtures for gateway tests

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use super::entities::{on_board_unit, road_segment, toll_charge, vehicle};
use super::migrator::Migrator;

/// Fresh in-memory database with the full schema.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn migrated_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn seed_vehicle(db: &DatabaseConnection, id: i64, user_id: i32) {
    vehicle::ActiveModel {
        id: Set(id),
        vehicle_class_id: Set(1),
        user_id: Set(user_id),
        plate: Set(format!("TST-{}", id)),
        chassis_id: Set(format!("VIN{:014}", id)),
        axles: Set(2),
        weight: Set(3500),
        country: Set("DE".into()),
        registration_date: Set(Utc::now().date_naive()),
    }
    .insert(db)
    .await
    .expect("seed vehicle");
}

pub async fn seed_unit(db: &DatabaseConnection, id: i64, vehicle_id: Option<i64>, status: &str) {
    on_board_unit::ActiveModel {
        id: Set(id),
        vehicle_link_id: Set(vehicle_id),
        status: Set(status.to_string()),
    }
    .insert(db)
    .await
    .expect("seed on-board unit");
}

pub async fn seed_toll_charge(db: &DatabaseConnection, id: i32, unit_id: i64) {
    toll_charge::ActiveModel {
        id: Set(id),
        unit_id: Set(unit_id),
    }
    .insert(db)
    .await
    .expect("seed toll charge");
}

pub async fn seed_segment(db: &DatabaseConnection, id: i32, name: &str, segment_type: &str) {
    road_segment::ActiveModel {
        id: Set(id),
        length: Set(1000),
        start_coordinate: Set("52.52,13.40".into()),
        end_coordinate: Set("52.53,13.41".into()),
        name: Set(name.to_string()),
        segment_type: Set(segment_type.to_string()),
    }
    .insert(db)
    .await
    .expect("seed road segment");
}
