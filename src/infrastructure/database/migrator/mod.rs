//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_vehicles;
mod m20240101_000002_create_on_board_units;
mod m20240101_000003_create_toll_charges;
mod m20240101_000004_create_road_segments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_vehicles::Migration),
            Box::new(m20240101_000002_create_on_board_units::Migration),
            Box::new(m20240101_000003_create_toll_charges::Migration),
            Box::new(m20240101_000004_create_road_segments::Migration),
        ]
    }
}
