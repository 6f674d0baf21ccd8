//! Create vehicle table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicle::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicle::VehicleClassId).integer().not_null())
                    .col(ColumnDef::new(Vehicle::UserId).integer().not_null())
                    .col(ColumnDef::new(Vehicle::Plate).string_len(20).not_null())
                    .col(ColumnDef::new(Vehicle::ChassisId).string_len(32).not_null())
                    .col(ColumnDef::new(Vehicle::Axles).integer().not_null())
                    .col(ColumnDef::new(Vehicle::Weight).integer().not_null())
                    .col(ColumnDef::new(Vehicle::Country).string_len(3).not_null())
                    .col(ColumnDef::new(Vehicle::RegistrationDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_user_id")
                    .table(Vehicle::Table)
                    .col(Vehicle::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vehicle {
    Table,
    Id,
    VehicleClassId,
    UserId,
    Plate,
    ChassisId,
    Axles,
    Weight,
    Country,
    RegistrationDate,
}
