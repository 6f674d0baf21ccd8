//! Create on_board_unit table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_vehicles::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnBoardUnit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnBoardUnit::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OnBoardUnit::VehicleLinkId).big_integer().null())
                    .col(
                        ColumnDef::new(OnBoardUnit::Status)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_on_board_unit_vehicle")
                            .from(OnBoardUnit::Table, OnBoardUnit::VehicleLinkId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_on_board_unit_vehicle")
                    .table(OnBoardUnit::Table)
                    .col(OnBoardUnit::VehicleLinkId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OnBoardUnit::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OnBoardUnit {
    Table,
    Id,
    VehicleLinkId,
    Status,
}
