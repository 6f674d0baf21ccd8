//! Create toll_charge table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_on_board_units::OnBoardUnit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TollCharge::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TollCharge::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TollCharge::UnitId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_toll_charge_unit")
                            .from(TollCharge::Table, TollCharge::UnitId)
                            .to(OnBoardUnit::Table, OnBoardUnit::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Charges are looked up per unit when resolving the liable user
        manager
            .create_index(
                Index::create()
                    .name("idx_toll_charge_unit")
                    .table(TollCharge::Table)
                    .col(TollCharge::UnitId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TollCharge::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TollCharge {
    Table,
    Id,
    UnitId,
}
