//! Create road_segment table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoadSegment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoadSegment::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoadSegment::Length).integer().not_null())
                    .col(ColumnDef::new(RoadSegment::StartCoordinate).string().not_null())
                    .col(ColumnDef::new(RoadSegment::EndCoordinate).string().not_null())
                    .col(ColumnDef::new(RoadSegment::Name).string_len(255).not_null())
                    .col(ColumnDef::new(RoadSegment::SegmentType).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_road_segment_type")
                    .table(RoadSegment::Table)
                    .col(RoadSegment::SegmentType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoadSegment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RoadSegment {
    Table,
    Id,
    Length,
    StartCoordinate,
    EndCoordinate,
    Name,
    SegmentType,
}
