//! Toll charge entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Toll charge model - a billable passage recorded against an on-board unit
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "toll_charge")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub unit_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::on_board_unit::Entity",
        from = "Column::UnitId",
        to = "super::on_board_unit::Column::Id",
        on_delete = "Cascade"
    )]
    OnBoardUnit,
}

impl Related<super::on_board_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnBoardUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
