//! On-board unit entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// On-board unit model - the device fitted to a vehicle that takes part in toll charges
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "on_board_unit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    /// Vehicle the unit is fitted to; cleared when the vehicle is deleted
    pub vehicle_link_id: Option<i64>,

    /// Operational state token (e.g. "ACTIVE", "BLOCKED")
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleLinkId",
        to = "super::vehicle::Column::Id",
        on_delete = "SetNull"
    )]
    Vehicle,

    #[sea_orm(has_many = "super::toll_charge::Entity")]
    TollCharges,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::toll_charge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TollCharges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
