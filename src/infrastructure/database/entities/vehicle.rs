//! Vehicle entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vehicle model - a registered vehicle liable for road-usage charges
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    /// Vehicle ID, assigned by the caller at registration
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    /// Vehicle class used for rate selection
    pub vehicle_class_id: i32,

    /// Owning user
    pub user_id: i32,

    /// License plate
    pub plate: String,

    /// Chassis number (VIN)
    pub chassis_id: String,

    pub axles: i32,

    /// Weight in kilograms
    pub weight: i32,

    /// Registration country code
    pub country: String,

    /// Set by the store at insert time, never updated
    pub registration_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::on_board_unit::Entity")]
    OnBoardUnits,
}

impl Related<super::on_board_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnBoardUnits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
