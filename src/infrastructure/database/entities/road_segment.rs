//! Road segment entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Road segment model - a classified stretch of tolled road
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "road_segment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    /// Segment length in meters
    pub length: i32,

    pub start_coordinate: String,

    pub end_coordinate: String,

    pub name: String,

    /// Classification used for rating (e.g. "URBAN", "HIGHWAY")
    pub segment_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
