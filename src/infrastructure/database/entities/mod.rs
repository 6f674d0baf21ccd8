//! Database entities module

pub mod on_board_unit;
pub mod road_segment;
pub mod toll_charge;
pub mod vehicle;

pub use on_board_unit::Entity as OnBoardUnit;
pub use road_segment::Entity as RoadSegment;
pub use toll_charge::Entity as TollCharge;
pub use vehicle::Entity as Vehicle;
