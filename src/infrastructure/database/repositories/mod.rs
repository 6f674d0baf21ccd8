//! Database repository implementations

pub mod toll_gateway;

pub use toll_gateway::SeaOrmTollGateway;
