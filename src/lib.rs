//! # Toll Gateway
//!
//! Data-access layer for road-usage charging: vehicles, on-board units,
//! toll charges and road segments stored in a relational database.
//!
//! ## Architecture
//!
//! - **domain**: value types and the `TollDataGateway` interface
//! - **infrastructure**: SeaORM entities, schema migrations and the gateway implementation
//! - **shared**: error types
//! - **config** / **logging**: ambient setup for host applications
//!
//! ```ignore
//! let db = init_database(&DatabaseConfig::from_env()).await?;
//! let mut gateway = SeaOrmTollGateway::new();
//! gateway.bind_connection(db);
//! gateway.set_on_board_unit_status(99, "ACTIVE").await?;
//! assert_eq!(gateway.get_on_board_unit_status(99).await?, "ACTIVE");
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmTollGateway};

pub use domain::{RoadSegment, TollDataGateway, VehicleRegistration};
pub use shared::{AppError, DomainError, DomainResult};
