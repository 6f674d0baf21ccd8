//! Toll Gateway — admin CLI
//!
//! Thin host around `SeaOrmTollGateway` for operators and smoke tests.
//!
//! ```sh
//! # Default config (~/.config/toll-gateway/config.toml)
//! toll-cli status get 99
//! toll-cli status set 99 ACTIVE
//!
//! toll-cli vehicle register 42 --class 1 --user 7 --plate B-XY-1 \
//!     --chassis VIN1 --axles 2 --weight 3500 --country DE
//! toll-cli vehicle delete 42
//!
//! toll-cli toll-user 1001
//! toll-cli segments URBAN --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use toll_gateway::config::AppConfig;
use toll_gateway::infrastructure::database::migrator::{Migrator, MigratorTrait};
use toll_gateway::logging::init_tracing;
use toll_gateway::{
    init_database, AppError, DatabaseConfig, SeaOrmTollGateway, TollDataGateway,
    VehicleRegistration,
};

/// Toll Gateway — manage vehicles, on-board units and road segments.
#[derive(Parser, Debug)]
#[command(name = "toll-cli", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TOLL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database URL.
    #[arg(long, conflicts_with = "sqlite")]
    database_url: Option<String>,

    /// Use this SQLite file (created if missing) instead of the configured URL.
    #[arg(long, value_name = "PATH")]
    sqlite: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read or change on-board unit status.
    Status {
        #[command(subcommand)]
        action: StatusCommand,
    },
    /// Resolve the user liable for a toll charge (0 when unknown).
    TollUser { toll_id: i32 },
    /// Register or delete vehicles.
    Vehicle {
        #[command(subcommand)]
        action: VehicleCommand,
    },
    /// List road segments of a type.
    Segments {
        segment_type: String,
        /// Print as JSON instead of one line per segment.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum StatusCommand {
    Get { unit_id: i64 },
    Set { unit_id: i64, status: String },
}

#[derive(Subcommand, Debug)]
enum VehicleCommand {
    Register {
        vehicle_id: i64,
        #[arg(long)]
        class: i32,
        #[arg(long)]
        user: i32,
        #[arg(long)]
        plate: String,
        #[arg(long)]
        chassis: String,
        #[arg(long)]
        axles: i32,
        /// Weight in kilograms.
        #[arg(long)]
        weight: i32,
        #[arg(long)]
        country: String,
    },
    Delete { vehicle_id: i64 },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(toll_gateway::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Init tracing first so subsequent logs are formatted properly
    init_logging(&cli, &config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(url) = database_url_override(&cli) {
        info!("CLI override: database url = {}", url);
        config.database.url = url;
    }

    finish(run(cli, config).await)
}

fn database_url_override(cli: &Cli) -> Option<String> {
    if let Some(ref path) = cli.sqlite {
        return Some(DatabaseConfig::sqlite(&path.to_string_lossy()).url);
    }
    cli.database_url.clone()
}

fn init_logging(cli: &Cli, config: &AppConfig) {
    let mut logging = config.logging.clone();
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    init_tracing(&logging);
}

fn finish(result: Result<(), AppError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> Result<(), AppError> {
    let db = init_database(&config.database_config()).await?;

    if config.database.run_migrations && !cli.no_migrate {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations completed");
    }

    let mut gateway = SeaOrmTollGateway::new();
    gateway.bind_connection(db);

    match cli.command {
        Command::Status { action } => match action {
            StatusCommand::Get { unit_id } => {
                let status = gateway.get_on_board_unit_status(unit_id).await?;
                println!("{}", status);
            }
            StatusCommand::Set { unit_id, status } => {
                gateway.set_on_board_unit_status(unit_id, &status).await?;
                println!("unit {} -> {}", unit_id, status);
            }
        },
        Command::TollUser { toll_id } => {
            let user_id = gateway.resolve_user_for_toll(toll_id).await?;
            println!("{}", user_id);
        }
        Command::Vehicle { action } => match action {
            VehicleCommand::Register {
                vehicle_id,
                class,
                user,
                plate,
                chassis,
                axles,
                weight,
                country,
            } => {
                let registration = VehicleRegistration {
                    vehicle_id,
                    vehicle_class_id: class,
                    user_id: user,
                    plate,
                    chassis_id: chassis,
                    axles,
                    weight,
                    country,
                };
                gateway.register_vehicle(&registration).await?;
                println!("vehicle {} registered", vehicle_id);
            }
            VehicleCommand::Delete { vehicle_id } => {
                gateway.delete_vehicle(vehicle_id).await?;
                println!("vehicle {} deleted", vehicle_id);
            }
        },
        Command::Segments { segment_type, json } => {
            let segments = gateway.list_road_segments(&segment_type).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&segments)?);
            } else {
                for s in &segments {
                    println!(
                        "{:>6}  {:<24} {:>7} m  {} -> {}",
                        s.id, s.name, s.length, s.start_coordinate, s.end_coordinate
                    );
                }
            }
        }
    }

    Ok(())
}
