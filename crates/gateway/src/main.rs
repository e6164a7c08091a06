//! content-api - HTTP entry point and maintenance commands.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::GatewayConfig;
use user_service_lib::{config::UserServiceConfig, MigrateAction};

#[derive(Parser)]
#[command(name = "content-api")]
#[command(author, version, about = "Content generation API", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
        port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateCommand,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateCommand {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

impl From<MigrateCommand> for MigrateAction {
    fn from(command: MigrateCommand) -> Self {
        match command {
            MigrateCommand::Up => MigrateAction::Up,
            MigrateCommand::Down => MigrateAction::Down,
            MigrateCommand::Status => MigrateAction::Status,
            MigrateCommand::Fresh => MigrateAction::Fresh,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve { host, port } => match GatewayConfig::from_env() {
            Ok(mut config) => {
                config.server.host = host;
                config.server.port = port;
                gateway_lib::run(config).await
            }
            Err(e) => Err(e),
        },
        Commands::Migrate { action } => {
            let config = UserServiceConfig::from_env();
            user_service_lib::run_migrations(&config, action.into()).await
        }
    };

    if let Err(e) = result {
        tracing::error!(error = ?e, "Command failed");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=debug"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
