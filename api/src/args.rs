use clap::Parser;

use shyft_core::domain::common::{DatabaseConfig, ShyftConfig};

/// Process arguments. Every flag can also come from the environment (or a
/// `.env` file); the parsed value is converted once into [`ShyftConfig`]
/// and treated as immutable afterwards.
#[derive(Debug, Clone, Parser)]
#[command(name = "shyft", about = "Shift scheduler service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 9097)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/shyft")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "shyft")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ShyftConfig {
    fn from(args: Args) -> Self {
        ShyftConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
        }
    }
}
