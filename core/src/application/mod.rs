use crate::domain::common::{ShyftConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    schedule::repositories::PostgresScheduleRepository,
};

pub type ShyftService = Service<PostgresScheduleRepository>;

/// Builds the application service from an immutable configuration value:
/// connects to Postgres, applies migrations, and wires the repository.
pub async fn create_service(config: ShyftConfig) -> Result<ShyftService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    postgres.migrate().await?;

    Ok(Service::new(PostgresScheduleRepository::new(
        postgres.get_db(),
    )))
}
