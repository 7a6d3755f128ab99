pub mod entities;
pub mod services;

/// Process-wide configuration, built once at startup and handed to
/// `application::create_service` by value. Components never read global
/// mutable state.
#[derive(Clone, Debug)]
pub struct ShyftConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}
