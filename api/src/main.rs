use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server;
use crate::args::Args;

mod application;
mod args;

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_new(&args.log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if args.log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args);

    let state = http_server::state(Arc::clone(&args)).await?;
    let router = http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("listening on {addr}");
    info!(
        "swagger ui available at http://{addr}{}/swagger-ui",
        args.server.root_path
    );

    axum::serve(listener, router).await?;

    Ok(())
}
