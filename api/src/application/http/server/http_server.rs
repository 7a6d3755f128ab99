use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use shyft_core::{application::create_service, domain::common::ShyftConfig};

use crate::application::http::health::health_routes;
use crate::application::http::schedule::router::{ScheduleApiDoc, schedule_routes};
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = ShyftConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    openapi.merge(ScheduleApiDoc::openapi());
    // handlers declare root-relative paths; prefix them for the served doc
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(schedule_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}
