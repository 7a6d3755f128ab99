use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_schedule::{__path_create_schedule, create_schedule},
    delete_schedule::{__path_delete_schedule, delete_schedule},
    get_schedule::{__path_get_schedule, get_schedule},
    get_schedules::{__path_get_schedules, get_schedules},
    update_schedule::{__path_update_schedule, update_schedule},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_schedules,
    get_schedule,
    create_schedule,
    update_schedule,
    delete_schedule
))]
pub struct ScheduleApiDoc;

pub fn schedule_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/shift-schedules", state.args.server.root_path),
            post(create_schedule).get(get_schedules),
        )
        .route(
            &format!(
                "{}/shift-schedules/{{schedule_id}}",
                state.args.server.root_path
            ),
            get(get_schedule)
                .put(update_schedule)
                .delete(delete_schedule),
        )
}
