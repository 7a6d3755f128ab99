use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use shyft_core::domain::schedule::ports::ScheduleService;

#[utoipa::path(
    delete,
    path = "/shift-schedules/{schedule_id}",
    tag = "shift-schedule",
    summary = "Delete a shift schedule",
    description = "Soft-deletes the schedule; the row stays queryable with active=false",
    params(
        ("schedule_id" = i32, Path, description = "Shift schedule ID"),
    ),
    responses(
        (status = 204, description = "schedule deleted"),
        (status = 404, description = "schedule not found")
    )
)]
pub async fn delete_schedule(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_schedule(schedule_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
