use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use shyft_core::domain::schedule::{entities::ShiftSchedule, ports::ScheduleService};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScheduleResponse {
    pub data: ShiftSchedule,
}

#[utoipa::path(
    get,
    path = "/shift-schedules/{schedule_id}",
    tag = "shift-schedule",
    summary = "Get a shift schedule",
    params(
        ("schedule_id" = i32, Path, description = "Shift schedule ID"),
    ),
    responses(
        (status = 200, body = GetScheduleResponse),
        (status = 404, description = "schedule not found")
    )
)]
pub async fn get_schedule(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<GetScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .get_schedule(schedule_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("shift schedule {schedule_id} not found")))?;

    Ok(Response::OK(GetScheduleResponse { data: schedule }))
}
