use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::schedule::validators::UpdateScheduleValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};
use shyft_core::domain::schedule::{
    entities::ShiftSchedule, ports::ScheduleService, value_objects::UpdateScheduleInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateScheduleResponse {
    pub data: ShiftSchedule,
}

#[utoipa::path(
    put,
    path = "/shift-schedules/{schedule_id}",
    tag = "shift-schedule",
    summary = "Update a shift schedule",
    params(
        ("schedule_id" = i32, Path, description = "Shift schedule ID"),
    ),
    request_body = UpdateScheduleValidator,
    responses(
        (status = 200, body = UpdateScheduleResponse),
        (status = 404, description = "schedule not found")
    )
)]
pub async fn update_schedule(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateScheduleValidator>,
) -> Result<Response<UpdateScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .update_schedule(
            schedule_id,
            UpdateScheduleInput {
                alias: payload.alias,
                description: payload.description,
                frequency: payload.frequency,
                start_date: payload.start_date,
                end_date: payload.end_date,
                year: payload.year,
                status: payload.status,
                organization: payload.organization,
                manager: payload.manager,
                users: payload.users,
                shifts: payload.shifts,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateScheduleResponse { data: schedule }))
}
