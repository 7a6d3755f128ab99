use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::schedule::validators::CreateScheduleValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};
use shyft_core::domain::schedule::{
    entities::ShiftSchedule, ports::ScheduleService, value_objects::CreateScheduleInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateScheduleResponse {
    pub data: ShiftSchedule,
}

#[utoipa::path(
    post,
    path = "/shift-schedules",
    tag = "shift-schedule",
    summary = "Create a shift schedule",
    request_body = CreateScheduleValidator,
    responses(
        (status = 201, body = CreateScheduleResponse),
        (status = 422, description = "validation failure")
    )
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateScheduleValidator>,
) -> Result<Response<CreateScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .create_schedule(CreateScheduleInput {
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
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateScheduleResponse { data: schedule }))
}
