use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use shyft_core::domain::schedule::{
    ports::ScheduleService,
    value_objects::{ListSchedulesParams, ScheduleListPage},
};

/// Flat query surface of the list endpoint. Absent and blank values both
/// mean "not provided"; out-of-range page numbers and unknown sort keys are
/// normalized downstream, never rejected.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSchedulesQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub active: Option<bool>,
    pub status: Option<i32>,
    pub year: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub organization_name: Option<String>,
    pub organization_mail: Option<String>,
    pub organization_phone: Option<String>,
    pub manager_name: Option<String>,
    pub manager_mail: Option<String>,
    pub manager_phone: Option<String>,
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub user_mail: Option<String>,
    pub user_phone: Option<String>,
    pub shift_id: Option<i32>,
    pub shift_start: Option<String>,
    pub shift_end: Option<String>,
    pub shift_user: Option<String>,
    pub range_year: Option<i32>,
}

impl From<GetSchedulesQuery> for ListSchedulesParams {
    fn from(query: GetSchedulesQuery) -> Self {
        ListSchedulesParams {
            page: query.page.unwrap_or(0),
            page_size: query.page_size.unwrap_or(0),
            search: query.search,
            sort_by: query.sort_by.unwrap_or_default(),
            sort_order: query.sort_order.unwrap_or_default(),
            only_active: query.active,
            status: query.status,
            year: query.year,
            start_date: query.start_date,
            end_date: query.end_date,
            organization_name: query.organization_name,
            organization_mail: query.organization_mail,
            organization_phone: query.organization_phone,
            manager_name: query.manager_name,
            manager_mail: query.manager_mail,
            manager_phone: query.manager_phone,
            user_id: query.user_id,
            user_name: query.user_name,
            user_mail: query.user_mail,
            user_phone: query.user_phone,
            shift_id: query.shift_id,
            shift_start: query.shift_start,
            shift_end: query.shift_end,
            shift_user: query.shift_user,
            range_year: query.range_year,
        }
    }
}

#[utoipa::path(
    get,
    path = "/shift-schedules",
    tag = "shift-schedule",
    summary = "List shift schedules",
    description = "Get shift schedules with pagination, search, sort and filter options",
    params(GetSchedulesQuery),
    responses(
        (status = 200, body = ScheduleListPage),
        (status = 500, description = "storage failure")
    )
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    Query(query): Query<GetSchedulesQuery>,
) -> Result<Response<ScheduleListPage>, ApiError> {
    let page = state
        .service
        .list_schedules(ListSchedulesParams::from(query))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
