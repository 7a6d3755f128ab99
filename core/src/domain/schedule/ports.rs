use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    schedule::{
        entities::ShiftSchedule,
        value_objects::{
            CreateScheduleInput, ListSchedulesParams, ScheduleListPage, UpdateScheduleInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ScheduleService: Send + Sync {
    fn list_schedules(
        &self,
        params: ListSchedulesParams,
    ) -> impl Future<Output = Result<ScheduleListPage, CoreError>> + Send;

    fn get_schedule(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Option<ShiftSchedule>, CoreError>> + Send;

    fn create_schedule(
        &self,
        input: CreateScheduleInput,
    ) -> impl Future<Output = Result<ShiftSchedule, CoreError>> + Send;

    fn update_schedule(
        &self,
        schedule_id: i32,
        input: UpdateScheduleInput,
    ) -> impl Future<Output = Result<ShiftSchedule, CoreError>> + Send;

    fn delete_schedule(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Storage collaborator contract. `count` and `fetch_page` take the same
/// normalized parameters so both observe the same predicate set; `fetch_page`
/// additionally applies the safelisted sort expression, offset and limit.
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleRepository: Send + Sync {
    fn count(
        &self,
        params: &ListSchedulesParams,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn fetch_page(
        &self,
        params: &ListSchedulesParams,
    ) -> impl Future<Output = Result<Vec<ShiftSchedule>, CoreError>> + Send;

    fn get_by_id(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Option<ShiftSchedule>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateScheduleInput,
    ) -> impl Future<Output = Result<ShiftSchedule, CoreError>> + Send;

    fn update(
        &self,
        schedule: ShiftSchedule,
    ) -> impl Future<Output = Result<ShiftSchedule, CoreError>> + Send;

    fn soft_delete(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
