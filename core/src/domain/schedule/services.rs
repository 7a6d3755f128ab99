use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    schedule::{
        entities::ShiftSchedule,
        ports::{ScheduleRepository, ScheduleService},
        value_objects::{
            CreateScheduleInput, ListSchedulesParams, ScheduleListPage, UpdateScheduleInput,
        },
    },
};

impl<S> ScheduleService for Service<S>
where
    S: ScheduleRepository,
{
    /// Lists one page of schedules: normalize the parameters, count the rows
    /// matching the predicate set, fetch the ordered page, assemble the
    /// envelope. Either step failing fails the whole operation; no partial
    /// result is returned.
    async fn list_schedules(
        &self,
        params: ListSchedulesParams,
    ) -> Result<ScheduleListPage, CoreError> {
        let params = params.normalized();

        let total = self.schedule_repository.count(&params).await?;
        let data = self.schedule_repository.fetch_page(&params).await?;

        Ok(ScheduleListPage::new(data, total, &params))
    }

    async fn get_schedule(&self, schedule_id: i32) -> Result<Option<ShiftSchedule>, CoreError> {
        self.schedule_repository.get_by_id(schedule_id).await
    }

    async fn create_schedule(
        &self,
        input: CreateScheduleInput,
    ) -> Result<ShiftSchedule, CoreError> {
        self.schedule_repository.create(input).await
    }

    async fn update_schedule(
        &self,
        schedule_id: i32,
        input: UpdateScheduleInput,
    ) -> Result<ShiftSchedule, CoreError> {
        let mut schedule = self
            .schedule_repository
            .get_by_id(schedule_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        schedule.update(input);

        self.schedule_repository.update(schedule).await
    }

    async fn delete_schedule(&self, schedule_id: i32) -> Result<(), CoreError> {
        let deleted = self.schedule_repository.soft_delete(schedule_id).await?;
        if !deleted {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }
}
