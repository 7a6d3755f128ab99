use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    schedule::{
        entities::ShiftSchedule,
        ports::ScheduleRepository,
        value_objects::{CreateScheduleInput, ListSchedulesParams},
    },
};
use crate::entity::shift_schedules::{
    ActiveModel as ScheduleActiveModel, Column as ScheduleColumn, Entity as ScheduleEntity,
};
use crate::infrastructure::schedule::{mappers::to_json, query};

#[derive(Debug, Clone)]
pub struct PostgresScheduleRepository {
    pub db: DatabaseConnection,
}

impl PostgresScheduleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ScheduleRepository for PostgresScheduleRepository {
    async fn count(&self, params: &ListSchedulesParams) -> Result<u64, CoreError> {
        ScheduleEntity::find()
            .filter(query::filter_conditions(params))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count shift schedules: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn fetch_page(
        &self,
        params: &ListSchedulesParams,
    ) -> Result<Vec<ShiftSchedule>, CoreError> {
        let resolved = query::resolve_sort(&params.sort_by, &params.sort_order);

        let schedules = ScheduleEntity::find()
            .filter(query::filter_conditions(params))
            .order_by(resolved.target.into_simple_expr(), resolved.order)
            .offset(params.offset())
            .limit(params.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shift schedules: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ShiftSchedule::from)
            .collect();

        Ok(schedules)
    }

    async fn get_by_id(&self, schedule_id: i32) -> Result<Option<ShiftSchedule>, CoreError> {
        let schedule = ScheduleEntity::find()
            .filter(ScheduleColumn::Id.eq(schedule_id))
            .filter(ScheduleColumn::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shift schedule by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ShiftSchedule::from);

        Ok(schedule)
    }

    async fn create(&self, input: CreateScheduleInput) -> Result<ShiftSchedule, CoreError> {
        let now = Utc::now();

        let created = ScheduleEntity::insert(ScheduleActiveModel {
            created_at: Set(now.fixed_offset()),
            updated_at: Set(now.fixed_offset()),
            alias: Set(input.alias),
            description: Set(input.description),
            frequency: Set(input.frequency),
            start_date: Set(input.start_date.fixed_offset()),
            end_date: Set(input.end_date.fixed_offset()),
            year: Set(input.year),
            status: Set(input.status),
            organization: Set(to_json(&input.organization)),
            manager: Set(to_json(&input.manager)),
            users: Set(to_json(&input.users)),
            shifts: Set(Some(to_json(&input.shifts))),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(ShiftSchedule::from)
        .map_err(|e| {
            error!("Failed to create shift schedule: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn update(&self, schedule: ShiftSchedule) -> Result<ShiftSchedule, CoreError> {
        let updated = ScheduleEntity::update(ScheduleActiveModel {
            id: Set(schedule.id),
            created_at: Set(schedule.created_at.fixed_offset()),
            updated_at: Set(schedule.updated_at.fixed_offset()),
            deleted_at: Set(schedule.deleted_at.map(|dt| dt.fixed_offset())),
            alias: Set(schedule.alias),
            description: Set(schedule.description),
            frequency: Set(schedule.frequency),
            start_date: Set(schedule.start_date.fixed_offset()),
            end_date: Set(schedule.end_date.fixed_offset()),
            year: Set(schedule.year),
            status: Set(schedule.status),
            organization: Set(to_json(&schedule.organization)),
            manager: Set(to_json(&schedule.manager)),
            users: Set(to_json(&schedule.users)),
            shifts: Set(Some(to_json(&schedule.shifts))),
        })
        .filter(ScheduleColumn::Id.eq(schedule.id))
        .exec(&self.db)
        .await
        .map(ShiftSchedule::from)
        .map_err(|e| {
            error!("Failed to update shift schedule: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn soft_delete(&self, schedule_id: i32) -> Result<bool, CoreError> {
        let now = Utc::now().fixed_offset();

        let result = ScheduleEntity::update_many()
            .col_expr(
                ScheduleColumn::DeletedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                ScheduleColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(ScheduleColumn::Id.eq(schedule_id))
            .filter(ScheduleColumn::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shift schedule: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
