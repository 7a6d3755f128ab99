use sea_orm::prelude::Json;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::schedule::entities::ShiftSchedule;
use crate::entity::shift_schedules::Model as ScheduleModel;

/// JSONB column -> typed collection. Elements that fail to deserialize
/// degrade to an empty collection instead of failing the read.
fn collection<T: DeserializeOwned>(value: Json) -> Vec<T> {
    serde_json::from_value(value).unwrap_or_default()
}

pub fn to_json<T: Serialize>(collection: &[T]) -> Json {
    serde_json::to_value(collection).unwrap_or_else(|_| Json::Array(Vec::new()))
}

impl From<ScheduleModel> for ShiftSchedule {
    fn from(model: ScheduleModel) -> Self {
        ShiftSchedule {
            id: model.id,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
            deleted_at: model.deleted_at.map(|dt| dt.to_utc()),
            alias: model.alias,
            description: model.description,
            frequency: model.frequency,
            start_date: model.start_date.to_utc(),
            end_date: model.end_date.to_utc(),
            year: model.year,
            status: model.status,
            organization: collection(model.organization),
            manager: collection(model.manager),
            users: collection(model.users),
            shifts: model.shifts.map(collection).unwrap_or_default(),
        }
    }
}

impl From<&ScheduleModel> for ShiftSchedule {
    fn from(model: &ScheduleModel) -> Self {
        model.clone().into()
    }
}
