use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::schedule::value_objects::UpdateScheduleInput;

/// A shift schedule row. The four embedded collections are denormalized
/// snapshots stored as ordered JSONB arrays on the row itself; they have no
/// referential integrity with any other table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShiftSchedule {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub alias: String,
    pub description: Option<String>,
    pub frequency: i32, // 1..=7, days of the week
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub year: i32,
    pub status: i32, // 0: pending, 1: approved, 2: rejected
    pub organization: Vec<Contact>,
    pub manager: Vec<Contact>,
    pub users: Vec<ScheduleUser>,
    pub shifts: Vec<Shift>,
}

/// Element of the `organization` and `manager` collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub name: String,
    pub mail: String,
    pub phone: String,
}

/// Element of the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleUser {
    pub id: i32,
    pub name: String,
    pub mail: String,
    pub phone: String,
}

/// Element of the `shifts` collection. `start` and `end` are `YYYY-MM-DD`
/// strings, compared as dates inside the storage engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Shift {
    pub id: i32,
    pub start: String,
    pub end: String,
    pub user: String,
}

impl ShiftSchedule {
    pub fn update(&mut self, input: UpdateScheduleInput) {
        if let Some(alias) = input.alias {
            self.alias = alias;
        }
        if let Some(description) = input.description {
            self.description = Some(description);
        }
        if let Some(frequency) = input.frequency {
            self.frequency = frequency;
        }
        if let Some(start_date) = input.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = input.end_date {
            self.end_date = end_date;
        }
        if let Some(year) = input.year {
            self.year = year;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(organization) = input.organization {
            self.organization = organization;
        }
        if let Some(manager) = input.manager {
            self.manager = manager;
        }
        if let Some(users) = input.users {
            self.users = users;
        }
        if let Some(shifts) = input.shifts {
            self.shifts = shifts;
        }
        self.updated_at = Utc::now();
    }
}
