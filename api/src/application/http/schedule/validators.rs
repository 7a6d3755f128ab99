use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use shyft_core::domain::schedule::entities::{Contact, ScheduleUser, Shift};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateScheduleValidator {
    #[validate(length(min = 1, message = "alias is required"))]
    pub alias: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Days-of-week bitmask, at least one day.
    #[validate(range(min = 1, message = "frequency must be at least 1"))]
    #[serde(default = "default_frequency")]
    pub frequency: i32,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub year: i32,

    /// 0: pending, 1: approved, 2: rejected
    #[validate(range(min = 0, max = 2, message = "status must be 0, 1 or 2"))]
    #[serde(default)]
    pub status: i32,

    #[serde(default)]
    pub organization: Vec<Contact>,

    #[serde(default)]
    pub manager: Vec<Contact>,

    #[serde(default)]
    pub users: Vec<ScheduleUser>,

    #[serde(default)]
    pub shifts: Vec<Shift>,
}

fn default_frequency() -> i32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateScheduleValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "alias must not be empty"))]
    pub alias: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "frequency must be at least 1"))]
    pub frequency: Option<i32>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, max = 2, message = "status must be 0, 1 or 2"))]
    pub status: Option<i32>,

    #[serde(default)]
    pub organization: Option<Vec<Contact>>,

    #[serde(default)]
    pub manager: Option<Vec<Contact>>,

    #[serde(default)]
    pub users: Option<Vec<ScheduleUser>>,

    #[serde(default)]
    pub shifts: Option<Vec<Shift>>,
}
