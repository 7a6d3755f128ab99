pub mod create_schedule;
pub mod delete_schedule;
pub mod get_schedule;
pub mod get_schedules;
pub mod update_schedule;
