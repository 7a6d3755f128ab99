pub mod shift_schedules;
