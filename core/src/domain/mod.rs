pub mod common;
pub mod schedule;
