pub mod db;
pub mod schedule;
