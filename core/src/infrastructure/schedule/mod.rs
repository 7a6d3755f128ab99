pub mod mappers;
pub mod query;
pub mod repositories;
