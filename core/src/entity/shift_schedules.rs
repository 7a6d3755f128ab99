use sea_orm::entity::prelude::*;

/// Row of the `shift_schedule` table. The four collection columns hold
/// ordered JSONB arrays of key/value documents owned entirely by the row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shift_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
    pub alias: String,
    pub description: Option<String>,
    pub frequency: i32,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub year: i32,
    pub status: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub organization: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub manager: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub users: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub shifts: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
