use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per user per calendar date. Columns are merged field by field,
/// never replaced wholesale.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "health_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i32,
    pub user_id: i32,
    pub record_date: Date,
    pub steps: i64,
    pub steps_goal: i64,
    pub distance: f64,
    pub calories_burned: f64,
    pub current_heart_rate: i32,
    pub resting_heart_rate: i32,
    pub min_heart_rate: i32,
    pub avg_heart_rate: i32,
    pub max_heart_rate: i32,
    pub current_blood_oxygen: i32,
    pub min_blood_oxygen: i32,
    pub avg_blood_oxygen: i32,
    pub max_blood_oxygen: i32,
    pub sleep_score: i32,
    pub sleep_duration: i32,
    pub sleep_start_time: String,
    pub sleep_end_time: String,
    pub deep_sleep_duration: i32,
    pub light_sleep_duration: i32,
    pub rem_sleep_duration: i32,
    pub awake_duration: i32,
    pub active_calories: f64,
    pub calories_goal: f64,
    pub activity_calories: f64,
    pub basic_metabolism_calories: f64,
    pub current_mood: i32,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
