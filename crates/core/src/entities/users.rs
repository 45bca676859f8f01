use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub phone: String,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Key into the external avatar blob store
    pub avatar_ref: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::health_records::Entity")]
    HealthRecords,
    #[sea_orm(has_one = "super::points_balances::Entity")]
    PointsBalances,
}

impl Related<super::health_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthRecords.def()
    }
}

impl Related<super::points_balances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointsBalances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
