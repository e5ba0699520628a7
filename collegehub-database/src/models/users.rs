use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub preferences: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub username: String,
    pub preferences: Option<Json>,
}

impl NewUser {
    pub fn into_model(self, id: i32, created_at: DateTimeUtc) -> Model {
        Model {
            id,
            username: self.username,
            preferences: self.preferences,
            created_at,
        }
    }

    pub fn into_active_model(self, created_at: DateTimeUtc) -> ActiveModel {
        let m = self.into_model(0, created_at);
        ActiveModel {
            id: NotSet,
            username: Set(m.username),
            preferences: Set(m.preferences),
            created_at: Set(m.created_at),
        }
    }
}
