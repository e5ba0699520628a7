use sea_orm::{entity::prelude::*, FromJsonQueryResult, NotSet, Set};
use serde::{Deserialize, Serialize};

/// A saved side-by-side comparison. Referenced colleges are not checked for
/// existence when the comparison is stored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comparisons")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub college_ids: CollegeIds,
    pub user_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct CollegeIds(pub Vec<i32>);

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewComparison {
    pub name: Option<String>,
    pub college_ids: Option<Vec<i32>>,
    pub user_id: Option<i32>,
}

impl NewComparison {
    pub fn into_model(self, id: i32, created_at: DateTimeUtc) -> Model {
        Model {
            id,
            name: self.name,
            college_ids: CollegeIds(self.college_ids.unwrap_or_default()),
            user_id: self.user_id,
            created_at,
        }
    }

    pub fn into_active_model(self, created_at: DateTimeUtc) -> ActiveModel {
        let m = self.into_model(0, created_at);
        ActiveModel {
            id: NotSet,
            name: Set(m.name),
            college_ids: Set(m.college_ids),
            user_id: Set(m.user_id),
            created_at: Set(m.created_at),
        }
    }
}
