use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub college_id: i32,
    pub name: String,
    pub course_type: String,
    pub duration: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub eligibility: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::colleges::Entity",
        from = "Column::CollegeId",
        to = "super::colleges::Column::Id"
    )]
    College,
}

impl Related<super::colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCourse {
    pub college_id: i32,
    pub name: String,
    pub course_type: String,
    pub duration: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub eligibility: Option<String>,
}

impl NewCourse {
    pub fn into_model(self, id: i32, created_at: DateTimeUtc) -> Model {
        Model {
            id,
            college_id: self.college_id,
            name: self.name,
            course_type: self.course_type,
            duration: self.duration,
            fees: self.fees,
            seats: self.seats,
            eligibility: self.eligibility,
            created_at,
        }
    }

    pub fn into_active_model(self, created_at: DateTimeUtc) -> ActiveModel {
        let m = self.into_model(0, created_at);
        ActiveModel {
            id: NotSet,
            college_id: Set(m.college_id),
            name: Set(m.name),
            course_type: Set(m.course_type),
            duration: Set(m.duration),
            fees: Set(m.fees),
            seats: Set(m.seats),
            eligibility: Set(m.eligibility),
            created_at: Set(m.created_at),
        }
    }
}
