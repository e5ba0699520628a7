use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub college_id: Option<i32>,
    pub student_name: Option<String>,
    pub course: Option<String>,
    pub graduation_year: Option<i32>,
    pub rating: Option<String>,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub likes: i32,
    pub verified: bool,
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
pub struct NewReview {
    pub college_id: Option<i32>,
    pub student_name: Option<String>,
    pub course: Option<String>,
    pub graduation_year: Option<i32>,
    pub rating: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub likes: Option<i32>,
    pub verified: Option<bool>,
}

impl NewReview {
    pub fn into_model(self, id: i32, created_at: DateTimeUtc) -> Model {
        Model {
            id,
            college_id: self.college_id,
            student_name: self.student_name,
            course: self.course,
            graduation_year: self.graduation_year,
            rating: self.rating,
            title: self.title,
            content: self.content,
            likes: self.likes.unwrap_or(0),
            verified: self.verified.unwrap_or(false),
            created_at,
        }
    }

    pub fn into_active_model(self, created_at: DateTimeUtc) -> ActiveModel {
        let m = self.into_model(0, created_at);
        ActiveModel {
            id: NotSet,
            college_id: Set(m.college_id),
            student_name: Set(m.student_name),
            course: Set(m.course),
            graduation_year: Set(m.graduation_year),
            rating: Set(m.rating),
            title: Set(m.title),
            content: Set(m.content),
            likes: Set(m.likes),
            verified: Set(m.verified),
            created_at: Set(m.created_at),
        }
    }
}
