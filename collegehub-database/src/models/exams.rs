use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// An entrance examination. Exams are not linked to colleges; colleges name
/// the exams they accept in their free-text `admission_process`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exams")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub full_name: Option<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub exam_type: String,
    pub conducting_body: Option<String>,
    pub frequency: Option<String>,
    pub application_start_date: Option<Date>,
    pub application_end_date: Option<Date>,
    pub exam_date: Option<Date>,
    pub result_date: Option<Date>,
    pub eligibility: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub syllabus: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub exam_pattern: Option<String>,
    pub total_marks: Option<i32>,
    pub duration: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExam {
    pub name: String,
    pub full_name: Option<String>,
    #[serde(rename = "type")]
    pub exam_type: String,
    pub conducting_body: Option<String>,
    pub frequency: Option<String>,
    pub application_start_date: Option<Date>,
    pub application_end_date: Option<Date>,
    pub exam_date: Option<Date>,
    pub result_date: Option<Date>,
    pub eligibility: Option<String>,
    pub syllabus: Option<String>,
    pub exam_pattern: Option<String>,
    pub total_marks: Option<i32>,
    pub duration: Option<String>,
    pub website: Option<String>,
}

impl NewExam {
    pub fn into_model(self, id: i32, created_at: DateTimeUtc) -> Model {
        Model {
            id,
            name: self.name,
            full_name: self.full_name,
            exam_type: self.exam_type,
            conducting_body: self.conducting_body,
            frequency: self.frequency,
            application_start_date: self.application_start_date,
            application_end_date: self.application_end_date,
            exam_date: self.exam_date,
            result_date: self.result_date,
            eligibility: self.eligibility,
            syllabus: self.syllabus,
            exam_pattern: self.exam_pattern,
            total_marks: self.total_marks,
            duration: self.duration,
            website: self.website,
            created_at,
        }
    }

    pub fn into_active_model(self, created_at: DateTimeUtc) -> ActiveModel {
        let m = self.into_model(0, created_at);
        ActiveModel {
            id: NotSet,
            name: Set(m.name),
            full_name: Set(m.full_name),
            exam_type: Set(m.exam_type),
            conducting_body: Set(m.conducting_body),
            frequency: Set(m.frequency),
            application_start_date: Set(m.application_start_date),
            application_end_date: Set(m.application_end_date),
            exam_date: Set(m.exam_date),
            result_date: Set(m.result_date),
            eligibility: Set(m.eligibility),
            syllabus: Set(m.syllabus),
            exam_pattern: Set(m.exam_pattern),
            total_marks: Set(m.total_marks),
            duration: Set(m.duration),
            website: Set(m.website),
            created_at: Set(m.created_at),
        }
    }
}
