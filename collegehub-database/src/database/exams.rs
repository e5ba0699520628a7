use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

use crate::models::exams::{Column, Entity as Exam, Model as ExamModel, NewExam};

/**
 * Get all exams from the database, in insertion order
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 *
 * # Returns
 * @return Result<Vec<ExamModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_exams(conn: &DatabaseConnection) -> Result<Vec<ExamModel>, DbErr> {
    Exam::find().order_by_asc(Column::Id).all(conn).await
}

pub async fn get_exam(conn: &DatabaseConnection, id: i32) -> Result<Option<ExamModel>, DbErr> {
    Exam::find_by_id(id).one(conn).await
}

pub async fn create_exam(conn: &DatabaseConnection, exam: NewExam) -> Result<ExamModel, DbErr> {
    exam.into_active_model(Utc::now()).insert(conn).await
}
