use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

use crate::models::courses::{Column, Entity as Course, Model as CourseModel, NewCourse};

/**
 * Get all courses from the database, in insertion order
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 *
 * # Returns
 * @return Result<Vec<CourseModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_courses(conn: &DatabaseConnection) -> Result<Vec<CourseModel>, DbErr> {
    Course::find().order_by_asc(Column::Id).all(conn).await
}

pub async fn get_course(conn: &DatabaseConnection, id: i32) -> Result<Option<CourseModel>, DbErr> {
    Course::find_by_id(id).one(conn).await
}

/**
 * Get the courses offered by a college
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 * @param college_id: i32 - The owning college
 *
 * # Returns
 * @return Result<Vec<CourseModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_courses_by_college(
    conn: &DatabaseConnection,
    college_id: i32,
) -> Result<Vec<CourseModel>, DbErr> {
    Course::find()
        .filter(Column::CollegeId.eq(college_id))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

pub async fn create_course(conn: &DatabaseConnection, course: NewCourse) -> Result<CourseModel, DbErr> {
    course.into_active_model(Utc::now()).insert(conn).await
}
