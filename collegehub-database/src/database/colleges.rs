use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

use crate::models::colleges::{Column, Entity as College, Model as CollegeModel, NewCollege};

/**
 * Get all colleges from the database, in insertion order
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 *
 * # Returns
 * @return Result<Vec<CollegeModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_colleges(conn: &DatabaseConnection) -> Result<Vec<CollegeModel>, DbErr> {
    College::find().order_by_asc(Column::Id).all(conn).await
}

/**
 * Get a college from the database
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 * @param id: i32 - The college identifier
 *
 * # Returns
 * @return Result<Option<CollegeModel>, sea_orm::DbErr> - The college, if it exists
 */
pub async fn get_college(conn: &DatabaseConnection, id: i32) -> Result<Option<CollegeModel>, DbErr> {
    College::find_by_id(id).one(conn).await
}

/**
 * Insert a college, letting the database assign its identifier
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 * @param college: NewCollege - The college fields
 *
 * # Returns
 * @return Result<CollegeModel, sea_orm::DbErr> - The stored college
 */
pub async fn create_college(
    conn: &DatabaseConnection,
    college: NewCollege,
) -> Result<CollegeModel, DbErr> {
    college.into_active_model(Utc::now()).insert(conn).await
}
