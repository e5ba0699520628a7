use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

use crate::models::reviews::{Column, Entity as Review, Model as ReviewModel, NewReview};

/**
 * Get the reviews written about a college, in insertion order
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 * @param college_id: i32 - The reviewed college
 *
 * # Returns
 * @return Result<Vec<ReviewModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_reviews_by_college(
    conn: &DatabaseConnection,
    college_id: i32,
) -> Result<Vec<ReviewModel>, DbErr> {
    Review::find()
        .filter(Column::CollegeId.eq(college_id))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

pub async fn create_review(conn: &DatabaseConnection, review: NewReview) -> Result<ReviewModel, DbErr> {
    review.into_active_model(Utc::now()).insert(conn).await
}
