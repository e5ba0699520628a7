use chrono::Utc;
use sea_orm::{entity::*, DatabaseConnection, DbErr};

use crate::models::comparisons::{Entity as Comparison, Model as ComparisonModel, NewComparison};

pub async fn get_comparison(
    conn: &DatabaseConnection,
    id: i32,
) -> Result<Option<ComparisonModel>, DbErr> {
    Comparison::find_by_id(id).one(conn).await
}

/**
 * Store a named comparison. The referenced colleges are stored as given.
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 * @param comparison: NewComparison - The comparison fields
 *
 * # Returns
 * @return Result<ComparisonModel, sea_orm::DbErr> - The stored comparison
 */
pub async fn create_comparison(
    conn: &DatabaseConnection,
    comparison: NewComparison,
) -> Result<ComparisonModel, DbErr> {
    comparison.into_active_model(Utc::now()).insert(conn).await
}
