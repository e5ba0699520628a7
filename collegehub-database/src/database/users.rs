use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

use crate::models::users::{Column, Entity as User, Model as UserModel, NewUser};

pub async fn get_user(conn: &DatabaseConnection, id: i32) -> Result<Option<UserModel>, DbErr> {
    User::find_by_id(id).one(conn).await
}

/**
 * Get a user by username
 *
 * # Arguments
 * @param conn: &DatabaseConnection - The database connection
 * @param username: &str - The username to look for
 *
 * # Returns
 * @return Result<Option<UserModel>, sea_orm::DbErr> - The user, if one exists
 */
pub async fn get_user_by_username(
    conn: &DatabaseConnection,
    username: &str,
) -> Result<Option<UserModel>, DbErr> {
    User::find().filter(Column::Username.eq(username)).one(conn).await
}

pub async fn create_user(conn: &DatabaseConnection, user: NewUser) -> Result<UserModel, DbErr> {
    user.into_active_model(Utc::now()).insert(conn).await
}
