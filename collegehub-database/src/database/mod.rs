pub mod colleges;
pub mod comparisons;
pub mod courses;
pub mod exams;
pub mod reviews;
pub mod users;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::models::{
    self, College, Comparison, Course, Exam, NewCollege, NewComparison, NewCourse, NewExam,
    NewReview, NewUser, Review, User,
};
use crate::storage::Storage;

/**
 * Entity store backed by a relational database through SeaORM
 *
 * Works against any URL SeaORM accepts, e.g. `postgres://...` or
 * `sqlite::memory:`.
 */
#[derive(Clone)]
pub struct SqlStorage {
    conn: DatabaseConnection,
}

impl SqlStorage {
    /**
     * Establish a connection to the database
     *
     * # Arguments
     * @param database_url: &str - The connection URL
     *
     * # Returns
     * @return Result<SqlStorage, sea_orm::DbErr> - The connected store
     */
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let conn = Database::connect(database_url).await?;
        log::info!("Connected to {:?} database", conn.get_database_backend());
        Ok(SqlStorage { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /**
     * Create every table that does not exist yet, generated from the entity definitions
     *
     * # Returns
     * @return Result<(), sea_orm::DbErr> - The result of the operation
     */
    pub async fn create_tables(&self) -> Result<(), DbErr> {
        // colleges first, courses and reviews reference it
        create_table(&self.conn, models::colleges::Entity).await?;
        create_table(&self.conn, models::courses::Entity).await?;
        create_table(&self.conn, models::exams::Entity).await?;
        create_table(&self.conn, models::reviews::Entity).await?;
        create_table(&self.conn, models::comparisons::Entity).await?;
        create_table(&self.conn, models::users::Entity).await?;
        Ok(())
    }
}

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    Ok(())
}

#[async_trait]
impl Storage for SqlStorage {
    async fn create_college(&self, college: NewCollege) -> Result<College, DbErr> {
        colleges::create_college(&self.conn, college).await
    }

    async fn get_college(&self, id: i32) -> Result<Option<College>, DbErr> {
        colleges::get_college(&self.conn, id).await
    }

    async fn list_colleges(&self) -> Result<Vec<College>, DbErr> {
        colleges::get_colleges(&self.conn).await
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course, DbErr> {
        courses::create_course(&self.conn, course).await
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>, DbErr> {
        courses::get_course(&self.conn, id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, DbErr> {
        courses::get_courses(&self.conn).await
    }

    async fn courses_by_college(&self, college_id: i32) -> Result<Vec<Course>, DbErr> {
        courses::get_courses_by_college(&self.conn, college_id).await
    }

    async fn create_exam(&self, exam: NewExam) -> Result<Exam, DbErr> {
        exams::create_exam(&self.conn, exam).await
    }

    async fn get_exam(&self, id: i32) -> Result<Option<Exam>, DbErr> {
        exams::get_exam(&self.conn, id).await
    }

    async fn list_exams(&self) -> Result<Vec<Exam>, DbErr> {
        exams::get_exams(&self.conn).await
    }

    async fn create_review(&self, review: NewReview) -> Result<Review, DbErr> {
        reviews::create_review(&self.conn, review).await
    }

    async fn reviews_by_college(&self, college_id: i32) -> Result<Vec<Review>, DbErr> {
        reviews::get_reviews_by_college(&self.conn, college_id).await
    }

    async fn create_comparison(&self, comparison: NewComparison) -> Result<Comparison, DbErr> {
        comparisons::create_comparison(&self.conn, comparison).await
    }

    async fn get_comparison(&self, id: i32) -> Result<Option<Comparison>, DbErr> {
        comparisons::get_comparison(&self.conn, id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DbErr> {
        users::create_user(&self.conn, user).await
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, DbErr> {
        users::get_user(&self.conn, id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        users::get_user_by_username(&self.conn, username).await
    }
}
