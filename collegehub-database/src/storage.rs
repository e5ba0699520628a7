use async_trait::async_trait;
use sea_orm::DbErr;

use crate::models::{
    College, Comparison, Course, Exam, NewCollege, NewComparison, NewCourse, NewExam, NewReview,
    NewUser, Review, User,
};

/**
 * The entity store contract shared by every backend
 *
 * Records are append-only: each `create_*` assigns the next identifier of
 * its entity and fills in defaults, and nothing is ever updated or deleted.
 * Lookups by id return `None` for unknown ids. Listings are in insertion
 * (identifier) order.
 */
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_college(&self, college: NewCollege) -> Result<College, DbErr>;
    async fn get_college(&self, id: i32) -> Result<Option<College>, DbErr>;
    async fn list_colleges(&self) -> Result<Vec<College>, DbErr>;

    async fn create_course(&self, course: NewCourse) -> Result<Course, DbErr>;
    async fn get_course(&self, id: i32) -> Result<Option<Course>, DbErr>;
    async fn list_courses(&self) -> Result<Vec<Course>, DbErr>;
    async fn courses_by_college(&self, college_id: i32) -> Result<Vec<Course>, DbErr>;

    async fn create_exam(&self, exam: NewExam) -> Result<Exam, DbErr>;
    async fn get_exam(&self, id: i32) -> Result<Option<Exam>, DbErr>;
    async fn list_exams(&self) -> Result<Vec<Exam>, DbErr>;

    async fn create_review(&self, review: NewReview) -> Result<Review, DbErr>;
    async fn reviews_by_college(&self, college_id: i32) -> Result<Vec<Review>, DbErr>;

    async fn create_comparison(&self, comparison: NewComparison) -> Result<Comparison, DbErr>;
    async fn get_comparison(&self, id: i32) -> Result<Option<Comparison>, DbErr>;

    async fn create_user(&self, user: NewUser) -> Result<User, DbErr>;
    async fn get_user(&self, id: i32) -> Result<Option<User>, DbErr>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DbErr>;
}
