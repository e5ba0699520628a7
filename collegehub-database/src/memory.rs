use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use tokio::sync::RwLock;

use crate::models::{
    College, Comparison, Course, Exam, NewCollege, NewComparison, NewCourse, NewExam, NewReview,
    NewUser, Review, User,
};
use crate::storage::Storage;

/// One entity's rows plus its identifier counter. Identifiers start at 1 and
/// are never handed out twice.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }
}

struct Tables {
    colleges: Table<College>,
    courses: Table<Course>,
    exams: Table<Exam>,
    reviews: Table<Review>,
    comparisons: Table<Comparison>,
    users: Table<User>,
}

/**
 * Ephemeral, process-local entity store
 *
 * Contents live as long as the value does; build one per process with
 * `MemStorage::new()` and fill it with `seed`.
 */
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage {
            tables: RwLock::new(Tables {
                colleges: Table::new(),
                courses: Table::new(),
                exams: Table::new(),
                reviews: Table::new(),
                comparisons: Table::new(),
                users: Table::new(),
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_college(&self, college: NewCollege) -> Result<College, DbErr> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables
            .colleges
            .insert_with(|id| college.into_model(id, now)))
    }

    async fn get_college(&self, id: i32) -> Result<Option<College>, DbErr> {
        Ok(self.tables.read().await.colleges.get(id))
    }

    async fn list_colleges(&self) -> Result<Vec<College>, DbErr> {
        Ok(self.tables.read().await.colleges.all())
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course, DbErr> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.courses.insert_with(|id| course.into_model(id, now)))
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>, DbErr> {
        Ok(self.tables.read().await.courses.get(id))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, DbErr> {
        Ok(self.tables.read().await.courses.all())
    }

    async fn courses_by_college(&self, college_id: i32) -> Result<Vec<Course>, DbErr> {
        Ok(self
            .tables
            .read()
            .await
            .courses
            .filter(|course| course.college_id == college_id))
    }

    async fn create_exam(&self, exam: NewExam) -> Result<Exam, DbErr> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.exams.insert_with(|id| exam.into_model(id, now)))
    }

    async fn get_exam(&self, id: i32) -> Result<Option<Exam>, DbErr> {
        Ok(self.tables.read().await.exams.get(id))
    }

    async fn list_exams(&self) -> Result<Vec<Exam>, DbErr> {
        Ok(self.tables.read().await.exams.all())
    }

    async fn create_review(&self, review: NewReview) -> Result<Review, DbErr> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.reviews.insert_with(|id| review.into_model(id, now)))
    }

    async fn reviews_by_college(&self, college_id: i32) -> Result<Vec<Review>, DbErr> {
        Ok(self
            .tables
            .read()
            .await
            .reviews
            .filter(|review| review.college_id == Some(college_id)))
    }

    async fn create_comparison(&self, comparison: NewComparison) -> Result<Comparison, DbErr> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables
            .comparisons
            .insert_with(|id| comparison.into_model(id, now)))
    }

    async fn get_comparison(&self, id: i32) -> Result<Option<Comparison>, DbErr> {
        Ok(self.tables.read().await.comparisons.get(id))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DbErr> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        Ok(tables.users.insert_with(|id| user.into_model(id, now)))
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, DbErr> {
        Ok(self.tables.read().await.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .filter(|user| user.username == username)
            .into_iter()
            .next())
    }
}
