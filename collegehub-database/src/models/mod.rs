pub mod colleges;
pub mod comparisons;
pub mod courses;
pub mod exams;
pub mod reviews;
pub mod users;

pub use colleges::{FeesPeriod, Model as College, NewCollege};
pub use comparisons::{CollegeIds, Model as Comparison, NewComparison};
pub use courses::{Model as Course, NewCourse};
pub use exams::{Model as Exam, NewExam};
pub use reviews::{Model as Review, NewReview};
pub use users::{Model as User, NewUser};
