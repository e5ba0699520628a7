use collegehub_database::models::Exam;
use collegehub_database::Storage;

use crate::error::{CollegeHubError, Result};

pub async fn list_exams(storage: &dyn Storage) -> Result<Vec<Exam>> {
    Ok(storage.list_exams().await?)
}

/**
 * Get an exam by its identifier
 *
 * # Arguments
 * @param storage: &dyn Storage - The entity store
 * @param id: i32 - The exam identifier
 *
 * # Returns
 * @return Result<Exam> - The exam, or not found
 */
pub async fn get_exam(storage: &dyn Storage, id: i32) -> Result<Exam> {
    storage
        .get_exam(id)
        .await?
        .ok_or_else(|| CollegeHubError::NotFound("Exam not found".to_string()))
}
