//! Student resource service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{parse_object_id, CreateStudent, Student, UpdateStudent},
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new student. A duplicate enrollment number is rejected by
    /// the datastore's unique index and surfaced as a client error.
    pub async fn create(&self, payload: CreateStudent) -> AppResult<Student> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.students.insert(payload).await
    }

    /// List every student
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        self.repository.students.find_all().await
    }

    /// Apply a partial update to a student
    pub async fn update(&self, id: &str, payload: UpdateStudent) -> AppResult<Student> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let id = parse_object_id(id)?;
        self.repository
            .students
            .update(id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Delete a student
    pub async fn delete(&self, id: &str) -> AppResult<Student> {
        let id = parse_object_id(id)?;
        self.repository
            .students
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
