//! Book resource service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{parse_object_id, Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book
    pub async fn create(&self, payload: CreateBook) -> AppResult<Book> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.books.insert(payload).await
    }

    /// List every book
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.find_all().await
    }

    /// Apply a partial update to a book
    pub async fn update(&self, id: &str, payload: UpdateBook) -> AppResult<Book> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let id = parse_object_id(id)?;
        self.repository
            .books
            .update(id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book; loans referencing it are left untouched
    pub async fn delete(&self, id: &str) -> AppResult<Book> {
        let id = parse_object_id(id)?;
        self.repository
            .books
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }
}
