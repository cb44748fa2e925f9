//! Repository layer for datastore operations

pub mod books;
pub mod loans;
pub mod students;

use mongodb::Database;

use crate::error::AppResult;

/// Main repository struct holding per-collection handles
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub students: students::StudentsRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository over the given database handle
    pub fn new(db: &Database) -> Self {
        Self {
            books: books::BooksRepository::new(db),
            students: students::StudentsRepository::new(db),
            loans: loans::LoansRepository::new(db),
        }
    }

    /// Create the indexes the service relies on; run once at startup
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.students.ensure_indexes().await
    }
}
