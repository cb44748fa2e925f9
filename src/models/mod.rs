//! Data models for the Biblioteca record service

pub mod book;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use loan::{CreateLoan, Loan, LoanDetails, NewLoan, UpdateLoan};
pub use student::{CreateStudent, Student, UpdateStudent};

use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, AppResult};

/// Parse an identifier received on the wire into an ObjectId.
/// A malformed value is the client's fault and reported as such.
pub fn parse_object_id(value: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(value)
        .map_err(|_| AppError::Validation(format!("invalid identifier: {}", value)))
}
