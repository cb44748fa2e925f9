//! Loan resource service, including reference expansion
//!
//! Listing is an application-level join: fetch the loans, batch-fetch the
//! referenced books and students with one `$in` query per collection, then
//! assemble the expanded view in memory.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        loan::{CreateLoan, Loan, LoanDetails, NewLoan, UpdateLoan},
        parse_object_id,
        student::Student,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new loan. The referenced book and student are not checked
    /// for existence; a dangling reference shows up as null on listing.
    pub async fn create(&self, payload: CreateLoan) -> AppResult<Loan> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let loan = NewLoan::try_from(payload)?;
        self.repository.loans.insert(loan).await
    }

    /// List every loan with its book and student references expanded
    pub async fn list(&self) -> AppResult<Vec<LoanDetails>> {
        let loans = self.repository.loans.find_all().await?;
        if loans.is_empty() {
            return Ok(Vec::new());
        }

        let book_ids: Vec<ObjectId> = loans.iter().map(|loan| loan.book_id).collect();
        let student_ids: Vec<ObjectId> = loans.iter().map(|loan| loan.student_id).collect();

        let books = self.repository.books.find_by_ids(&book_ids).await?;
        let students = self.repository.students.find_by_ids(&student_ids).await?;

        let books: HashMap<ObjectId, Book> = books.into_iter().map(|b| (b.id, b)).collect();
        let students: HashMap<ObjectId, Student> =
            students.into_iter().map(|s| (s.id, s)).collect();

        Ok(expand_loans(loans, &books, &students))
    }

    /// Apply a partial update to a loan; references are re-parsed but not
    /// re-validated for existence
    pub async fn update(&self, id: &str, payload: UpdateLoan) -> AppResult<Loan> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let id = parse_object_id(id)?;
        let update = payload.into_update_document()?;
        self.repository
            .loans
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))
    }

    /// Delete a loan
    pub async fn delete(&self, id: &str) -> AppResult<Loan> {
        let id = parse_object_id(id)?;
        self.repository
            .loans
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))
    }
}

/// Join loans against the fetched book and student records. A reference
/// whose target was deleted expands to None.
fn expand_loans(
    loans: Vec<Loan>,
    books: &HashMap<ObjectId, Book>,
    students: &HashMap<ObjectId, Student>,
) -> Vec<LoanDetails> {
    loans
        .into_iter()
        .map(|loan| LoanDetails {
            id: loan.id,
            book: books.get(&loan.book_id).cloned(),
            student: students.get(&loan.student_id).cloned(),
            loan_date: loan.loan_date,
            return_date: loan.return_date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(id: ObjectId) -> Book {
        Book {
            id,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            genre: "SciFi".to_string(),
        }
    }

    fn sample_student(id: ObjectId) -> Student {
        Student {
            id,
            name: "Ana".to_string(),
            enrollment_id: "123".to_string(),
            course: "CS".to_string(),
            year: 2,
        }
    }

    fn sample_loan(book_id: ObjectId, student_id: ObjectId) -> Loan {
        Loan {
            id: ObjectId::new(),
            book_id,
            student_id,
            loan_date: "2024-01-01".to_string(),
            return_date: None,
        }
    }

    #[test]
    fn test_expand_resolves_references() {
        let book_id = ObjectId::new();
        let student_id = ObjectId::new();

        let books = HashMap::from([(book_id, sample_book(book_id))]);
        let students = HashMap::from([(student_id, sample_student(student_id))]);
        let loans = vec![sample_loan(book_id, student_id)];

        let details = expand_loans(loans, &books, &students);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].book.as_ref().unwrap().title, "Dune");
        assert_eq!(details[0].student.as_ref().unwrap().name, "Ana");
        assert_eq!(details[0].loan_date, "2024-01-01");
    }

    #[test]
    fn test_expand_tolerates_dangling_book() {
        let student_id = ObjectId::new();

        let books = HashMap::new();
        let students = HashMap::from([(student_id, sample_student(student_id))]);
        let loans = vec![sample_loan(ObjectId::new(), student_id)];

        let details = expand_loans(loans, &books, &students);
        assert_eq!(details.len(), 1);
        assert!(details[0].book.is_none());
        assert!(details[0].student.is_some());
    }

    #[test]
    fn test_expand_preserves_loan_order() {
        let book_id = ObjectId::new();
        let student_id = ObjectId::new();
        let books = HashMap::from([(book_id, sample_book(book_id))]);
        let students = HashMap::from([(student_id, sample_student(student_id))]);

        let first = sample_loan(book_id, student_id);
        let second = sample_loan(book_id, student_id);
        let ids = vec![first.id, second.id];

        let details = expand_loans(vec![first, second], &books, &students);
        let expanded_ids: Vec<ObjectId> = details.iter().map(|d| d.id).collect();
        assert_eq!(expanded_ids, ids);
    }
}
