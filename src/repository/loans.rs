//! Loans repository for datastore operations

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection, Database,
};

use crate::{
    error::{AppError, AppResult},
    models::loan::{Loan, NewLoan},
};

#[derive(Clone)]
pub struct LoansRepository {
    collection: Collection<Loan>,
}

impl LoansRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("loans"),
        }
    }

    /// Insert a new loan and return it with its assigned identifier.
    /// The references were parsed upstream but never checked for existence.
    pub async fn insert(&self, loan: NewLoan) -> AppResult<Loan> {
        let result = self
            .collection
            .clone_with_type::<NewLoan>()
            .insert_one(&loan, None)
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("datastore returned a non-ObjectId key".to_string()))?;

        Ok(Loan {
            id,
            book_id: loan.book_id,
            student_id: loan.student_id,
            loan_date: loan.loan_date,
            return_date: loan.return_date,
        })
    }

    /// Fetch every loan, references unexpanded
    pub async fn find_all(&self) -> AppResult<Vec<Loan>> {
        let cursor = self.collection.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply a prebuilt `$set` document to a loan, returning the updated
    /// record, or None when no loan has this identifier
    pub async fn update(&self, id: ObjectId, update: Document) -> AppResult<Option<Loan>> {
        if update.is_empty() {
            return Ok(self.collection.find_one(doc! { "_id": id }, None).await?);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update }, options)
            .await?)
    }

    /// Remove a loan, returning the deleted record when it existed
    pub async fn delete(&self, id: ObjectId) -> AppResult<Option<Loan>> {
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }
}
