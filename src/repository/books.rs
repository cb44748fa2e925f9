//! Books repository for datastore operations

use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection, Database,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<Book>,
}

impl BooksRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("books"),
        }
    }

    /// Insert a new book and return it with its assigned identifier
    pub async fn insert(&self, book: CreateBook) -> AppResult<Book> {
        let result = self
            .collection
            .clone_with_type::<CreateBook>()
            .insert_one(&book, None)
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("datastore returned a non-ObjectId key".to_string()))?;

        Ok(Book {
            id,
            title: book.title,
            author: book.author,
            year: book.year,
            genre: book.genre,
        })
    }

    /// Fetch every book, datastore-native order
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let cursor = self.collection.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch the books whose identifiers appear in `ids`
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Book>> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply the supplied fields to a book, returning the updated record,
    /// or None when no book has this identifier
    pub async fn update(&self, id: ObjectId, fields: UpdateBook) -> AppResult<Option<Book>> {
        let update = bson::to_document(&fields)?;
        if update.is_empty() {
            // The server rejects an empty $set; degrade to a read
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

    /// Remove a book, returning the deleted record when it existed.
    /// Loans referencing the book are deliberately left untouched.
    pub async fn delete(&self, id: ObjectId) -> AppResult<Option<Book>> {
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }
}
