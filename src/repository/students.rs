//! Students repository for datastore operations

use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

use crate::{
    error::{AppError, AppResult},
    models::student::{CreateStudent, Student, UpdateStudent},
};

#[derive(Clone)]
pub struct StudentsRepository {
    collection: Collection<Student>,
}

impl StudentsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("students"),
        }
    }

    /// Create the unique index on the enrollment number. Duplicate inserts
    /// then fail at write time with an E11000 error.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "matricula": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index, None).await?;
        Ok(())
    }

    /// Insert a new student and return it with its assigned identifier
    pub async fn insert(&self, student: CreateStudent) -> AppResult<Student> {
        let result = self
            .collection
            .clone_with_type::<CreateStudent>()
            .insert_one(&student, None)
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("datastore returned a non-ObjectId key".to_string()))?;

        Ok(Student {
            id,
            name: student.name,
            enrollment_id: student.enrollment_id,
            course: student.course,
            year: student.year,
        })
    }

    /// Fetch every student, datastore-native order
    pub async fn find_all(&self) -> AppResult<Vec<Student>> {
        let cursor = self.collection.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch the students whose identifiers appear in `ids`
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Student>> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply the supplied fields to a student, returning the updated record,
    /// or None when no student has this identifier
    pub async fn update(&self, id: ObjectId, fields: UpdateStudent) -> AppResult<Option<Student>> {
        let update = bson::to_document(&fields)?;
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

    /// Remove a student, returning the deleted record when it existed
    pub async fn delete(&self, id: ObjectId) -> AppResult<Option<Student>> {
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }
}
