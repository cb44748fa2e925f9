//! Loan model and request types
//!
//! A loan references one book and one student by identifier. References are
//! stored without an existence check; the listing path expands them and
//! tolerates targets that have since been deleted.

use mongodb::bson::{
    oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string, Document,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{book::Book, parse_object_id, student::Student};
use crate::error::AppResult;

/// Loan record as stored in the `loans` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    #[serde(rename = "idLivro", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub book_id: ObjectId,
    #[serde(rename = "idEstudante", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub student_id: ObjectId,
    #[serde(rename = "dataAluguel")]
    pub loan_date: String,
    /// Absent until the loan is returned
    #[serde(rename = "dataDevolucao", skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

/// Loan with its references expanded to full records at read time
#[derive(Debug, Serialize, ToSchema)]
pub struct LoanDetails {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// Referenced book, null when the target no longer exists
    #[serde(rename = "idLivro")]
    pub book: Option<Book>,
    /// Referenced student, null when the target no longer exists
    #[serde(rename = "idEstudante")]
    pub student: Option<Student>,
    #[serde(rename = "dataAluguel")]
    pub loan_date: String,
    #[serde(rename = "dataDevolucao", skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

/// Create loan request; reference ids arrive as hex strings
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoan {
    #[serde(rename = "idLivro")]
    pub book_id: String,
    #[serde(rename = "idEstudante")]
    pub student_id: String,
    #[validate(length(min = 1, message = "dataAluguel must not be empty"))]
    #[serde(rename = "dataAluguel")]
    pub loan_date: String,
    #[serde(rename = "dataDevolucao")]
    pub return_date: Option<String>,
}

/// Insert payload with parsed references, ready for the datastore
#[derive(Debug, Serialize)]
pub struct NewLoan {
    #[serde(rename = "idLivro")]
    pub book_id: ObjectId,
    #[serde(rename = "idEstudante")]
    pub student_id: ObjectId,
    #[serde(rename = "dataAluguel")]
    pub loan_date: String,
    #[serde(rename = "dataDevolucao", skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

impl TryFrom<CreateLoan> for NewLoan {
    type Error = crate::error::AppError;

    fn try_from(payload: CreateLoan) -> Result<Self, Self::Error> {
        Ok(NewLoan {
            book_id: parse_object_id(&payload.book_id)?,
            student_id: parse_object_id(&payload.student_id)?,
            loan_date: payload.loan_date,
            return_date: payload.return_date,
        })
    }
}

/// Partial loan update; only supplied fields are applied
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLoan {
    #[serde(rename = "idLivro")]
    pub book_id: Option<String>,
    #[serde(rename = "idEstudante")]
    pub student_id: Option<String>,
    #[validate(length(min = 1, message = "dataAluguel must not be empty"))]
    #[serde(rename = "dataAluguel")]
    pub loan_date: Option<String>,
    #[serde(rename = "dataDevolucao")]
    pub return_date: Option<String>,
}

impl UpdateLoan {
    /// Build the `$set` document, parsing any supplied reference ids
    pub fn into_update_document(self) -> AppResult<Document> {
        let mut update = Document::new();
        if let Some(id) = self.book_id {
            update.insert("idLivro", parse_object_id(&id)?);
        }
        if let Some(id) = self.student_id {
            update.insert("idEstudante", parse_object_id(&id)?);
        }
        if let Some(date) = self.loan_date {
            update.insert("dataAluguel", date);
        }
        if let Some(date) = self.return_date {
            update.insert("dataDevolucao", date);
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loan_parses_references() {
        let book_id = ObjectId::new();
        let student_id = ObjectId::new();
        let payload = CreateLoan {
            book_id: book_id.to_hex(),
            student_id: student_id.to_hex(),
            loan_date: "2024-01-01".to_string(),
            return_date: None,
        };

        let loan = NewLoan::try_from(payload).unwrap();
        assert_eq!(loan.book_id, book_id);
        assert_eq!(loan.student_id, student_id);
    }

    #[test]
    fn test_new_loan_rejects_malformed_reference() {
        let payload = CreateLoan {
            book_id: "b1".to_string(),
            student_id: ObjectId::new().to_hex(),
            loan_date: "2024-01-01".to_string(),
            return_date: None,
        };
        assert!(NewLoan::try_from(payload).is_err());
    }

    #[test]
    fn test_update_document_keeps_wire_names() {
        let id = ObjectId::new();
        let update = UpdateLoan {
            book_id: Some(id.to_hex()),
            return_date: Some("2024-02-01".to_string()),
            ..Default::default()
        };

        let doc = update.into_update_document().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_object_id("idLivro").unwrap(), id);
        assert_eq!(doc.get_str("dataDevolucao").unwrap(), "2024-02-01");
    }

    #[test]
    fn test_empty_update_builds_empty_document() {
        let doc = UpdateLoan::default().into_update_document().unwrap();
        assert!(doc.is_empty());
    }
}
