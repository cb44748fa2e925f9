//! Student model and request types
//!
//! Wire field names (`matricula`, `curso`, `ano`) follow the legacy API
//! contract; the Rust fields use their English equivalents.

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Student record as stored in the `students` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Student {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    /// Enrollment number, unique across all students
    #[serde(rename = "matricula")]
    pub enrollment_id: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "ano")]
    pub year: i32,
}

/// Create student request, all fields required
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "matricula must not be empty"))]
    #[serde(rename = "matricula")]
    pub enrollment_id: String,
    #[validate(length(min = 1, message = "curso must not be empty"))]
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "ano")]
    pub year: i32,
}

/// Partial student update; only supplied fields are applied
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStudent {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "matricula must not be empty"))]
    #[serde(rename = "matricula", skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
    #[validate(length(min = 1, message = "curso must not be empty"))]
    #[serde(rename = "curso", skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(rename = "ano", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_wire_names_are_preserved() {
        let student = CreateStudent {
            name: "Ana".to_string(),
            enrollment_id: "123".to_string(),
            course: "CS".to_string(),
            year: 2,
        };
        let doc = bson::to_document(&student).unwrap();
        assert_eq!(doc.get_str("matricula").unwrap(), "123");
        assert_eq!(doc.get_str("curso").unwrap(), "CS");
        assert_eq!(doc.get_i32("ano").unwrap(), 2);
    }

    #[test]
    fn test_update_renames_supplied_fields() {
        let update = UpdateStudent {
            course: Some("Math".to_string()),
            ..Default::default()
        };
        let doc = bson::to_document(&update).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("curso").unwrap(), "Math");
    }
}
