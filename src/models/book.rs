//! Book model and request types

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record as stored in the `books` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Datastore-assigned identifier, rendered as a hex string in JSON
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

/// Create book request, all fields required
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub year: i32,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
}

/// Partial book update; only supplied fields are applied
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "author must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}
