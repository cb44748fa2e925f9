//! Student endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    models::student::{CreateStudent, Student, UpdateStudent},
};

use super::AppJson;

/// Create a new student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Invalid input or duplicate matricula", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = state.services.students.create(payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "List of students", body = Vec<Student>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_students(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.list().await?;
    Ok(Json(students))
}

/// Update an existing student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(
        ("id" = String, Path, description = "Student identifier")
    ),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Student not found", body = MessageResponse)
    )
)]
pub async fn update_student(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.update(&id, payload).await?;
    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(
        ("id" = String, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse)
    )
)]
pub async fn delete_student(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.students.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}
