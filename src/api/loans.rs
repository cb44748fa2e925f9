//! Loan endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    models::loan::{CreateLoan, Loan, LoanDetails, UpdateLoan},
};

use super::AppJson;

/// Create a new loan
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state.services.loans.create(payload).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// List all loans with expanded book and student records
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "List of loans, references expanded", body = Vec<LoanDetails>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.list().await?;
    Ok(Json(loans))
}

/// Update an existing loan
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = String, Path, description = "Loan identifier")
    ),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated", body = Loan),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Loan not found", body = MessageResponse)
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateLoan>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.update(&id, payload).await?;
    Ok(Json(loan))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = String, Path, description = "Loan identifier")
    ),
    responses(
        (status = 200, description = "Loan deleted", body = MessageResponse),
        (status = 404, description = "Loan not found", body = MessageResponse)
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Loan deleted successfully".to_string(),
    }))
}
