//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, MessageResponse},
    models::book::{Book, CreateBook, UpdateBook},
};

use super::AppJson;

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(&id, payload).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
