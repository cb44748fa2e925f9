//! API handlers for the Biblioteca REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod students;

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON extractor that reports body rejections through [`AppError`], so a
/// missing or mistyped field surfaces as a 400 carrying the parser's message
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
