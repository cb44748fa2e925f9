//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "Library Record Management REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Students
        students::list_students,
        students::create_student,
        students::update_student,
        students::delete_student,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::update_loan,
        loans::delete_loan,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Students
            crate::models::student::Student,
            crate::models::student::CreateStudent,
            crate::models::student::UpdateStudent,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::LoanDetails,
            crate::models::loan::CreateLoan,
            crate::models::loan::UpdateLoan,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::MessageResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book record management"),
        (name = "students", description = "Student record management"),
        (name = "loans", description = "Loan record management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
