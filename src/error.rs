use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use musicaholic_booking::BookingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: String,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_display = self.to_string();
        let (status_code, error_title, error_message) = match self {
            AppError::Booking(BookingError::ConcurrentSubmission) => (
                StatusCode::CONFLICT,
                "Submission In Progress".to_string(),
                "A booking submission is already in progress. Please wait for it to finish."
                    .to_string(),
            ),
            AppError::Booking(BookingError::AlreadySubmitted) => (
                StatusCode::CONFLICT,
                "Already Submitted".to_string(),
                "This inquiry was already sent. Use the form again to send another one."
                    .to_string(),
            ),
            AppError::Booking(BookingError::SubmissionFailed(reason)) => {
                tracing::error!("Booking hand-off failed: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    "Submission Failed".to_string(),
                    "We could not open WhatsApp with your inquiry. Your details are kept; please try again.".to_string(),
                )
            }
            AppError::Booking(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error".to_string(),
                err.to_string(),
            ),
            AppError::Render(err) => {
                tracing::error!("Failed to render template: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:?}", e);
                (status_code, error_display).into_response()
            }
        }
    }
}
