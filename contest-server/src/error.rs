//! Registration failures
//!
//! Repository calls fail with `BoxError`; rule rejections carry an
//! `ErrorCode`. Both collapse into `AppError` at the response, where store
//! failures lose their cause and become the generic save failure.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned by [`crate::api::members::register`]
#[derive(Debug)]
pub enum ServiceError {
    /// Store failure; logged, never shown to the client
    Db(BoxError),
    /// Validation or contest rule rejection
    App(AppError),
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ErrorCode> for ServiceError {
    fn from(code: ErrorCode) -> Self {
        ServiceError::App(AppError::new(code))
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Failed to save member");
                AppError::internal()
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
