// Error handling for the HTTP layer
// Wraps application errors so they render as `{"error": message}` responses

use std::fmt::{Display, Formatter};

use actix_web::{HttpResponse, error::BlockingError, http::StatusCode};
use leadwheel_common::LeadwheelError;
use tracing::error;

use crate::model::response::ErrorResult;

/// Wrapper for application errors returned from handlers
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<LeadwheelError> for AppError {
    fn from(value: LeadwheelError) -> Self {
        AppError {
            inner: value.into(),
        }
    }
}

impl From<BlockingError> for AppError {
    fn from(value: BlockingError) -> Self {
        LeadwheelError::InternalError(value.to_string()).into()
    }
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }

    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.downcast_ref::<LeadwheelError>() {
            Some(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self.inner, "Request failed");
        }
        ErrorResult::http_response(status, self.inner.to_string())
    }
}
