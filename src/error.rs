use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failures of the employee directory and attendance ledger.
///
/// Everything except `Storage` is a caller mistake and is answered with a
/// 4xx carrying the display text as `detail`.
#[derive(Debug, Error)]
pub enum HrmsError {
    #[error("Employee ID '{0}' already exists")]
    DuplicateIdentifier(String),

    #[error("Employee '{0}' not found")]
    NotFound(String),

    #[error("Employee '{0}' does not exist")]
    UnknownEmployee(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Attendance already marked for {emp_id} on {date}")]
    AttendanceAlreadyMarked { emp_id: String, date: NaiveDate },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type HrmsResult<T> = Result<T, HrmsError>;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({ "detail": "Employee ID 'EMP001' already exists" }))]
pub struct ErrorBody {
    pub detail: String,
}

impl ResponseError for HrmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            HrmsError::DuplicateIdentifier(_)
            | HrmsError::UnknownEmployee(_)
            | HrmsError::InvalidInput(_)
            | HrmsError::AttendanceAlreadyMarked { .. } => StatusCode::BAD_REQUEST,
            HrmsError::NotFound(_) => StatusCode::NOT_FOUND,
            HrmsError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            HrmsError::Storage(e) => {
                tracing::error!(error = %e, "Storage failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}
