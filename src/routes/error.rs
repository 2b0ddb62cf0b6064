use crate::dispatcher::DispatchError;
use crate::domain::ValidationErrors;
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

/// The failure taxonomy of a submission request.
///
/// Validation failures are a normal outcome: they are surfaced to the caller
/// field by field and never logged as server faults. Dispatch and unexpected
/// failures are server faults: the caller only ever sees a generic message
/// while the full error chain goes to the logs.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl actix_web::ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmissionError::Dispatch(_) | SubmissionError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SubmissionError::Validation(errors) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }))
            }
            SubmissionError::Dispatch(_) | SubmissionError::Unexpected(_) => {
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "An error occurred" }))
            }
        }
    }
}
