//! Maps domain errors onto HTTP responses.
//!
//! Status codes follow [`ErrorCode`]. Internal failures are logged in full and
//! replaced by a generic message before they reach the client; store outages
//! keep their fixed message so callers can tell the API is up but the store
//! is not.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The body a client may see for `error`.
fn client_view(error: &Error) -> Cow<'_, Error> {
    if error.code() != ErrorCode::InternalError {
        return Cow::Borrowed(error);
    }
    let mut redacted = Error::internal(REDACTED_MESSAGE);
    if let Some(id) = error.trace_id() {
        redacted = redacted.with_trace_id(id.to_owned());
    }
    Cow::Owned(redacted)
}

fn log_error(error: &Error) {
    match error.code() {
        ErrorCode::InternalError => {
            error!(message = error.message(), trace_id = ?error.trace_id(), "request failed");
        }
        ErrorCode::ServiceUnavailable => {
            warn!(message = error.message(), trace_id = ?error.trace_id(), "document store unavailable");
        }
        ErrorCode::InvalidRequest => {}
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_error(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(client_view(self))
    }
}

/// Extractor failures with a client status stay client errors; anything else
/// is treated as internal.
impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        let status = err.as_response_error().status_code();
        if status.is_client_error() {
            return Self::invalid_request(err.to_string());
        }
        error!(error = %err, %status, "actix error promoted to domain error");
        Self::internal(REDACTED_MESSAGE)
    }
}
