use thiserror::Error;

use crate::modules::dashboard::adapters::outbound::backend_api::BackendError;
use crate::modules::dashboard::core::decide::ValidationError;
use crate::modules::dashboard::core::filter::UnknownFilter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("session expired")]
    SessionExpired,

    #[error("missing or malformed bearer token")]
    MissingToken,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidFilter(#[from] UnknownFilter),

    #[error(transparent)]
    Backend(BackendError),
}

impl From<BackendError> for ApplicationError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::SessionExpired => ApplicationError::SessionExpired,
            other => ApplicationError::Backend(other),
        }
    }
}

impl ApplicationError {
    /// Stable machine readable code, shared by the HTTP body and the GraphQL extension.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::SessionExpired | ApplicationError::MissingToken => "session_expired",
            ApplicationError::Validation(_) => "validation_failed",
            ApplicationError::InvalidFilter(_) => "invalid_filter",
            ApplicationError::Backend(BackendError::Forbidden(_)) => "forbidden",
            ApplicationError::Backend(BackendError::NotFound(_)) => "not_found",
            ApplicationError::Backend(_) => "backend_unavailable",
        }
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BackendError::SessionExpired, ApplicationError::SessionExpired)]
    #[case(
        BackendError::Transport("refused".into()),
        ApplicationError::Backend(BackendError::Transport("refused".into()))
    )]
    fn it_should_lift_backend_errors(#[case] error: BackendError, #[case] expected: ApplicationError) {
        assert_eq!(ApplicationError::from(error), expected);
    }

    #[rstest]
    #[case(ApplicationError::MissingToken, "session_expired")]
    #[case(ApplicationError::Validation(ValidationError::MissingReason), "validation_failed")]
    #[case(ApplicationError::InvalidFilter(UnknownFilter("soon".into())), "invalid_filter")]
    #[case(ApplicationError::Backend(BackendError::Forbidden("no".into())), "forbidden")]
    #[case(ApplicationError::Backend(BackendError::NotFound("quote 3".into())), "not_found")]
    #[case(
        ApplicationError::Backend(BackendError::Status { status: 500, message: "boom".into() }),
        "backend_unavailable"
    )]
    fn it_should_expose_a_stable_code(#[case] error: ApplicationError, #[case] code: &str) {
        assert_eq!(error.code(), code);
    }
}
