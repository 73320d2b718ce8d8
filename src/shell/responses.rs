// Translation of application errors to transport responses.
//
// Responsibilities
// - Read the caller's bearer token from the request headers.
// - Map `ApplicationError` to an HTTP status with a JSON body `{ error, message }`.
// - Map `ApplicationError` to a GraphQL error carrying a `code` extension.

use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::BearerToken;

pub fn bearer_token(headers: &HeaderMap) -> Result<BearerToken, ApplicationError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(BearerToken::from_authorization)
        .ok_or(ApplicationError::MissingToken)
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        use crate::modules::dashboard::adapters::outbound::backend_api::BackendError;

        match self {
            ApplicationError::SessionExpired | ApplicationError::MissingToken => {
                StatusCode::UNAUTHORIZED
            }
            ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Backend(BackendError::Forbidden(_)) => StatusCode::FORBIDDEN,
            ApplicationError::Backend(BackendError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApplicationError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self, "backend call failed");
        }
        let body = Json(json!({ "error": self.code(), "message": self.to_string() }));
        (status, body).into_response()
    }
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.code());
        })
    }
}

#[cfg(test)]
mod shell_responses_tests {
    use super::*;
    use crate::modules::dashboard::adapters::outbound::backend_api::BackendError;
    use crate::modules::dashboard::core::decide::ValidationError;
    use axum::http::HeaderValue;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Bearer abc"), true)]
    #[case(Some("Token abc"), false)]
    #[case(None, false)]
    fn it_should_read_the_bearer_token(#[case] header: Option<&str>, #[case] present: bool) {
        let mut headers = HeaderMap::new();
        if let Some(value) = header {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        assert_eq!(bearer_token(&headers).is_ok(), present);
    }

    #[rstest]
    #[case(ApplicationError::SessionExpired, StatusCode::UNAUTHORIZED)]
    #[case(ApplicationError::MissingToken, StatusCode::UNAUTHORIZED)]
    #[case(ApplicationError::Validation(ValidationError::NonPositivePrice), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ApplicationError::Backend(BackendError::Forbidden("x".into())), StatusCode::FORBIDDEN)]
    #[case(ApplicationError::Backend(BackendError::NotFound("x".into())), StatusCode::NOT_FOUND)]
    #[case(ApplicationError::Backend(BackendError::Decode("x".into())), StatusCode::BAD_GATEWAY)]
    fn it_should_map_errors_to_status_codes(#[case] error: ApplicationError, #[case] status: StatusCode) {
        assert_eq!(error.status_code(), status);
    }

    #[tokio::test]
    async fn it_should_render_an_expired_session_as_json() {
        let response = ApplicationError::SessionExpired.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "session_expired");
    }

    #[rstest]
    fn it_should_attach_the_code_to_graphql_errors() {
        let error = ApplicationError::MissingToken.extend();
        let extensions = error.extensions.unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("session_expired"))
        );
    }
}
