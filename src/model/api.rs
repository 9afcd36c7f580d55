use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform envelope wrapping every response body.
///
/// `is_success` is true exactly when `error_messages` is empty. A failed envelope never
/// carries a result. The fields are only reachable through [`ApiResponse::success`],
/// [`ApiResponse::empty`] and [`ApiResponse::failure`] so that coupling cannot be broken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    is_success: bool,
    status_code: u16,
    result: Option<T>,
    error_messages: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope carrying `result`.
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            status_code: StatusCode::OK.as_u16(),
            result: Some(result),
            error_messages: Vec::new(),
        }
    }

    /// 200 envelope with a null result.
    pub fn empty() -> Self {
        Self {
            is_success: true,
            status_code: StatusCode::OK.as_u16(),
            result: None,
            error_messages: Vec::new(),
        }
    }

    /// Failed envelope with a single error message and no result.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            status_code: status.as_u16(),
            result: None,
            error_messages: vec![message.into()],
        }
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }
}
