//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into response envelopes. The `AppError` enum serves as the
//! top-level error type and implements `IntoResponse`, so every failure a handler
//! returns reaches the client as an `ApiResponse` with `isSuccess: false`.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ApiResponse, server::error::config::ConfigError};

/// Message returned when a coupon name collides with an existing coupon.
pub const DUPLICATE_NAME_MESSAGE: &str = "coupon name already exists";

/// Message returned when an update or delete references an unknown identifier.
pub const NOT_FOUND_MESSAGE: &str = "Coupon not exist against given id";

/// Top-level application error type.
///
/// Expected request failures (validation, name conflicts, unknown identifiers,
/// malformed bodies) all map to 400 Bad Request, so a missing coupon is a 400 and never
/// a 404. Infrastructure failures map to 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM, including failed commits.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A field constraint failed. Carries the first failing rule's message.
    #[error("{0}")]
    Validation(String),

    /// The coupon name is already taken by another coupon.
    #[error("{0}")]
    Conflict(String),

    /// The referenced coupon does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request could not be understood, e.g. a malformed JSON body.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn duplicate_name() -> Self {
        Self::Conflict(DUPLICATE_NAME_MESSAGE.to_string())
    }

    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_string())
    }
}

/// Converts application errors into failure envelopes.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `Conflict`, `NotFound` and `BadRequest`
/// - 500 Internal Server Error - For everything else, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg)
            | Self::BadRequest(msg) => failure(StatusCode::BAD_REQUEST, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn failure(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponse::<()>::failure(status, message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" envelope to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
