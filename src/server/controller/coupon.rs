use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        coupon::{CouponCreateDto, CouponDto, CouponUpdateDto},
    },
    server::{error::AppError, service::coupon::CouponService, state::AppState},
};

/// Tag for grouping coupon endpoints in OpenAPI documentation
pub static COUPON_TAG: &str = "coupon";

/// Get all coupons.
///
/// Returns every stored coupon in the store's natural order.
///
/// # Arguments
/// - `state` - Application state containing the coupon store
///
/// # Returns
/// - `200 OK` - Envelope with the list of coupons
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/coupon",
    tag = COUPON_TAG,
    responses(
        (status = 200, description = "Successfully retrieved coupons", body = ApiResponse<Vec<CouponDto>>),
        (status = 500, description = "Internal server error", body = ApiResponse<CouponDto>)
    ),
)]
pub async fn get_coupons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("getting all coupons");

    let repo = state.store.repository();
    let service = CouponService::new(repo.as_ref());

    let coupons = service.get_all().await?;
    let dtos: Vec<CouponDto> = coupons.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// Get a specific coupon by ID.
///
/// An unknown ID is not an error here: the envelope is successful with a null result.
///
/// # Arguments
/// - `state` - Application state containing the coupon store
/// - `id` - Coupon ID to fetch
///
/// # Returns
/// - `200 OK` - Envelope with the coupon, or a null result when none matches
/// - `400 Bad Request` - The ID is not an integer
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/coupon/{id}",
    tag = COUPON_TAG,
    params(
        ("id" = i32, Path, description = "Coupon ID")
    ),
    responses(
        (status = 200, description = "Coupon or null result", body = ApiResponse<CouponDto>),
        (status = 400, description = "Invalid coupon ID", body = ApiResponse<CouponDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<CouponDto>)
    ),
)]
pub async fn get_coupon_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let repo = state.store.repository();
    let service = CouponService::new(repo.as_ref());

    let response = match service.get_by_id(id).await? {
        Some(coupon) => ApiResponse::success(coupon.into_dto()),
        None => ApiResponse::empty(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Create a new coupon.
///
/// # Arguments
/// - `state` - Application state containing the coupon store and validators
/// - `payload` - Coupon name, percent and active flag
///
/// # Returns
/// - `200 OK` - Envelope with the created coupon and its assigned ID
/// - `400 Bad Request` - Malformed body, failed validation or duplicate name
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/api/coupon",
    tag = COUPON_TAG,
    request_body = CouponCreateDto,
    responses(
        (status = 200, description = "Successfully created coupon", body = ApiResponse<CouponDto>),
        (status = 400, description = "Invalid coupon data or duplicate name", body = ApiResponse<CouponDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<CouponDto>)
    ),
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    payload: Result<Json<CouponCreateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let repo = state.store.repository();
    let service = CouponService::new(repo.as_ref());

    let coupon = service.create(&state.create_validator, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(coupon.into_dto()))))
}

/// Update an existing coupon.
///
/// Replaces name, percent and active flag of the coupon identified by the body's ID.
///
/// # Arguments
/// - `state` - Application state containing the coupon store and validators
/// - `payload` - Coupon ID plus the new name, percent and active flag
///
/// # Returns
/// - `200 OK` - Envelope with the updated coupon
/// - `400 Bad Request` - Malformed body, failed validation, unknown ID or duplicate name
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    put,
    path = "/api/coupon",
    tag = COUPON_TAG,
    request_body = CouponUpdateDto,
    responses(
        (status = 200, description = "Successfully updated coupon", body = ApiResponse<CouponDto>),
        (status = 400, description = "Invalid coupon data, unknown ID or duplicate name", body = ApiResponse<CouponDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<CouponDto>)
    ),
)]
pub async fn update_coupon(
    State(state): State<AppState>,
    payload: Result<Json<CouponUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let repo = state.store.repository();
    let service = CouponService::new(repo.as_ref());

    let coupon = service.update(&state.update_validator, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(coupon.into_dto()))))
}

/// Delete a coupon.
///
/// # Arguments
/// - `state` - Application state containing the coupon store
/// - `id` - Coupon ID to delete
///
/// # Returns
/// - `200 OK` - Envelope with a null result
/// - `400 Bad Request` - Invalid or unknown coupon ID
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    delete,
    path = "/api/coupon/{id}",
    tag = COUPON_TAG,
    params(
        ("id" = i32, Path, description = "Coupon ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted coupon, result is null", body = ApiResponse<CouponDto>),
        (status = 400, description = "Invalid or unknown coupon ID", body = ApiResponse<CouponDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<CouponDto>)
    ),
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let repo = state.store.repository();
    let service = CouponService::new(repo.as_ref());

    service.delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::<()>::empty())))
}
