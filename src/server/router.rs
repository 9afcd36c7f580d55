use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::server::{
    controller::coupon::{
        create_coupon, delete_coupon, get_coupon_by_id, get_coupons, update_coupon,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::coupon::get_coupons,
        crate::server::controller::coupon::get_coupon_by_id,
        crate::server::controller::coupon::create_coupon,
        crate::server::controller::coupon::update_coupon,
        crate::server::controller::coupon::delete_coupon,
    ),
    tags(
        (name = "coupon", description = "Coupon management API")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/coupon",
            get(get_coupons).post(create_coupon).put(update_coupon),
        )
        .route(
            "/api/coupon/{id}",
            get(get_coupon_by_id).delete(delete_coupon),
        )
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
