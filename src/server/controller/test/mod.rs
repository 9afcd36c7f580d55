use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    model::{api::ApiResponse, coupon::CouponDto},
    server::{
        data::coupon::{CouponStore, InMemoryCouponRepository},
        router::router,
        state::AppState,
        validation::CouponRules,
    },
};


fn app(store: CouponStore) -> Router {
    router().with_state(AppState::new(store, CouponRules::default()))
}

fn memory_app() -> Router {
    app(CouponStore::InMemory(InMemoryCouponRepository::seeded()))
}

/// Sends one request through the router and decodes the envelope.
async fn send<T: DeserializeOwned>(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, ApiResponse<T>) {
    let (status, bytes) = send_raw(app, method, uri, body.map(|v| v.to_string())).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn create_body(name: &str, percent: i32) -> Value {
    json!({ "name": name, "percent": percent, "isActive": true })
}

fn update_body(id: i32, name: &str, percent: i32, is_active: bool) -> Value {
    json!({ "id": id, "name": name, "percent": percent, "isActive": is_active })
}

async fn list(app: &Router) -> Vec<CouponDto> {
    let (_, body) = send::<Vec<CouponDto>>(app, Method::GET, "/api/coupon", None).await;
    body.into_result().unwrap()
}
