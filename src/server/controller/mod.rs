//! HTTP request handlers.
//!
//! Controllers extract path and body values, map extractor rejections into
//! `AppError::BadRequest`, call the service layer and wrap every result in an
//! `ApiResponse` envelope.

pub mod coupon;

#[cfg(test)]
mod test;
