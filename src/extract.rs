use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` whose rejections surface as `400` validation errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
