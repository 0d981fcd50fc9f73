use std::any::Any;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{response::ErrorBody, state::AppState};

/// Detail of an unhandled fault, attached to the generic 500 response.
#[derive(Debug, Clone)]
pub struct InternalFault(pub String);

/// Adds the fault message to 500 bodies when the environment allows it.
pub async fn expose_fault_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.exposes_fault_details() {
        return response;
    }
    match response.extensions().get::<InternalFault>() {
        Some(InternalFault(message)) => (
            response.status(),
            Json(ErrorBody::internal(Some(message.clone()))),
        )
            .into_response(),
        None => response,
    }
}

/// Builds the `CatchPanicLayer` handler; panics become the generic 500 body.
pub fn panic_response(
    expose_details: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |panic: Box<dyn Any + Send + 'static>| {
        let message = if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "handler panicked".to_string()
        };
        tracing::error!(panic = %message, "handler panicked");
        let body = ErrorBody::internal(expose_details.then_some(message));
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
