//! HTTP handlers for mail dispatch.

use crate::error::MailError;
use crate::service::MailService;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

/// Router exposing `POST /send`.
pub fn router(service: MailService) -> Router {
    Router::new()
        .route("/send", post(send_mail))
        .with_state(Arc::new(service))
}

/// Accepts a send request body and dispatches it.
///
/// The body is taken raw: callers are not required to set a JSON content
/// type, and decoding happens inside the dispatch pipeline. Success is a
/// bare 200 with an empty body.
async fn send_mail(
    State(service): State<Arc<MailService>>,
    body: Bytes,
) -> Result<StatusCode, MailError> {
    service.dispatch(&body).await?;
    Ok(StatusCode::OK)
}
