pub mod health;

use axum::{routing::get, Router};
use mail::{handlers, MailService};

/// Assemble the application router: the mail dispatch endpoint plus the
/// health probe.
pub fn routes(service: MailService) -> Router {
    handlers::router(service).route("/health", get(health::health_check))
}
