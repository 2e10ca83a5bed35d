mod api;
mod config;
mod server;
mod telemetry;

use crate::config::{Config, TransportSettings};
use mail::{HttpApiTransport, MailService, MailTransport, SmtpTransport, TemplateEngine};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::install_color_eyre()?;

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.environment);

    info!("Starting smailer");

    let templates = TemplateEngine::new(config.templates_dir.clone());
    let transport: Arc<dyn MailTransport> = match &config.transport {
        TransportSettings::Api { token } => Arc::new(HttpApiTransport::new(token.clone())),
        TransportSettings::Smtp(smtp) => Arc::new(SmtpTransport::new(smtp)?),
    };

    info!(transport = transport.name(), "Outbound transport configured");

    let service = MailService::new(templates, transport);
    let app = api::routes(service);

    server::serve(app, &config.server).await?;

    Ok(())
}
