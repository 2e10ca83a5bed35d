//! Tracing and error-report setup.

use crate::config::Environment;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise production defaults to `info`
/// and development to `debug`. Production emits flattened JSON lines,
/// development a pretty human-readable format.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match environment {
        Environment::Production => EnvFilter::new("info"),
        Environment::Development => EnvFilter::new("debug"),
    });

    match environment {
        Environment::Production => {
            let fmt_layer = fmt::layer().json().flatten_event(true).with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(ErrorLayer::default())
                .with(fmt_layer)
                .try_init()
                .ok();
        }
        Environment::Development => {
            let fmt_layer = fmt::layer().pretty();
            tracing_subscriber::registry()
                .with(filter)
                .with(ErrorLayer::default())
                .with(fmt_layer)
                .try_init()
                .ok();
        }
    }
}

/// Install the color-eyre panic and error report hooks.
pub fn install_color_eyre() -> eyre::Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install()?;
    Ok(())
}
