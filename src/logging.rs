use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, LogFormat, Settings};

fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "theater_movies=debug,tower_http=debug,sqlx=warn,info",
        Environment::Staging => "theater_movies=debug,tower_http=info,sqlx=warn,info",
        Environment::Prod => "theater_movies=info,tower_http=info,sqlx=error,warn",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the per-environment
/// directives; `LOG_FORMAT` picks the output shape.
pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&settings.env)));

    // Source locations only help while developing
    let with_location = settings.env.is_dev();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(with_location)
        .with_line_number(with_location);

    let registry = tracing_subscriber::registry().with(filter);
    match settings.log_format {
        LogFormat::Json => registry.with(fmt_layer.json().flatten_event(true)).init(),
        LogFormat::Compact => registry.with(fmt_layer.compact()).init(),
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).init(),
    }

    tracing::info!(
        env = ?settings.env,
        format = ?settings.log_format,
        "Logging initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_environment_has_parseable_directives() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            assert!(default_directives(&env).parse::<EnvFilter>().is_ok());
        }
    }
}
