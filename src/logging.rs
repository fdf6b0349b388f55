use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
fn default_filter(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "paint_estimator=debug,tower_http=debug,info",
        Environment::Staging => "paint_estimator=debug,tower_http=info,info",
        Environment::Prod => "paint_estimator=info,tower_http=warn,warn",
    }
}

pub fn init_logging(env: &Environment) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let registry = tracing_subscriber::registry().with(filter);
    if env.is_prod() {
        // One JSON object per line for the log shipper
        registry.with(fmt_layer.json().flatten_event(true)).init();
    } else {
        registry.with(fmt_layer.pretty()).init();
    }

    tracing::info!(filter = default_filter(env), "Logging initialized for {:?}", env);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            assert!(default_filter(&env).starts_with("paint_estimator="));
            assert!(EnvFilter::try_new(default_filter(&env)).is_ok());
        }
    }
}
