//! Tracing subscriber setup, driven by `ServiceConfig`.
//!
//! `LOG_LEVEL` holds `EnvFilter` directives (e.g. "debug" or
//! "info,scoring=debug,tower_http=warn"); `LOG_FORMAT=json` switches to
//! structured output. Per-request spans come from tower-http's TraceLayer.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServiceConfig};

const DEFAULT_DIRECTIVES: &str = "info,scoring=debug,levels_backend=debug,tower_http=info,axum=info";

/// Directives from config, or the default set when absent or unparsable.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

pub fn init_tracing(cfg: &ServiceConfig) {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cfg.log_filter.as_deref()))
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match cfg.log_format {
        LogFormat::Json => fmt.json().init(),
        LogFormat::Pretty => fmt.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_directives() {
        assert_eq!(build_filter(None).to_string(), EnvFilter::new(DEFAULT_DIRECTIVES).to_string());
        assert_eq!(
            build_filter(Some("scoring=verbose")).to_string(),
            EnvFilter::new(DEFAULT_DIRECTIVES).to_string()
        );
    }

    #[test]
    fn uses_configured_directives() {
        assert_eq!(build_filter(Some("warn")).to_string(), "warn");
    }
}
