use std::sync::Once;

/// Logger setup for binaries and tests.
///
/// `env_filter` uses the `env_logger` directive syntax, for example
/// `"easel_engine=debug"` or `"easel_engine::controller=trace,warn"`.
/// When it is `None`, `RUST_LOG` is read, then `info` is assumed.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Per-frame trace output is dense; timestamps are usually noise there.
    pub timestamps: bool,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        // Another logger (a test harness, an embedding app) may already be set.
        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(e) => eprintln!("easel: logger not installed: {e}"),
        }
    });
}
