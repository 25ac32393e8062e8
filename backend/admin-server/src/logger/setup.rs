//! Setup logging subsystem.
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config;

/// Crates of this workspace, logged at the configured level rather than the default one.
const WORKSPACE_MEMBERS: [&str; 6] = [
    "admin_server",
    "domain_types",
    "interfaces",
    "shared_metrics",
    "ucs_common_enums",
    "ucs_common_utils",
];

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to install the global tracing subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Setup logging sub-system specifying the logging configuration, service (binary) name, and a
/// list of external crates for which a more verbose logging must be enabled. All crates within the
/// current cargo workspace are automatically considered for verbose logging.
pub fn setup(
    config: &config::Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> Result<TelemetryGuard, LoggerError> {
    let mut guards = Vec::new();

    let console_layer = if config.console.enabled {
        let level = config.console.level.into_level();
        let console_filter_directive = config
            .console
            .filtering_directive
            .clone()
            .unwrap_or_else(|| {
                get_envfilter_directive(tracing::Level::WARN, level, crates_to_filter.as_ref())
            });
        let console_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(console_filter_directive);

        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.console.log_format {
            config::LogFormat::Default => fmt::layer().with_writer(writer).with_target(true).boxed(),
            config::LogFormat::Json => {
                // Disable color or emphasis related ANSI escape codes for JSON formats
                error_stack::Report::set_color_mode(error_stack::fmt::ColorMode::None);

                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(writer)
                    .boxed()
            }
        };

        Some(layer.with_filter(console_filter))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    tracing::info!(
        service_name,
        build_version = crate::version!(),
        "Logging subsystem initialized"
    );

    // Returning the TelemetryGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

fn get_envfilter_directive(
    default_log_level: tracing::Level,
    filter_log_level: tracing::Level,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> String {
    let mut explicitly_handled_targets = WORKSPACE_MEMBERS.to_vec();
    explicitly_handled_targets.extend(crates_to_filter.as_ref());

    // +1 for the default log level added as a directive
    let num_directives = explicitly_handled_targets.len() + 1;

    explicitly_handled_targets
        .into_iter()
        .map(|crate_name| crate_name.replace('-', "_"))
        .zip(std::iter::repeat(filter_log_level))
        .fold(
            {
                let mut directives = Vec::with_capacity(num_directives);
                directives.push(default_log_level.to_string());
                directives
            },
            |mut directives, (target, level)| {
                directives.push(format!("{target}={level}"));
                directives
            },
        )
        .join(",")
}
