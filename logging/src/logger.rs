use crate::errors::LoggingError;
use configs::AppConfigs;
use tracing::warn;
use tracing_bunyan_formatter::BunyanFormattingLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{
        format::{Format, Pretty},
        Layer,
    },
    layer::SubscriberExt,
};

pub fn setup(cfg: &AppConfigs) -> Result<(), LoggingError> {
    if let Err(err) = LogTracer::init() {
        warn!(
            error = err.to_string(),
            "log tracer already initialized, skipping"
        );
    }

    let level_filter = level_filter(cfg);

    let mut target_filters = Targets::new().with_default(level_filter);
    if !cfg.enable_external_crates_logging {
        target_filters = target_filters
            .with_target("lapin", LevelFilter::WARN)
            .with_target("pinky_swear", LevelFilter::WARN)
            .with_target("mio", LevelFilter::WARN)
            .with_target("polling", LevelFilter::WARN)
            .with_target("log", LevelFilter::WARN);
    }

    let mut fmt_pretty: Option<Layer<_, Pretty, Format<Pretty>>> = None;
    let mut fmt_json = None;

    if cfg.env.is_local() {
        fmt_pretty = Some(Layer::new().pretty());
    } else {
        fmt_json = Some(BunyanFormattingLayer::new(
            cfg.name.to_owned(),
            std::io::stdout,
        ));
    }

    match tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(fmt_json)
            .with(fmt_pretty)
            .with(target_filters),
    ) {
        Err(err) => {
            warn!(error = err.to_string(), "failure to set tracing subscriber");
            Err(LoggingError::InternalError {})
        }
        _ => Ok(()),
    }
}

fn level_filter(cfg: &AppConfigs) -> LevelFilter {
    match cfg.log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}
