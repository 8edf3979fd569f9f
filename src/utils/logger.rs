use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// 排程器 (GitHub Actions、cron) 收集日誌時較易解析
    Json,
}

fn default_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "lunar_birthday_notify=debug,info"
    } else {
        "lunar_birthday_notify=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// `RUST_LOG` 優先於 `verbose`
pub fn init_logger(format: LogFormat, verbose: bool) {
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(default_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
