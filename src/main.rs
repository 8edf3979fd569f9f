use clap::Parser;
use lunar_birthday_notify::utils::logger::{self, LogFormat};
use lunar_birthday_notify::{CliConfig, ReminderEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    let config = cli.resolve();
    if config.token.is_empty() && !cli.dry_run {
        tracing::info!("No notification token configured, the report will not be sent");
    }

    // 任何失敗都只記錄，結束碼固定為 0
    let engine = match ReminderEngine::from_config(config) {
        Ok(engine) => engine.with_dry_run(cli.dry_run),
        Err(e) => {
            tracing::error!("❌ Failed to build notifier: {}", e);
            return;
        }
    };

    if let Err(e) = engine.run().await {
        tracing::error!("❌ Birthday reminder failed: {}", e);
    }
}
