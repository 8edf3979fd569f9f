use crate::adapters::notifier::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::config::toml_config::TomlConfig;
use crate::config::{parse_person_list, ReminderConfig};
use crate::core::formatter::DEFAULT_TITLE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "lunar-birthday-notify")]
#[command(about = "Lunar birthday countdown pushed to a Server酱 webhook")]
pub struct CliConfig {
    /// JSON array of {"name", "birth"} records
    #[arg(long, env = "BIRTHS", default_value = "[]", hide_env_values = true)]
    pub births: String,

    /// Notification token; empty skips sending
    #[arg(long, env = "NOTIFY", default_value = "", hide_env_values = true)]
    pub token: String,

    #[arg(long, env = "NOTIFY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// TOML configuration file; its values take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn to_reminder_config(&self) -> ReminderConfig {
        ReminderConfig::new(parse_person_list(&self.births), self.token.clone())
            .with_base_url(self.base_url.clone())
            .with_title(self.title.clone())
            .with_timeout_seconds(self.timeout_seconds)
    }

    /// 旗標/環境變數，再疊上設定檔；設定檔讀不到或欄位不合法都只記錄警告
    pub fn resolve(&self) -> ReminderConfig {
        let mut config = self.to_reminder_config();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(file_config) => config = file_config.apply_to(config),
                Err(e) => tracing::warn!(
                    "⚠️ Ignoring config file '{}': {}",
                    path.display(),
                    e
                ),
            }
        }

        config.sanitized()
    }
}
