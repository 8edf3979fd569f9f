#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::notifier::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::formatter::DEFAULT_TITLE;
use crate::domain::model::PersonRecord;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// 解析 JSON 陣列 `[{"name": ..., "birth": ...}]`；格式錯誤一律視為空清單
pub fn parse_person_list(raw: &str) -> Vec<PersonRecord> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<PersonRecord>>(raw) {
        Ok(persons) => persons,
        Err(e) => {
            tracing::debug!("Person list is not valid JSON, treating as empty: {}", e);
            Vec::new()
        }
    }
}

/// 執行時注入的設定：人員清單與推送憑證，其餘欄位有預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderConfig {
    pub persons: Vec<PersonRecord>,
    pub token: String,
    pub base_url: String,
    pub title: String,
    pub timeout_seconds: u64,
}

impl ReminderConfig {
    pub fn new(persons: Vec<PersonRecord>, token: impl Into<String>) -> Self {
        Self {
            persons,
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// 不合法的欄位記錄警告後改回預設值，設定問題不會中斷執行
    pub fn sanitized(mut self) -> Self {
        if self.validate().is_ok() {
            return self;
        }
        if let Err(e) = validate_url("base_url", &self.base_url) {
            tracing::warn!("⚠️ {}; using {}", e, DEFAULT_BASE_URL);
            self.base_url = DEFAULT_BASE_URL.to_string();
        }
        if let Err(e) = validate_non_empty_string("title", &self.title) {
            tracing::warn!("⚠️ {}; using {}", e, DEFAULT_TITLE);
            self.title = DEFAULT_TITLE.to_string();
        }
        if let Err(e) = validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS) {
            tracing::warn!("⚠️ {}; using {}", e, DEFAULT_TIMEOUT_SECONDS);
            self.timeout_seconds = DEFAULT_TIMEOUT_SECONDS;
        }
        self
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self::new(Vec::new(), "")
    }
}

impl ConfigProvider for ReminderConfig {
    fn persons(&self) -> Vec<PersonRecord> {
        self.persons.clone()
    }

    fn notify_token(&self) -> &str {
        &self.token
    }

    fn notify_base_url(&self) -> &str {
        &self.base_url
    }

    fn notify_title(&self) -> &str {
        &self.title
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for ReminderConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("title", &self.title)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
