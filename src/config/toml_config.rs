use crate::config::ReminderConfig;
use crate::domain::model::PersonRecord;
use crate::utils::error::{ReminderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub notify: Option<NotifyConfig>,
    #[serde(default, rename = "person")]
    pub persons: Vec<PersonRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub title: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReminderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReminderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 `${NOTIFY}`)，未設定的變數替換為空字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReminderError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::debug!("Environment variable {} not set, substituting empty", var_name);
                String::new()
            })
        });

        Ok(result.to_string())
    }

    /// 檔案中有設定的欄位覆蓋 `base`；檔案列出人員時取代原本的清單
    pub fn apply_to(&self, base: ReminderConfig) -> ReminderConfig {
        let mut config = base;
        if !self.persons.is_empty() {
            config.persons = self.persons.clone();
        }
        if let Some(notify) = &self.notify {
            if let Some(token) = &notify.token {
                config.token = token.clone();
            }
            if let Some(base_url) = &notify.base_url {
                config.base_url = base_url.clone();
            }
            if let Some(title) = &notify.title {
                config.title = title.clone();
            }
            if let Some(timeout_seconds) = notify.timeout_seconds {
                config.timeout_seconds = timeout_seconds;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[notify]
token = "tok123"
timeout_seconds = 5

[[person]]
name = "A"
birth = "1990-5-20"

[[person]]
name = "B"
birth = "1990-4-26"
lunar = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.persons.len(), 2);
        assert!(!config.persons[0].lunar);
        assert!(config.persons[1].lunar);

        let merged = config.apply_to(ReminderConfig::default());
        assert_eq!(merged.token, "tok123");
        assert_eq!(merged.timeout_seconds, 5);
        assert_eq!(merged.title, "开心每一天");
        assert_eq!(merged.persons[0].name, "A");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LBN_TEST_TOKEN", "from-env");

        let toml_content = r#"
[notify]
token = "${LBN_TEST_TOKEN}"
title = "${LBN_TEST_UNSET_TITLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let notify = config.notify.unwrap();
        assert_eq!(notify.token.as_deref(), Some("from-env"));
        assert_eq!(notify.title.as_deref(), Some(""));

        std::env::remove_var("LBN_TEST_TOKEN");
    }

    #[test]
    fn test_unset_title_placeholder_falls_back_to_default() {
        let config = TomlConfig::from_toml_str(
            r#"
[notify]
title = "${LBN_TEST_NEVER_SET_TITLE}"
timeout_seconds = 0
"#,
        )
        .unwrap()
        .apply_to(ReminderConfig::default());
        assert!(config.validate().is_err());

        let config = config.sanitized();
        assert!(config.validate().is_ok());
        assert_eq!(config.title, "开心每一天");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_file_values_override_base() {
        let base = ReminderConfig::new(vec![PersonRecord::new("env", "2000-1-1")], "env-token");

        let empty = TomlConfig::from_toml_str("").unwrap().apply_to(base.clone());
        assert_eq!(empty, base);

        let config = TomlConfig::from_toml_str(
            r#"
[notify]
base_url = "invalid-url"
"#,
        )
        .unwrap()
        .apply_to(base);
        assert_eq!(config.token, "env-token");
        assert_eq!(config.persons.len(), 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[[person]]\nname = 1"),
            Err(ReminderError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[person]]\nname = \"file\"\nbirth = \"1985-11-12\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.persons[0].name, "file");

        assert!(matches!(
            TomlConfig::from_file("/nonexistent/lunar-birthday.toml"),
            Err(ReminderError::IoError(_))
        ));
    }
}
