use serde::{Deserialize, Serialize};

/// 輸入的人員資料，`birth` 為 `YYYY-M-D` 字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub birth: String,
    /// `birth` 已是農曆日期時設為 true
    #[serde(default)]
    pub lunar: bool,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, birth: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth: birth.into(),
            lunar: false,
        }
    }

    pub fn lunar(name: impl Into<String>, birth: impl Into<String>) -> Self {
        Self {
            lunar: true,
            ..Self::new(name, birth)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayResult {
    pub name: String,
    pub lunar_birth_text: String,
    pub age: u32,
    pub days_until_next_birthday: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub results: Vec<BirthdayResult>,
    pub report: Report,
}

/// 通知結果，只用於日誌與測試，不影響流程
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Skipped { reason: String },
    Delivered { status: u16 },
    Failed { reason: String },
}

impl NotifyOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}
