use crate::domain::model::{NotifyOutcome, PersonRecord, Report, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait ConfigProvider: Send + Sync {
    /// 解析失敗時回傳空清單，不視為錯誤
    fn persons(&self) -> Vec<PersonRecord>;
    fn notify_token(&self) -> &str;
    fn notify_base_url(&self) -> &str;
    fn notify_title(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// 提供「今天」的公曆日期
pub trait DateSource: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// 任何失敗都在內部吸收，只以 [`NotifyOutcome`] 回報
    async fn notify(&self, report: &Report, token: &str) -> NotifyOutcome;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PersonRecord>>;
    async fn transform(&self, persons: Vec<PersonRecord>) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<NotifyOutcome>;
}
