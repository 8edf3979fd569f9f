use crate::core::calculator::BirthdayCalculator;
use crate::core::formatter::format_report;
use crate::core::{ConfigProvider, DateSource, Notifier, Pipeline};
use crate::domain::model::{NotifyOutcome, PersonRecord, TransformResult};
use crate::lunar::solar_text;
use crate::utils::error::Result;

/// 讀取人員 → 計算生日並產生報告 → 推送
pub struct BirthdayPipeline<C: ConfigProvider, D: DateSource, N: Notifier> {
    config: C,
    clock: D,
    notifier: N,
}

impl<C: ConfigProvider, D: DateSource, N: Notifier> BirthdayPipeline<C, D, N> {
    pub fn new(config: C, clock: D, notifier: N) -> Self {
        Self {
            config,
            clock,
            notifier,
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider, D: DateSource, N: Notifier> Pipeline for BirthdayPipeline<C, D, N> {
    async fn extract(&self) -> Result<Vec<PersonRecord>> {
        let persons = self.config.persons();
        tracing::debug!("Loaded {} person records from configuration", persons.len());
        Ok(persons)
    }

    async fn transform(&self, persons: Vec<PersonRecord>) -> Result<TransformResult> {
        let today = self.clock.today();
        let calculator = BirthdayCalculator::new(today)?;
        let lunar_today = calculator.lunar_today();
        tracing::debug!("Today is {} (lunar {})", today, lunar_today);

        let results = calculator.calculate_all(&persons);
        let report = format_report(
            self.config.notify_title(),
            &solar_text(today),
            &lunar_today.to_chinese_text(),
            &results,
        );

        Ok(TransformResult { results, report })
    }

    async fn load(&self, result: &TransformResult) -> Result<NotifyOutcome> {
        Ok(self
            .notifier
            .notify(&result.report, self.config.notify_token())
            .await)
    }
}
