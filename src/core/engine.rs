use crate::adapters::{ServerChanNotifier, SystemClock};
use crate::config::ReminderConfig;
use crate::core::pipeline::BirthdayPipeline;
use crate::core::Pipeline;
use crate::domain::model::{BirthdayResult, NotifyOutcome, Report};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results: Vec<BirthdayResult>,
    pub report: Report,
    pub outcome: NotifyOutcome,
}

pub struct ReminderEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> ReminderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    /// dry run 時只輸出報告到 stdout，不呼叫推送
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting birthday reminder");

        tracing::info!("Reading person records...");
        let persons = self.pipeline.extract().await?;
        tracing::info!("Read {} person records", persons.len());

        tracing::info!("Calculating birthdays...");
        let transformed = self.pipeline.transform(persons).await?;
        tracing::info!(
            "Report generated for {} people",
            transformed.results.len()
        );

        let outcome = if self.dry_run {
            println!("{}\n\n{}", transformed.report.title, transformed.report.body);
            NotifyOutcome::Skipped {
                reason: "dry run".to_string(),
            }
        } else {
            tracing::info!("Sending notification...");
            self.pipeline.load(&transformed).await?
        };

        tracing::info!("✅ Done ({:?})", outcome);
        Ok(RunSummary {
            results: transformed.results,
            report: transformed.report,
            outcome,
        })
    }
}

impl ReminderEngine<BirthdayPipeline<ReminderConfig, SystemClock, ServerChanNotifier>> {
    /// 以系統時鐘與 Server酱 推送組裝完整流程
    pub fn from_config(config: ReminderConfig) -> Result<Self> {
        let notifier = ServerChanNotifier::from_config(&config)?;
        Ok(Self::new(BirthdayPipeline::new(config, SystemClock, notifier)))
    }
}
