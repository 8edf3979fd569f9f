pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod lunar;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FixedClock, ServerChanNotifier, SystemClock};
pub use config::{parse_person_list, ReminderConfig};
pub use crate::core::{
    calculator::BirthdayCalculator,
    engine::{ReminderEngine, RunSummary},
    pipeline::BirthdayPipeline,
};
pub use domain::model::{BirthdayResult, NotifyOutcome, PersonRecord, Report};
pub use lunar::LunarDate;
pub use utils::error::{ReminderError, Result};
