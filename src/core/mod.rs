pub mod calculator;
pub mod engine;
pub mod formatter;
pub mod pipeline;

pub use crate::domain::model::{BirthdayResult, PersonRecord, Report, TransformResult};
pub use crate::domain::ports::{ConfigProvider, DateSource, Notifier, Pipeline};
pub use crate::utils::error::Result;
