use crate::utils::error::{ReminderError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReminderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReminderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ReminderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReminderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReminderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn birth_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,4})-(\d{1,2})-(\d{1,2})\s*$").expect("birth date pattern is valid")
    })
}

/// 解析 `YYYY-M-D` 形式的日期字串，回傳 (年, 月, 日) 三個數字，不檢查日曆有效性。
pub fn parse_ymd(value: &str) -> Result<(i32, u32, u32)> {
    let invalid = |reason: &str| ReminderError::InvalidBirthDate {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let caps = birth_pattern()
        .captures(value)
        .ok_or_else(|| invalid("expected format YYYY-M-D"))?;

    let year = caps[1].parse::<i32>().map_err(|_| invalid("bad year"))?;
    let month = caps[2].parse::<u32>().map_err(|_| invalid("bad month"))?;
    let day = caps[3].parse::<u32>().map_err(|_| invalid("bad day"))?;

    Ok((year, month, day))
}

/// 解析公曆生日字串
pub fn parse_solar_date(value: &str) -> Result<NaiveDate> {
    let (year, month, day) = parse_ymd(value)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ReminderError::InvalidBirthDate {
        value: value.to_string(),
        reason: "not a valid Gregorian date".to_string(),
    })
}
