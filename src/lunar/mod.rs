//! 公曆與農曆互轉，以及農曆日期的中文表示。
//!
//! 支援範圍為農曆 1900 年正月初一 (公曆 1900-01-31) 至農曆 2100 年底。

pub mod table;
pub mod text;

use crate::utils::error::{ReminderError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
}

impl LunarDate {
    /// 由農曆年月日建立，日期在該年不存在時回傳錯誤 (例如該年沒有對應的閏月，或小月沒有三十)。
    pub fn from_ymd(year: i32, month: u32, day: u32, is_leap: bool) -> Result<Self> {
        if !table::in_range(year) {
            return Err(ReminderError::lunar(format!(
                "lunar year {} is outside {}..={}",
                year,
                table::FIRST_YEAR,
                table::LAST_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(ReminderError::lunar(format!("invalid lunar month {}", month)));
        }

        let days_in_month = if is_leap {
            if table::leap_month(year) != Some(month) {
                return Err(ReminderError::lunar(format!(
                    "lunar year {} has no leap month {}",
                    year, month
                )));
            }
            table::leap_month_days(year)
        } else {
            table::month_days(year, month)
        };

        if day == 0 || day > days_in_month {
            return Err(ReminderError::lunar(format!(
                "lunar {}-{}{} has {} days, got day {}",
                year,
                if is_leap { "leap " } else { "" },
                month,
                days_in_month,
                day
            )));
        }

        Ok(Self {
            year,
            month,
            day,
            is_leap,
        })
    }

    pub fn from_solar(date: NaiveDate) -> Result<Self> {
        let epoch = table::epoch();
        let mut offset = (date - epoch).num_days();
        if offset < 0 {
            return Err(ReminderError::lunar(format!(
                "solar date {} is before {}",
                date, epoch
            )));
        }

        let mut year = table::FIRST_YEAR;
        loop {
            if !table::in_range(year) {
                return Err(ReminderError::lunar(format!(
                    "solar date {} is after lunar year {}",
                    date,
                    table::LAST_YEAR
                )));
            }
            let days = i64::from(table::year_days(year));
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        for (month, is_leap, days) in table::months_of(year) {
            let days = i64::from(days);
            if offset < days {
                return Ok(Self {
                    year,
                    month,
                    day: offset as u32 + 1,
                    is_leap,
                });
            }
            offset -= days;
        }

        // year_days 與 months_of 由同一份資料計算，不會走到這裡
        Err(ReminderError::lunar(format!(
            "solar date {} could not be placed in lunar year {}",
            date, year
        )))
    }

    pub fn to_solar(&self) -> Result<NaiveDate> {
        if !table::in_range(self.year) {
            return Err(ReminderError::lunar(format!(
                "lunar year {} is outside {}-{}",
                self.year,
                table::FIRST_YEAR,
                table::LAST_YEAR
            )));
        }

        let mut offset: i64 = (table::FIRST_YEAR..self.year)
            .map(|year| i64::from(table::year_days(year)))
            .sum();

        let mut found = false;
        for (month, is_leap, days) in table::months_of(self.year) {
            if month == self.month && is_leap == self.is_leap {
                found = true;
                break;
            }
            offset += i64::from(days);
        }
        if !found {
            return Err(ReminderError::lunar(format!(
                "lunar month {} does not exist in {}",
                self.month, self.year
            )));
        }

        offset += i64::from(self.day) - 1;
        table::epoch()
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(|| ReminderError::lunar("solar date overflow"))
    }

    pub fn year_in_chinese(&self) -> String {
        text::year_in_chinese(self.year)
    }

    pub fn month_in_chinese(&self) -> String {
        text::month_in_chinese(self.month, self.is_leap)
    }

    pub fn day_in_chinese(&self) -> &'static str {
        text::day_in_chinese(self.day)
    }

    /// 例如 `一九九〇年，四月，廿六日`
    pub fn to_chinese_text(&self) -> String {
        format!(
            "{}年，{}月，{}日",
            self.year_in_chinese(),
            self.month_in_chinese(),
            self.day_in_chinese()
        )
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap { "L" } else { "" };
        write!(f, "{}-{}{}-{}", self.year, leap, self.month, self.day)
    }
}

/// 不補零的公曆日期，例如 `2024-5-20`
pub fn solar_text(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}
