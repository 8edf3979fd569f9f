use crate::domain::model::{BirthdayResult, PersonRecord};
use crate::lunar::LunarDate;
use crate::utils::error::Result;
use crate::utils::validation::{parse_solar_date, parse_ymd};
use chrono::NaiveDate;

/// 閏月等無法換算的情況一律以此天數代替
pub const FALLBACK_DAYS: u32 = 365;

/// 最長的農曆年 (含閏月) 天數，換算成功時的天數上限
pub const MAX_LUNAR_YEAR_DAYS: u32 = 385;

/// 以固定的「今天」計算每個人的農曆生日資訊
#[derive(Debug, Clone, Copy)]
pub struct BirthdayCalculator {
    today: NaiveDate,
    lunar_today: LunarDate,
}

impl BirthdayCalculator {
    pub fn new(today: NaiveDate) -> Result<Self> {
        Ok(Self {
            today,
            lunar_today: LunarDate::from_solar(today)?,
        })
    }

    pub fn lunar_today(&self) -> LunarDate {
        self.lunar_today
    }

    /// 只有生日字串本身無法解析或超出農曆資料範圍時才回傳錯誤，
    /// 下次生日的換算失敗會被吸收為 [`FALLBACK_DAYS`]。
    pub fn calculate(&self, person: &PersonRecord) -> Result<BirthdayResult> {
        let birth = lunar_birth(person)?;
        let age = (self.lunar_today.year - birth.year).max(0) as u32;

        let days_until_next_birthday = match self.next_birthday(&birth) {
            Ok(next) => (next - self.today).num_days().max(0) as u32,
            Err(e) => {
                tracing::debug!(
                    "Next birthday of {} ({}) not resolvable, using {} days: {}",
                    person.name,
                    birth,
                    FALLBACK_DAYS,
                    e
                );
                FALLBACK_DAYS
            }
        };

        Ok(BirthdayResult {
            name: person.name.clone(),
            lunar_birth_text: birth.to_chinese_text(),
            age,
            days_until_next_birthday,
        })
    }

    /// 依輸入順序計算，無效的紀錄記錄警告後略過
    pub fn calculate_all(&self, persons: &[PersonRecord]) -> Vec<BirthdayResult> {
        persons
            .iter()
            .filter_map(|person| match self.calculate(person) {
                Ok(result) => Some(result),
                Err(e) => {
                    tracing::warn!("⚠️ Skipping {}: {}", person.name, e);
                    None
                }
            })
            .collect()
    }

    /// 下一次農曆生日對應的公曆日期；今年的生日在今天或之前時改用明年。
    pub fn next_birthday(&self, birth: &LunarDate) -> Result<NaiveDate> {
        let this_year = LunarDate::from_ymd(
            self.lunar_today.year,
            birth.month,
            birth.day,
            birth.is_leap,
        )?
        .to_solar()?;

        if this_year > self.today {
            return Ok(this_year);
        }

        LunarDate::from_ymd(
            self.lunar_today.year + 1,
            birth.month,
            birth.day,
            birth.is_leap,
        )?
        .to_solar()
    }
}

/// 出生日期的農曆表示
pub fn lunar_birth(person: &PersonRecord) -> Result<LunarDate> {
    if person.lunar {
        let (year, month, day) = parse_ymd(&person.birth)?;
        LunarDate::from_ymd(year, month, day, false)
    } else {
        LunarDate::from_solar(parse_solar_date(&person.birth)?)
    }
}
