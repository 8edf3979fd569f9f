const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

const MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", //
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", //
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// 逐位轉寫年份，例如 1990 -> 一九九〇
pub fn year_in_chinese(year: i32) -> String {
    year.to_string()
        .chars()
        .map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]).unwrap_or(c))
        .collect()
}

pub fn month_in_chinese(month: u32, is_leap: bool) -> String {
    let name = MONTHS
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?");
    if is_leap {
        format!("闰{}", name)
    } else {
        name.to_string()
    }
}

pub fn day_in_chinese(day: u32) -> &'static str {
    DAYS.get((day as usize).wrapping_sub(1)).copied().unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_in_chinese() {
        assert_eq!(year_in_chinese(1990), "一九九〇");
        assert_eq!(year_in_chinese(2026), "二〇二六");
    }

    #[test]
    fn test_month_in_chinese() {
        assert_eq!(month_in_chinese(1, false), "正");
        assert_eq!(month_in_chinese(11, false), "冬");
        assert_eq!(month_in_chinese(12, false), "腊");
        assert_eq!(month_in_chinese(4, true), "闰四");
    }

    #[test]
    fn test_day_in_chinese() {
        assert_eq!(day_in_chinese(1), "初一");
        assert_eq!(day_in_chinese(10), "初十");
        assert_eq!(day_in_chinese(20), "二十");
        assert_eq!(day_in_chinese(26), "廿六");
        assert_eq!(day_in_chinese(30), "三十");
        assert_eq!(day_in_chinese(0), "?");
    }
}
