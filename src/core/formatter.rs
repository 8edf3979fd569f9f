use crate::domain::model::{BirthdayResult, Report};

pub const DEFAULT_TITLE: &str = "开心每一天";

/// 產生 Markdown 格式的報告：日期標題，接著每人一節，順序與輸入相同。
pub fn format_report(
    title: &str,
    solar_date: &str,
    lunar_date: &str,
    results: &[BirthdayResult],
) -> Report {
    let mut body = format!("# 今天是 {}，阴历 {}\n", solar_date, lunar_date);

    for item in results {
        body.push_str(&format!(
            "\n## {}\n- {}，{}岁\n- 距离下次生日还有 {} 天\n",
            item.name, item.lunar_birth_text, item.age, item.days_until_next_birthday
        ));
    }

    Report {
        title: title.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, days: u32) -> BirthdayResult {
        BirthdayResult {
            name: name.to_string(),
            lunar_birth_text: "一九九〇年，四月，廿六日".to_string(),
            age: 36,
            days_until_next_birthday: days,
        }
    }

    #[test]
    fn test_header_only_when_no_results() {
        let report = format_report(DEFAULT_TITLE, "2026-10-19", "二〇二六年，九月，初十日", &[]);
        assert_eq!(report.title, "开心每一天");
        assert_eq!(report.body, "# 今天是 2026-10-19，阴历 二〇二六年，九月，初十日\n");
        assert!(!report.body.contains("##"));
    }

    #[test]
    fn test_sections_follow_input_order() {
        let results = vec![result("Zed", 3), result("Amy", 200), result("Mia", 365)];
        let report = format_report(DEFAULT_TITLE, "2026-10-19", "x", &results);

        let headings: Vec<&str> = report
            .body
            .lines()
            .filter_map(|line| line.strip_prefix("## "))
            .collect();
        assert_eq!(headings, vec!["Zed", "Amy", "Mia"]);
    }

    #[test]
    fn test_section_layout() {
        let report = format_report("t", "2026-10-19", "x", &[result("A", 224)]);
        assert!(report.body.ends_with(
            "\n## A\n- 一九九〇年，四月，廿六日，36岁\n- 距离下次生日还有 224 天\n"
        ));
    }

    #[test]
    fn test_deterministic() {
        let results = vec![result("A", 1)];
        assert_eq!(
            format_report("t", "d", "l", &results),
            format_report("t", "d", "l", &results)
        );
    }
}
