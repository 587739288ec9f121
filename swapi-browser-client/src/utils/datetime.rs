//! 日期时间工具
//!
//! SWAPI 的 `created` / `edited` 字段是带微秒的 ISO 8601 字符串，
//! 如 `2014-12-09T13:50:51.644000Z`。

use chrono::{DateTime, NaiveDateTime, Utc};

/// 详情页使用的日期格式（日-月-年）
pub const DAY_MONTH_YEAR: &str = "%d-%m-%Y";

/// 解析 ISO 8601 时间戳
///
/// 优先按 RFC3339 解析；不带时区的时间按 UTC 处理。
pub fn parse_iso8601(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// 将时间戳格式化为 `dd-mm-yyyy`
///
/// 无法解析时返回 `None`，由调用方决定如何展示原始值。
pub fn format_day_month_year(s: &str) -> Option<String> {
    parse_iso8601(s).map(|dt| dt.format(DAY_MONTH_YEAR).to_string())
}
