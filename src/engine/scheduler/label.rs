// ==========================================
// Teltarif LCR - 时段标签解析
// ==========================================
// 日期前缀: "Mo-Fr" -> 31, "Mo-So" -> 255, "Sa, So" -> 224
// 时间后缀: "ganztags" -> 00:00, "<起>-<止> Uhr" -> 起始时刻
// 红线: 无法识别的标签为致命解析错误
// ==========================================

use crate::domain::types::DayCode;
use crate::engine::error::{LcrError, LcrResult};
use chrono::NaiveTime;

const ALL_DAY_SUFFIX: &str = "ganztags";
const CLOCK_SUFFIX: &str = " Uhr";

/// 日期前缀映射（按顺序匹配）
const DAY_PREFIXES: [(&str, DayCode); 3] = [
    ("Mo-Fr", DayCode::Weekdays),
    ("Mo-So", DayCode::AllWeek),
    ("Sa, So", DayCode::Weekend),
];

/// 解析后的时段标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLabel {
    pub day: DayCode,
    pub hour: u32,
    pub minute: u32,
    /// 切换点 ID 键中的时刻片段, 保留标签原文 ("08,0", "07,30", 全天为 "0,0")
    pub start_key: String,
}

impl SlotLabel {
    /// 解析时段标签
    ///
    /// # 示例
    /// - "Mo-So ganztags" -> (255, 0, 0)
    /// - "Mo-Fr 08-18 Uhr" -> (31, 8, 0)
    /// - "Sa, So 07:30-19 Uhr" -> (224, 7, 30)
    pub fn parse(label: &str) -> LcrResult<Self> {
        let trimmed = label.trim();
        let day = parse_day(trimmed).ok_or_else(|| LcrError::parse(label, "无法识别的日期定义"))?;
        let (hour, minute, start_key) = parse_start_time(label, trimmed)?;

        if NaiveTime::from_hms_opt(hour, minute, 0).is_none() {
            return Err(LcrError::parse(
                label,
                format!("切换时刻超出范围: {:02}:{:02}", hour, minute),
            ));
        }

        Ok(Self {
            day,
            hour,
            minute,
            start_key,
        })
    }
}

fn parse_day(label: &str) -> Option<DayCode> {
    DAY_PREFIXES
        .iter()
        .find(|(prefix, _)| label.starts_with(prefix))
        .map(|(_, day)| *day)
}

/// 起始时刻 (时, 分, 原文键片段)
fn parse_start_time(label: &str, trimmed: &str) -> LcrResult<(u32, u32, String)> {
    if trimmed.ends_with(ALL_DAY_SUFFIX) {
        return Ok((0, 0, "0,0".to_string()));
    }
    if !trimmed.ends_with(CLOCK_SUFFIX) {
        return Err(LcrError::parse(label, "无法识别的时间定义"));
    }

    // 倒数第二个词为时间区间, 例如 "08-18" 或 "07:30-19"
    let range = trimmed
        .split_whitespace()
        .rev()
        .nth(1)
        .ok_or_else(|| LcrError::parse(label, "缺少时间区间"))?;
    let start = range.split('-').next().unwrap_or(range);

    let (hour_text, minute_text) = match start.split_once(':') {
        Some((hour, minute)) => (hour, Some(minute)),
        None => (start, None),
    };

    let hour = parse_clock_number(label, hour_text, "小时")?;
    let minute = match minute_text {
        Some(text) => parse_clock_number(label, text, "分钟")?,
        None => 0,
    };
    let start_key = format!("{},{}", hour_text, minute_text.unwrap_or("0"));
    Ok((hour, minute, start_key))
}

fn parse_clock_number(label: &str, text: &str, what: &str) -> LcrResult<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| LcrError::parse(label, format!("{}不是数字: '{}'", what, text)))
}
