// ==========================================
// Teltarif LCR - 价格/节拍字段解析
// ==========================================
// 价格: "1,29 ct/Min" -> 129 (德式小数逗号, ×100 后截断)
// 节拍: "60/60" -> (60, 60)
// 说明: 使用定点运算, 避免浮点截断误差 (0,29 × 100 != 28)
// ==========================================

/// 解析价格文本, 返回百分之一单位的整数
pub fn parse_price_hundredths(text: &str) -> Result<u64, String> {
    let token = text
        .split_whitespace()
        .rev()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .ok_or_else(|| "未找到数值".to_string())?;
    parse_decimal_hundredths(token)
}

/// 定点解析 "12,345" / "12.345" / "12"
fn parse_decimal_hundredths(token: &str) -> Result<u64, String> {
    let (int_part, frac_part) = match token.find(|c: char| c == ',' || c == '.') {
        Some(pos) => (&token[..pos], Some(&token[pos + 1..])),
        None => (token, None),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("整数部分无效: '{}'", token));
    }

    let mut cents: u64 = 0;
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("小数部分无效: '{}'", token));
        }
        // 只取前两位, 其余截断
        let mut digits = frac.bytes().map(|b| u64::from(b - b'0'));
        cents = digits.next().unwrap_or(0) * 10 + digits.next().unwrap_or(0);
    }

    int_part
        .parse::<u64>()
        .ok()
        .and_then(|units| units.checked_mul(100))
        .and_then(|value| value.checked_add(cents))
        .ok_or_else(|| format!("数值溢出: '{}'", token))
}

/// 解析节拍文本 "首节拍/后续节拍"（秒）
pub fn parse_pulse(text: &str) -> Result<(u32, u32), String> {
    let (first, next) = text
        .split_once('/')
        .ok_or_else(|| "缺少 '/' 分隔符".to_string())?;
    let first = first
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("首节拍不是数字: '{}'", first.trim()))?;
    let next = next
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("后续节拍不是数字: '{}'", next.trim()))?;
    Ok((first, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_with_unit_suffix() {
        assert_eq!(parse_price_hundredths("0,01 EUR/Min"), Ok(1));
        assert_eq!(parse_price_hundredths("1,29 ct/Min"), Ok(129));
        assert_eq!(parse_price_hundredths("ab 2,5 ct/Min"), Ok(250));
        assert_eq!(parse_price_hundredths("3 ct/Min"), Ok(300));
    }

    #[test]
    fn test_price_truncates_and_avoids_float_error() {
        assert_eq!(parse_price_hundredths("0,29 ct/Min"), Ok(29));
        assert_eq!(parse_price_hundredths("1,299 ct/Min"), Ok(129));
        assert_eq!(parse_price_hundredths("0.57 ct/Min"), Ok(57));
    }

    #[test]
    fn test_price_handles_non_breaking_space() {
        assert_eq!(parse_price_hundredths("1,49\u{a0}ct/Min"), Ok(149));
    }

    #[test]
    fn test_malformed_price_rejected() {
        assert!(parse_price_hundredths("kostenlos").is_err());
        assert!(parse_price_hundredths("").is_err());
        assert!(parse_price_hundredths("1,x9 ct/Min").is_err());
        assert!(parse_price_hundredths("1, ct/Min").is_err());
    }

    #[test]
    fn test_pulse() {
        assert_eq!(parse_pulse("60/60"), Ok((60, 60)));
        assert_eq!(parse_pulse(" 1 / 1 "), Ok((1, 1)));
        assert!(parse_pulse("60").is_err());
        assert!(parse_pulse("60/x").is_err());
    }
}
