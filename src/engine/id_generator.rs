// ==========================================
// Teltarif LCR - 数字 ID 生成
// ==========================================
// 算法: SHA-256(key) 视为大端整数, 对 10^digits 取模
// 红线: 纯函数, 相同输入必得相同 ID (保证幂等)
// ==========================================
// 注: 不保证唯一 (不同 key 可能碰撞), 不保证定宽
// ==========================================

use crate::domain::types::NumericId;
use sha2::{Digest, Sha256};

/// Provider / Netz / Gasse / DynRouting 的 ID 位数
pub const DEFAULT_ID_DIGITS: u32 = 4;

/// RoutingEntry 的 ID 位数
pub const ROUTING_ENTRY_ID_DIGITS: u32 = 5;

/// u32 可容纳的最大位数
const MAX_ID_DIGITS: u32 = 9;

/// 由任意字符串生成数字 ID
///
/// # 参数
/// - key: 任意字符串
/// - digits: 位数上限 (1..=9)
///
/// # 返回
/// 取值范围 [0, 10^digits) 的 ID；值较小时打印位数少于 digits
///
/// # Panics
/// digits 不在 1..=9 内时 panic（调用方只使用固定常量）
pub fn generate_numeric_id(key: &str, digits: u32) -> NumericId {
    assert!(
        (1..=MAX_ID_DIGITS).contains(&digits),
        "digits 必须在 1..={} 之间, 实际 {}",
        MAX_ID_DIGITS,
        digits
    );

    let modulus = 10u64.pow(digits);
    let digest = Sha256::digest(key.as_bytes());

    // 逐字节大端取模, 等价于 int(hexdigest, 16) % 10^digits
    let value = digest
        .iter()
        .fold(0u64, |acc, byte| (acc * 256 + u64::from(*byte)) % modulus);

    NumericId(value as u32)
}

/// 4 位 ID
pub fn generate_id(key: &str) -> NumericId {
    generate_numeric_id(key, DEFAULT_ID_DIGITS)
}
