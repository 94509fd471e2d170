// ==========================================
// Teltarif LCR - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有错误均为致命错误,不返回部分文档
// ==========================================

use crate::domain::types::TableKind;
use thiserror::Error;

/// 表生成引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcrError {
    // ===== 解析错误 =====
    #[error("无法识别的时段标签 '{label}': {reason}")]
    Parse { label: String, reason: String },

    // ===== 数据错误 =====
    #[error("数据错误 ({context}, 字段 {field}, 值 '{value}'): {reason}")]
    Data {
        context: String,
        field: &'static str,
        value: String,
        reason: String,
    },

    // ===== 容量错误 =====
    #[error("{table}-Table 超出最大条目数: {count} > {limit}")]
    Capacity {
        table: TableKind,
        count: usize,
        limit: usize,
    },

    // ===== 配置错误 =====
    #[error("配置错误: {0}")]
    Configuration(String),
}

impl LcrError {
    pub fn parse(label: &str, reason: impl Into<String>) -> Self {
        LcrError::Parse {
            label: label.to_string(),
            reason: reason.into(),
        }
    }

    /// 进程退出码: 容量超限为 2, 其他为 1
    pub fn exit_code(&self) -> u8 {
        match self {
            LcrError::Capacity { .. } => 2,
            _ => 1,
        }
    }
}

/// Result 类型别名
pub type LcrResult<T> = Result<T, LcrError>;
