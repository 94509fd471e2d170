// ==========================================
// Teltarif LCR - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 快照导入错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("YAML 解析失败 ({path}): {message}")]
    YamlParseError { path: String, message: String },

    // ===== 快照完整性错误 =====
    #[error("快照缺少目的地 '{destination}' (期望文件 {expected_file})")]
    MissingDestination {
        destination: String,
        expected_file: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
