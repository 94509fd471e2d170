// ==========================================
// Teltarif LCR - 配置层
// ==========================================
// 职责: 加载并校验 lcr.yaml
// ==========================================

pub mod lcr_config;

// 重导出核心配置
pub use lcr_config::{
    resolve_config_path, LcrConfig, CONFIG_FILE_NAME, DEFAULT_MAX_ALTERNATIVES,
};
