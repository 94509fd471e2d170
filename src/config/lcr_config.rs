// ==========================================
// Teltarif LCR - 生成配置
// ==========================================
// 存储: lcr.yaml (destinations / blacklist / limits / max_alternatives)
// 红线: 必填键缺失即为配置错误,不使用隐式默认值
// ==========================================

use crate::domain::types::TableKind;
use crate::engine::error::{LcrError, LcrResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "lcr.yaml";

/// 用户配置目录下的子目录
pub const CONFIG_DIR_NAME: &str = crate::APP_NAME;

/// 每个时段最多保留的备选运营商数
pub const DEFAULT_MAX_ALTERNATIVES: u32 = 3;

fn default_max_alternatives() -> u32 {
    DEFAULT_MAX_ALTERNATIVES
}

// ==========================================
// LcrConfig - 表生成配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcrConfig {
    /// 目的地列表（顺序即输出与去重顺序）
    pub destinations: Vec<String>,

    /// 黑名单: 号段前缀 -> 描述
    pub blacklist: BTreeMap<String, String>,

    /// 各表最大行数；未配置的表不限
    pub limits: BTreeMap<TableKind, usize>,

    /// 排名截断值
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: u32,
}

impl LcrConfig {
    /// 从 YAML 文本解析并校验
    pub fn from_yaml_str(content: &str) -> LcrResult<Self> {
        let config: LcrConfig = serde_yaml::from_str(content)
            .map_err(|e| LcrError::Configuration(format!("配置解析失败: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn load(path: &Path) -> LcrResult<Self> {
        debug!(path = %path.display(), "加载配置文件");
        let content = fs::read_to_string(path).map_err(|e| {
            LcrError::Configuration(format!("无法读取配置文件 {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// 校验配置取值
    pub fn validate(&self) -> LcrResult<()> {
        if self.destinations.is_empty() {
            return Err(LcrError::Configuration(
                "destinations 不能为空".to_string(),
            ));
        }
        if let Some(dest) = self.destinations.iter().find(|d| d.trim().is_empty()) {
            return Err(LcrError::Configuration(format!(
                "destinations 含空目的地名称: '{}'",
                dest
            )));
        }
        if self.max_alternatives < 1 {
            return Err(LcrError::Configuration(
                "max_alternatives 必须 >= 1".to_string(),
            ));
        }
        if let Some(prefix) = self.blacklist.keys().find(|p| p.trim().is_empty()) {
            return Err(LcrError::Configuration(format!(
                "blacklist 含空号段: '{}'",
                prefix
            )));
        }
        Ok(())
    }

    /// 指定表的最大行数
    pub fn limit_for(&self, table: TableKind) -> Option<usize> {
        self.limits.get(&table).copied()
    }
}

// ==========================================
// 配置文件定位
// ==========================================

/// 解析配置文件路径
///
/// 顺序: 显式指定 -> ./lcr.yaml -> <用户配置目录>/teltarif-lcr/lcr.yaml
pub fn resolve_config_path(explicit: Option<&Path>) -> LcrResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            LcrError::Configuration(format!(
                "未找到配置文件, 已查找: {}",
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}
