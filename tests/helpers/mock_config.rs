// ==========================================
// Mock 配置 - 用于集成测试
// ==========================================

use std::collections::BTreeMap;
use teltarif_lcr::config::{LcrConfig, DEFAULT_MAX_ALTERNATIVES};
use teltarif_lcr::domain::types::TableKind;

/// 只含目的地的配置 (无黑名单, 不限容量)
pub fn config_for(destinations: &[&str]) -> LcrConfig {
    LcrConfig {
        destinations: destinations.iter().map(|d| d.to_string()).collect(),
        blacklist: BTreeMap::new(),
        limits: BTreeMap::new(),
        max_alternatives: DEFAULT_MAX_ALTERNATIVES,
    }
}

/// Scenario A 配置: Usa + 黑名单 0190 + Range 上限 5
pub fn scenario_a_config() -> LcrConfig {
    let mut config = config_for(&["Usa"]);
    config
        .blacklist
        .insert("0190".to_string(), "Premium".to_string());
    config.limits.insert(TableKind::Gasse, 5);
    config
}
