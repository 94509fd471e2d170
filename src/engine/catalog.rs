// ==========================================
// Teltarif LCR - 目录构建引擎
// ==========================================
// 职责: 运营商 / 网络 / 号段 三个独立实体集合的去重与 ID 分配
// 输入: 按配置顺序排列的资费表 + 黑名单
// 输出: ProviderRecord / NetworkRecord / RangeRecord 列表
// ==========================================

use crate::domain::tables::{NetworkRecord, ProviderRecord, RangeRecord};
use crate::domain::tariff::DestinationView;
use crate::domain::types::{NumericId, RangeCategory};
use crate::engine::id_generator::generate_id;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

// ==========================================
// CatalogBuilder - 目录构建引擎
// ==========================================
pub struct CatalogBuilder {
    max_alternatives: u32,
}

impl CatalogBuilder {
    /// 构造函数
    ///
    /// # 参数
    /// - max_alternatives: 排名截断值, 超出的资费不产生运营商
    pub fn new(max_alternatives: u32) -> Self {
        Self { max_alternatives }
    }

    /// 运营商表
    ///
    /// 键为 provider[+" "+product]；同键首次出现者的拨号前缀生效
    pub fn build_providers(&self, destinations: &[DestinationView<'_>]) -> Vec<ProviderRecord> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut providers = Vec::new();

        for (_, tariffs) in destinations {
            for offer in tariffs.providers.values().flatten() {
                if offer.rank > self.max_alternatives {
                    continue;
                }
                let name = offer.provider_key();
                if !seen.insert(name.clone()) {
                    continue;
                }
                providers.push(ProviderRecord {
                    provider_id: generate_id(&name),
                    prefix: offer.prefix.clone(),
                    name,
                });
            }
        }

        debug!(count = providers.len(), "运营商目录已构建");
        providers
    }

    /// 网络表: 每个配置目的地一行
    pub fn build_networks(&self, destinations: &[String]) -> Vec<NetworkRecord> {
        destinations
            .iter()
            .map(|dest| NetworkRecord {
                netz_id: generate_id(dest),
                name: dest.clone(),
            })
            .collect()
    }

    /// 号段表: 目的地号段 (类别 0) + 黑名单号段 (类别 1, netzId 0)
    pub fn build_ranges(
        &self,
        destinations: &[DestinationView<'_>],
        blacklist: &BTreeMap<String, String>,
    ) -> Vec<RangeRecord> {
        let mut ranges = Vec::new();

        for (dest, tariffs) in destinations {
            let netz_id = generate_id(dest);
            for prefix in &tariffs.prefixes {
                ranges.push(RangeRecord {
                    gassen_id: generate_id(prefix),
                    prefix: prefix.clone(),
                    name: dest.to_string(),
                    netz_id,
                    category: RangeCategory::Normal,
                });
            }
        }

        ranges.extend(Self::blacklist_ranges(blacklist));

        debug!(count = ranges.len(), "号段目录已构建");
        ranges
    }

    /// 黑名单号段
    pub fn blacklist_ranges(blacklist: &BTreeMap<String, String>) -> Vec<RangeRecord> {
        blacklist
            .iter()
            .map(|(prefix, desc)| RangeRecord {
                gassen_id: generate_id(prefix),
                prefix: prefix.clone(),
                name: desc.clone(),
                netz_id: NumericId::NONE,
                category: RangeCategory::Blacklist,
            })
            .collect()
    }
}
