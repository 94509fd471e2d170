// ==========================================
// Teltarif LCR - 资费输入模型
// ==========================================
// 依据: 抓取/归一化环节产出的每目的地资费表
// 红线: 输入只读,引擎不修改快照
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 备注: 所有资费使用同一计费节拍
const NOTE_COMMON_PULSE: &str = "Alle Tarife haben den Takt ";

/// 备注: 所有产品同名
const NOTE_COMMON_PRODUCT: &str = "Alle Tarife heißen ";

// ==========================================
// DestinationOffer - 单条资费排名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationOffer {
    /// 排名 (1 = 最便宜)
    pub rank: u32,

    /// 运营商名称
    pub provider: String,

    /// 产品名称（可选）
    #[serde(default)]
    pub product: Option<String>,

    /// 拨号前缀 (Call-by-Call)
    pub prefix: String,

    /// 价格原文, 例如 "1,29 ct/Min"
    pub price: String,

    /// 计费节拍原文, 例如 "60/60"
    #[serde(default)]
    pub pulse: Option<String>,

    #[serde(default)]
    pub provider_url: Option<String>,

    #[serde(default)]
    pub product_url: Option<String>,
}

impl DestinationOffer {
    /// 运营商键: provider[ + " " + product]
    ///
    /// 用于运营商去重与 providerId 生成
    pub fn provider_key(&self) -> String {
        match self.product.as_deref() {
            Some(product) if !product.is_empty() => format!("{} {}", self.provider, product),
            _ => self.provider.clone(),
        }
    }
}

// ==========================================
// DestinationTariffs - 单目的地资费表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationTariffs {
    /// 时段标签 -> 按排名排列的资费列表
    #[serde(default)]
    pub providers: BTreeMap<String, Vec<DestinationOffer>>,

    /// 目的地号段
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// 页面备注
    #[serde(default)]
    pub notes: Vec<String>,

    /// 数据源更新时间（原文）
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl DestinationTariffs {
    /// 按备注补全默认值
    ///
    /// - "Alle Tarife haben den Takt X": 未给出节拍的资费使用 X
    /// - "Alle Tarife heißen X": 所有资费的产品名固定为 X
    ///
    /// 幂等: 重复调用结果不变
    pub fn apply_note_defaults(&mut self) {
        let common_pulse = self.note_value(NOTE_COMMON_PULSE);
        let common_product = self.note_value(NOTE_COMMON_PRODUCT);

        for offers in self.providers.values_mut() {
            for offer in offers.iter_mut() {
                if offer.pulse.is_none() {
                    offer.pulse = common_pulse.clone();
                }
                if let Some(product) = &common_product {
                    offer.product = Some(product.clone());
                }
            }
        }
    }

    fn note_value(&self, marker: &str) -> Option<String> {
        self.notes.iter().find_map(|note| {
            note.trim()
                .strip_prefix(marker)
                .map(|rest| rest.trim().trim_end_matches('.').to_string())
                .filter(|value| !value.is_empty())
        })
    }
}

// ==========================================
// TariffSnapshot - 全部目的地的归一化快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TariffSnapshot {
    pub destinations: BTreeMap<String, DestinationTariffs>,
}

impl TariffSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, destination: impl Into<String>, tariffs: DestinationTariffs) {
        self.destinations.insert(destination.into(), tariffs);
    }

    pub fn get(&self, destination: &str) -> Option<&DestinationTariffs> {
        self.destinations.get(destination)
    }

    /// 按配置的目的地顺序取出资费表
    ///
    /// 未配置的目的地不在结果中；配置了但快照缺失的目的地同样跳过
    pub fn ordered<'a>(&'a self, destinations: &'a [String]) -> Vec<DestinationView<'a>> {
        destinations
            .iter()
            .filter_map(|dest| self.destinations.get(dest).map(|t| (dest.as_str(), t)))
            .collect()
    }

    /// 已配置但快照中缺失的目的地 (按配置顺序)
    pub fn missing<'a>(&self, destinations: &'a [String]) -> Vec<&'a str> {
        destinations
            .iter()
            .filter(|dest| !self.destinations.contains_key(dest.as_str()))
            .map(|dest| dest.as_str())
            .collect()
    }

    /// 快照中存在但未配置的目的地
    pub fn unconfigured<'a>(&'a self, destinations: &[String]) -> Vec<&'a str> {
        self.destinations
            .keys()
            .filter(|dest| !destinations.contains(*dest))
            .map(|dest| dest.as_str())
            .collect()
    }
}

/// (目的地名称, 资费表)
pub type DestinationView<'a> = (&'a str, &'a DestinationTariffs);

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(product: Option<&str>, pulse: Option<&str>) -> DestinationOffer {
        DestinationOffer {
            rank: 1,
            provider: "01013 Tele2".to_string(),
            product: product.map(|s| s.to_string()),
            prefix: "01013".to_string(),
            price: "1,29 ct/Min".to_string(),
            pulse: pulse.map(|s| s.to_string()),
            provider_url: None,
            product_url: None,
        }
    }

    #[test]
    fn test_provider_key_with_and_without_product() {
        assert_eq!(offer(None, None).provider_key(), "01013 Tele2");
        assert_eq!(offer(Some(""), None).provider_key(), "01013 Tele2");
        assert_eq!(
            offer(Some("Call by Call"), None).provider_key(),
            "01013 Tele2 Call by Call"
        );
    }

    #[test]
    fn test_note_defaults_fill_pulse_and_product() {
        let mut tariffs = DestinationTariffs {
            notes: vec![
                "Alle Tarife haben den Takt 60/60".to_string(),
                "Alle Tarife heißen Call by Call".to_string(),
            ],
            ..Default::default()
        };
        tariffs.providers.insert(
            "Mo-So ganztags".to_string(),
            vec![offer(Some("Spar"), None), offer(None, Some("1/1"))],
        );

        tariffs.apply_note_defaults();
        let offers = &tariffs.providers["Mo-So ganztags"];
        assert_eq!(offers[0].pulse.as_deref(), Some("60/60"));
        assert_eq!(offers[1].pulse.as_deref(), Some("1/1"));
        assert!(offers
            .iter()
            .all(|o| o.product.as_deref() == Some("Call by Call")));

        let before = tariffs.clone();
        tariffs.apply_note_defaults();
        assert_eq!(tariffs, before);
    }

    #[test]
    fn test_ordered_follows_configured_order() {
        let mut snapshot = TariffSnapshot::new();
        snapshot.insert("Usa", DestinationTariffs::default());
        snapshot.insert("Kanada", DestinationTariffs::default());
        snapshot.insert("Mexiko", DestinationTariffs::default());

        let destinations = vec!["Usa".to_string(), "Kanada".to_string(), "Polen".to_string()];
        let names: Vec<&str> = snapshot.ordered(&destinations).iter().map(|(d, _)| *d).collect();
        assert_eq!(names, vec!["Usa", "Kanada"]);
        assert_eq!(snapshot.unconfigured(&destinations), vec!["Mexiko"]);
        assert_eq!(snapshot.missing(&destinations), vec!["Polen"]);
    }
}
