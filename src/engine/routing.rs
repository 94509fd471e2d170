// ==========================================
// Teltarif LCR - 路由规则构建引擎
// ==========================================
// 职责: 资费排名 -> 按优先级排列的路由条目
// 输入: 资费表 (排名 <= max_alternatives) + 黑名单
// 输出: RoutingEntryRecord 列表
// ==========================================
// 红线: 超出排名截断的资费直接丢弃, 不降级
// 红线: 价格/节拍缺失或格式错误为致命数据错误
// ==========================================

use crate::domain::tables::RoutingEntryRecord;
use crate::domain::tariff::{DestinationOffer, DestinationView};
use crate::domain::types::{NumericId, ParentRef, RoutingType};
use crate::engine::error::{LcrError, LcrResult};
use crate::engine::id_generator::{generate_id, generate_numeric_id, ROUTING_ENTRY_ID_DIGITS};
use crate::engine::scheduler::{slot_id, SlotLabel};
use crate::engine::tariff_fields::{parse_price_hundredths, parse_pulse};
use std::collections::BTreeMap;
use tracing::debug;

/// 黑名单条目的固定优先级
pub const BLACKLIST_PRIORITY: u32 = 3;

// ==========================================
// RoutingRuleBuilder - 路由规则构建引擎
// ==========================================
pub struct RoutingRuleBuilder {
    max_alternatives: u32,
}

impl RoutingRuleBuilder {
    /// 构造函数
    ///
    /// # 参数
    /// - max_alternatives: 排名截断值
    pub fn new(max_alternatives: u32) -> Self {
        Self { max_alternatives }
    }

    /// 为所有保留的资费生成挂在切换点下的路由条目
    ///
    /// 条目 ID = generate("{slotId},{providerId},{rank}", 5)
    pub fn build_slot_entries(
        &self,
        destinations: &[DestinationView<'_>],
    ) -> LcrResult<Vec<RoutingEntryRecord>> {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for (dest, tariffs) in destinations {
            let netz_id = generate_id(dest);
            for (label_text, offers) in &tariffs.providers {
                let label = SlotLabel::parse(label_text)?;
                let slot = slot_id(netz_id, dest, &label);

                for offer in offers {
                    if offer.rank > self.max_alternatives {
                        skipped += 1;
                        continue;
                    }
                    let context = format!("{} / {} / {}", dest, label_text, offer.provider_key());
                    entries.push(self.slot_entry(slot, offer, &context)?);
                }
            }
        }

        debug!(
            entries = entries.len(),
            skipped_by_rank = skipped,
            "时段路由条目已构建"
        );
        Ok(entries)
    }

    /// 单条资费 -> 路由条目
    fn slot_entry(
        &self,
        slot: NumericId,
        offer: &DestinationOffer,
        context: &str,
    ) -> LcrResult<RoutingEntryRecord> {
        let provider_id = generate_id(&offer.provider_key());

        let price_per_minute = parse_price_hundredths(&offer.price).map_err(|reason| LcrError::Data {
            context: context.to_string(),
            field: "price",
            value: offer.price.clone(),
            reason,
        })?;

        let pulse_text = offer.pulse.as_deref().ok_or_else(|| LcrError::Data {
            context: context.to_string(),
            field: "pulse",
            value: String::new(),
            reason: "缺少计费节拍".to_string(),
        })?;
        let (pulse_first, pulse_next) = parse_pulse(pulse_text).map_err(|reason| LcrError::Data {
            context: context.to_string(),
            field: "pulse",
            value: pulse_text.to_string(),
            reason,
        })?;

        Ok(RoutingEntryRecord {
            routing_entry_id: generate_numeric_id(
                &format!("{},{},{}", slot, provider_id, offer.rank),
                ROUTING_ENTRY_ID_DIGITS,
            ),
            parent: ParentRef::Slot(slot),
            prio: offer.rank,
            routing_type: RoutingType::Lcr,
            routing_id: provider_id,
            price_per_minute,
            price_per_connect: 0,
            pulse_first,
            pulse_next,
        })
    }

    /// 黑名单条目: 挂在号段下, 优先级 3, 不走 LCR, 价格/节拍全为 0
    ///
    /// 条目 ID = generate("{prefix},{description}", 5)
    pub fn build_blacklist_entries(
        &self,
        blacklist: &BTreeMap<String, String>,
    ) -> Vec<RoutingEntryRecord> {
        blacklist
            .iter()
            .map(|(prefix, desc)| RoutingEntryRecord {
                routing_entry_id: generate_numeric_id(
                    &format!("{},{}", prefix, desc),
                    ROUTING_ENTRY_ID_DIGITS,
                ),
                parent: ParentRef::Range(generate_id(prefix)),
                prio: BLACKLIST_PRIORITY,
                routing_type: RoutingType::NoLcr,
                routing_id: NumericId::NONE,
                price_per_minute: 0,
                price_per_connect: 0,
                pulse_first: 0,
                pulse_next: 0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::DestinationTariffs;

    fn offer(rank: u32, provider: &str, price: &str, pulse: Option<&str>) -> DestinationOffer {
        DestinationOffer {
            rank,
            provider: provider.to_string(),
            product: None,
            prefix: "01042".to_string(),
            price: price.to_string(),
            pulse: pulse.map(|s| s.to_string()),
            provider_url: None,
            product_url: None,
        }
    }

    fn tariffs(offers: Vec<DestinationOffer>) -> DestinationTariffs {
        let mut tariffs = DestinationTariffs::default();
        tariffs.providers.insert("Mo-So ganztags".to_string(), offers);
        tariffs
    }

    #[test]
    fn test_entries_follow_rank_and_cutoff() {
        let usa = tariffs(vec![
            offer(1, "ProviderA", "0,01 EUR/Min", Some("60/60")),
            offer(2, "ProviderB", "1,29 ct/Min", Some("1/1")),
            offer(3, "ProviderC", "1,50 ct/Min", Some("60/1")),
            offer(4, "ProviderD", "1,99 ct/Min", Some("60/60")),
        ]);
        let entries = RoutingRuleBuilder::new(3)
            .build_slot_entries(&[("Usa", &usa)])
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries.iter().map(|e| e.prio).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(entries.iter().all(|e| e.routing_type == RoutingType::Lcr));
        assert_eq!(entries[0].routing_id, NumericId(5035));
        assert_eq!(entries[0].price_per_minute, 1);
        assert_eq!(entries[1].price_per_minute, 129);
        assert_eq!((entries[2].pulse_first, entries[2].pulse_next), (60, 1));
    }

    #[test]
    fn test_missing_pulse_is_data_error() {
        let usa = tariffs(vec![offer(1, "ProviderA", "0,01 EUR/Min", None)]);
        let err = RoutingRuleBuilder::new(3)
            .build_slot_entries(&[("Usa", &usa)])
            .unwrap_err();
        assert!(matches!(err, LcrError::Data { field: "pulse", .. }));
    }

    #[test]
    fn test_missing_pulse_beyond_cutoff_is_ignored() {
        let usa = tariffs(vec![
            offer(1, "ProviderA", "0,01 EUR/Min", Some("60/60")),
            offer(2, "ProviderB", "kaputt", None),
        ]);
        let entries = RoutingRuleBuilder::new(1)
            .build_slot_entries(&[("Usa", &usa)])
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_malformed_price_is_data_error() {
        let usa = tariffs(vec![offer(1, "ProviderA", "gratis", Some("60/60"))]);
        let err = RoutingRuleBuilder::new(3)
            .build_slot_entries(&[("Usa", &usa)])
            .unwrap_err();
        assert!(matches!(err, LcrError::Data { field: "price", .. }));
    }

    #[test]
    fn test_blacklist_entries() {
        let blacklist = BTreeMap::from([("0190".to_string(), "Premium".to_string())]);
        let entries = RoutingRuleBuilder::new(3).build_blacklist_entries(&blacklist);

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.parent, ParentRef::Range(NumericId(7952)));
        assert_eq!(entry.prio, BLACKLIST_PRIORITY);
        assert_eq!(entry.routing_type, RoutingType::NoLcr);
        assert_eq!(entry.routing_id, NumericId::NONE);
        assert_eq!(
            (entry.price_per_minute, entry.price_per_connect, entry.pulse_first, entry.pulse_next),
            (0, 0, 0, 0)
        );
    }
}
