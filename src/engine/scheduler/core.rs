use super::label::SlotLabel;
use crate::domain::tables::{RoutingEntryRecord, SlotRecord};
use crate::domain::tariff::DestinationView;
use crate::domain::types::{DayCode, NumericId, ParentRef};
use crate::engine::error::LcrResult;
use crate::engine::id_generator::{generate_id, generate_numeric_id, ROUTING_ENTRY_ID_DIGITS};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// 按 (netzId, 日期代码) 分组的切换点, 组内按时刻升序
pub type SlotGroups = BTreeMap<(NumericId, DayCode), Vec<SlotRecord>>;

/// 调度结果
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub slots: Vec<SlotRecord>,
    pub routing_entries: Vec<RoutingEntryRecord>,
    /// 补齐的 00:00 切换点数量
    pub backfilled_slots: usize,
    /// 因切换点不存在而丢弃的路由条目数量
    pub dropped_entries: usize,
}

/// 时段切换点 ID
///
/// 键 = "{netzId},{目的地},{日期代码},{时},{分}", 时分取标签原文 ("08" 而非 "8"),
/// 与 PBX 中已导入的 ID 保持一致
pub fn slot_id(netz_id: NumericId, destination: &str, label: &SlotLabel) -> NumericId {
    generate_id(&format!(
        "{},{},{},{}",
        netz_id, destination, label.day, label.start_key
    ))
}

/// 补齐的 00:00 切换点 ID
pub fn midnight_slot_id(netz_id: NumericId, day: DayCode) -> NumericId {
    generate_id(&format!("{},{},0,0", netz_id, day))
}

// ==========================================
// TimeSlotScheduler - 时段调度引擎
// ==========================================
pub struct TimeSlotScheduler {
    // 无状态引擎
}

impl TimeSlotScheduler {
    pub fn new() -> Self {
        Self {}
    }

    /// 收集切换点
    ///
    /// 只有排名 1 的资费产生切换点；其余排名经由同一切换点下的
    /// 路由条目按优先级尝试。所有标签都会被解析, 无法识别即失败。
    pub fn collect_switch_points(&self, destinations: &[DestinationView<'_>]) -> LcrResult<SlotGroups> {
        let mut groups = SlotGroups::new();

        for (dest, tariffs) in destinations {
            let netz_id = generate_id(dest);
            for (label_text, offers) in &tariffs.providers {
                let label = SlotLabel::parse(label_text)?;
                if !offers.iter().any(|offer| offer.rank <= 1) {
                    debug!(destination = %dest, label = %label_text, "时段无排名 1 资费, 不产生切换点");
                    continue;
                }

                let id = slot_id(netz_id, dest, &label);
                let group = groups.entry((netz_id, label.day)).or_default();
                if group.iter().any(|slot| slot.dyn_routing_id == id) {
                    continue;
                }
                // "0" 与 "00" 写法不同但时刻相同, 组内只保留首个
                if group
                    .iter()
                    .any(|slot| (slot.hour, slot.minute) == (label.hour, label.minute))
                {
                    warn!(destination = %dest, label = %label_text, "同一时刻已有切换点, 已跳过");
                    continue;
                }
                group.push(SlotRecord {
                    dyn_routing_id: id,
                    netz_id,
                    day: label.day,
                    hour: label.hour,
                    minute: label.minute,
                });
            }
        }

        for group in groups.values_mut() {
            group.sort_by_key(|slot| (slot.hour, slot.minute));
        }

        Ok(groups)
    }

    /// 补齐 00:00 并对齐路由条目
    ///
    /// 1) 组内无 00:00 切换点时, 新建 00:00 切换点并复制组内最晚切换点的全部路由条目
    /// 2) 父切换点不存在的路由条目被丢弃
    pub fn reconcile(&self, groups: SlotGroups, mut entries: Vec<RoutingEntryRecord>) -> Schedule {
        let mut slots = Vec::new();
        let mut cloned_entries = Vec::new();
        let mut backfilled_slots = 0;

        for ((netz_id, day), group) in groups {
            let needs_midnight = !group.iter().any(SlotRecord::is_midnight);
            if let (true, Some(last)) = (needs_midnight, group.last()) {
                let midnight_id = midnight_slot_id(netz_id, day);
                let clones = clone_entries_to(&entries, last.dyn_routing_id, midnight_id);
                debug!(
                    netz_id = %netz_id,
                    day = %day,
                    source_slot = %last.dyn_routing_id,
                    midnight_slot = %midnight_id,
                    cloned = clones.len(),
                    "补齐 00:00 切换点"
                );

                slots.push(SlotRecord {
                    dyn_routing_id: midnight_id,
                    netz_id,
                    day,
                    hour: 0,
                    minute: 0,
                });
                cloned_entries.extend(clones);
                backfilled_slots += 1;
            }
            slots.extend(group);
        }

        let known_slots: HashSet<NumericId> = slots.iter().map(|slot| slot.dyn_routing_id).collect();
        let before = entries.len();
        entries.retain(|entry| match entry.parent {
            ParentRef::Slot(id) => known_slots.contains(&id),
            ParentRef::Range(_) => true,
        });
        let dropped_entries = before - entries.len();
        if dropped_entries > 0 {
            warn!(dropped = dropped_entries, "路由条目引用的切换点不存在, 已丢弃");
        }

        entries.extend(cloned_entries);

        Schedule {
            slots,
            routing_entries: entries,
            backfilled_slots,
            dropped_entries,
        }
    }
}

impl Default for TimeSlotScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// 复制源切换点的路由条目到目标切换点, 重新生成条目 ID
fn clone_entries_to(
    entries: &[RoutingEntryRecord],
    source: NumericId,
    target: NumericId,
) -> Vec<RoutingEntryRecord> {
    entries
        .iter()
        .filter(|entry| entry.parent == ParentRef::Slot(source))
        .map(|entry| RoutingEntryRecord {
            routing_entry_id: generate_numeric_id(
                &format!("{},{},{},{}", target, entry.prio, source, entry.routing_id),
                ROUTING_ENTRY_ID_DIGITS,
            ),
            parent: ParentRef::Slot(target),
            ..entry.clone()
        })
        .collect()
}
