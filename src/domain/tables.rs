// ==========================================
// Teltarif LCR - LCR 表行模型
// ==========================================
// 依据: Auerswald Slcr4TablesDB 导入格式
// 表: Provider / Netz / Gasse / DynRouting / RoutingEntry
// ==========================================

use crate::domain::types::{DayCode, NumericId, ParentRef, RangeCategory, RoutingType, TableKind};
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// ProviderRecord - 运营商 (SlcrProvider)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRecord {
    pub provider_id: NumericId,
    /// 拨号前缀 (vorwahl)
    pub prefix: String,
    pub name: String,
}

// ==========================================
// NetworkRecord - 目的地网络 (SlcrNetz)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRecord {
    pub netz_id: NumericId,
    pub name: String,
}

// ==========================================
// RangeRecord - 号段 (SlcrGasse)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeRecord {
    pub gassen_id: NumericId,
    /// 号段前缀 (gasse)
    pub prefix: String,
    pub name: String,
    /// 黑名单号段为 0
    pub netz_id: NumericId,
    pub category: RangeCategory,
}

// ==========================================
// SlotRecord - 时间切换点 (SlcrDynRouting)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRecord {
    pub dyn_routing_id: NumericId,
    pub netz_id: NumericId,
    pub day: DayCode,
    pub hour: u32,
    pub minute: u32,
}

impl SlotRecord {
    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }
}

// ==========================================
// RoutingEntryRecord - 路由条目 (SlcrRoutingEntry)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingEntryRecord {
    pub routing_entry_id: NumericId,
    pub parent: ParentRef,
    /// 优先级 = 排名；黑名单固定为 3
    pub prio: u32,
    pub routing_type: RoutingType,
    /// 目标 providerId；不走 LCR 时为 0
    pub routing_id: NumericId,
    /// 每分钟价格（百分之一单位）
    pub price_per_minute: u64,
    /// 每次接通价格
    pub price_per_connect: u64,
    /// 首个计费节拍（秒）
    pub pulse_first: u32,
    /// 后续计费节拍（秒）
    pub pulse_next: u32,
}

// ==========================================
// LcrDocument - 五表文档
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LcrDocument {
    pub providers: Vec<ProviderRecord>,
    pub networks: Vec<NetworkRecord>,
    pub ranges: Vec<RangeRecord>,
    pub slots: Vec<SlotRecord>,
    pub routing_entries: Vec<RoutingEntryRecord>,
}

impl LcrDocument {
    pub fn row_count(&self, table: TableKind) -> usize {
        match table {
            TableKind::Provider => self.providers.len(),
            TableKind::Netz => self.networks.len(),
            TableKind::Gasse => self.ranges.len(),
            TableKind::DynRouting => self.slots.len(),
            TableKind::RoutingEntry => self.routing_entries.len(),
        }
    }

    /// 按固定表顺序统计行数
    pub fn counts(&self) -> TableCounts {
        TableCounts(
            TableKind::ALL
                .iter()
                .map(|table| (*table, self.row_count(*table)))
                .collect(),
        )
    }
}

// ==========================================
// TableCounts - 各表行数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableCounts(pub BTreeMap<TableKind, usize>);

impl TableCounts {
    pub fn get(&self, table: TableKind) -> usize {
        self.0.get(&table).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableKind, usize)> + '_ {
        self.0.iter().map(|(table, count)| (*table, *count))
    }
}
