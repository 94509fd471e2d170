// ==========================================
// Teltarif LCR - 五表组装引擎
// ==========================================
// 职责: 固定顺序组装五表, 按数值 ID 排序, 校验各表行数上限
// 红线: 任一表超限即整体失败, 不返回部分文档
// ==========================================

use crate::config::LcrConfig;
use crate::domain::tables::{
    LcrDocument, NetworkRecord, ProviderRecord, RangeRecord, RoutingEntryRecord, SlotRecord,
    TableCounts,
};
use crate::domain::types::{NumericId, TableKind};
use crate::engine::error::{LcrError, LcrResult};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, warn};

/// 组装前的五表行
#[derive(Debug, Clone, Default)]
pub struct TableRows {
    pub providers: Vec<ProviderRecord>,
    pub networks: Vec<NetworkRecord>,
    pub ranges: Vec<RangeRecord>,
    pub slots: Vec<SlotRecord>,
    pub routing_entries: Vec<RoutingEntryRecord>,
}

// ==========================================
// TableAssembler - 五表组装引擎
// ==========================================
pub struct TableAssembler {
    limits: BTreeMap<TableKind, usize>,
}

impl TableAssembler {
    /// 构造函数
    ///
    /// # 参数
    /// - limits: 各表最大行数, 未配置的表不限
    pub fn new(limits: BTreeMap<TableKind, usize>) -> Self {
        Self { limits }
    }

    /// 按配置逐表读取上限
    pub fn from_config(config: &LcrConfig) -> Self {
        Self::new(
            TableKind::ALL
                .iter()
                .filter_map(|table| config.limit_for(*table).map(|limit| (*table, limit)))
                .collect(),
        )
    }

    /// 组装文档
    ///
    /// # 返回
    /// - Ok((文档, 行数)): 全部表均未超限
    /// - Err(LcrError::Capacity): 第一个超限的表 (按输出顺序)
    pub fn assemble(&self, rows: TableRows) -> LcrResult<(LcrDocument, TableCounts)> {
        let document = LcrDocument {
            providers: sort_by_id(TableKind::Provider, rows.providers, |r| r.provider_id),
            networks: sort_by_id(TableKind::Netz, rows.networks, |r| r.netz_id),
            ranges: sort_by_id(TableKind::Gasse, rows.ranges, |r| r.gassen_id),
            slots: sort_by_id(TableKind::DynRouting, rows.slots, |r| r.dyn_routing_id),
            routing_entries: sort_by_id(TableKind::RoutingEntry, rows.routing_entries, |r| {
                r.routing_entry_id
            }),
        };

        let counts = document.counts();
        self.check_limits(&counts)?;

        debug!(?counts, "五表组装完成");
        Ok((document, counts))
    }

    /// 行数上限校验
    pub fn check_limits(&self, counts: &TableCounts) -> LcrResult<()> {
        for (table, count) in counts.iter() {
            if let Some(&limit) = self.limits.get(&table) {
                if count > limit {
                    return Err(LcrError::Capacity { table, count, limit });
                }
            }
        }
        Ok(())
    }
}

/// 按数值 ID 升序排列并去重
///
/// 同 ID 保留首次出现的行；内容不同的碰撞记录告警
fn sort_by_id<T, F>(table: TableKind, rows: Vec<T>, id_of: F) -> Vec<T>
where
    T: PartialEq + Debug,
    F: Fn(&T) -> NumericId,
{
    let mut by_id: BTreeMap<NumericId, T> = BTreeMap::new();
    for row in rows {
        match by_id.entry(id_of(&row)) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(existing) => {
                if existing.get() != &row {
                    warn!(
                        table = %table,
                        id = %existing.key(),
                        kept = ?existing.get(),
                        dropped = ?row,
                        "ID 碰撞, 保留首次出现的行"
                    );
                }
            }
        }
    }
    by_id.into_values().collect()
}
