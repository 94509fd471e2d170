// ==========================================
// Teltarif LCR - 引擎编排器
// ==========================================
// 用途: 协调目录构建 -> 时段调度 + 路由规则 -> 五表组装
// 红线: 纯批处理, 不做 I/O, 不保留跨调用状态
// ==========================================

use crate::config::LcrConfig;
use crate::domain::tables::{LcrDocument, TableCounts};
use crate::domain::tariff::TariffSnapshot;
use crate::engine::assembler::{TableAssembler, TableRows};
use crate::engine::catalog::CatalogBuilder;
use crate::engine::error::LcrResult;
use crate::engine::routing::RoutingRuleBuilder;
use crate::engine::scheduler::TimeSlotScheduler;
use tracing::{debug, info, instrument, warn};

// ==========================================
// BuildResult - 生成结果
// ==========================================
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub document: LcrDocument,
    pub counts: TableCounts,
    /// 补齐的 00:00 切换点数量
    pub backfilled_slots: usize,
    /// 因切换点缺失丢弃的路由条目数量
    pub dropped_entries: usize,
}

// ==========================================
// LcrOrchestrator - 引擎编排器
// ==========================================
pub struct LcrOrchestrator<'a> {
    config: &'a LcrConfig,
    catalog: CatalogBuilder,
    scheduler: TimeSlotScheduler,
    rules: RoutingRuleBuilder,
    assembler: TableAssembler,
}

impl<'a> LcrOrchestrator<'a> {
    /// 创建编排器
    ///
    /// # 参数
    /// - config: 已校验的生成配置
    pub fn new(config: &'a LcrConfig) -> Self {
        Self {
            catalog: CatalogBuilder::new(config.max_alternatives),
            scheduler: TimeSlotScheduler::new(),
            rules: RoutingRuleBuilder::new(config.max_alternatives),
            assembler: TableAssembler::from_config(config),
            config,
        }
    }

    /// 由归一化快照生成 LCR 文档
    ///
    /// 相同快照 + 相同配置 => 相同文档
    #[instrument(skip(self, snapshot), fields(
        destinations = self.config.destinations.len(),
        max_alternatives = self.config.max_alternatives
    ))]
    pub fn build(&self, snapshot: &TariffSnapshot) -> LcrResult<BuildResult> {
        self.config.validate()?;

        for dest in snapshot.unconfigured(&self.config.destinations) {
            warn!(destination = %dest, "快照中的目的地未配置, 已跳过");
        }
        for dest in snapshot.missing(&self.config.destinations) {
            warn!(destination = %dest, "配置的目的地在快照中缺失, 只生成网络行");
        }
        let destinations = snapshot.ordered(&self.config.destinations);
        info!(destinations = destinations.len(), "开始生成 LCR 表");

        // ==========================================
        // 步骤1: 目录构建
        // ==========================================
        debug!("步骤1: 构建运营商/网络/号段目录");
        let providers = self.catalog.build_providers(&destinations);
        let networks = self.catalog.build_networks(&self.config.destinations);
        let ranges = self.catalog.build_ranges(&destinations, &self.config.blacklist);

        // ==========================================
        // 步骤2: 时段调度 + 路由规则
        // ==========================================
        debug!("步骤2: 推导切换点并生成路由条目");
        let groups = self.scheduler.collect_switch_points(&destinations)?;
        let slot_entries = self.rules.build_slot_entries(&destinations)?;
        let schedule = self.scheduler.reconcile(groups, slot_entries);

        let mut routing_entries = schedule.routing_entries;
        routing_entries.extend(self.rules.build_blacklist_entries(&self.config.blacklist));

        // ==========================================
        // 步骤3: 五表组装 + 容量校验
        // ==========================================
        debug!("步骤3: 组装五表并校验容量");
        let (document, counts) = self.assembler.assemble(TableRows {
            providers,
            networks,
            ranges,
            slots: schedule.slots,
            routing_entries,
        })?;

        info!(
            backfilled_slots = schedule.backfilled_slots,
            dropped_entries = schedule.dropped_entries,
            "LCR 表生成完成"
        );

        Ok(BuildResult {
            document,
            counts,
            backfilled_slots: schedule.backfilled_slots,
            dropped_entries: schedule.dropped_entries,
        })
    }
}

/// 便捷入口: 一次性生成文档与行数
pub fn build_document(
    snapshot: &TariffSnapshot,
    config: &LcrConfig,
) -> LcrResult<(LcrDocument, TableCounts)> {
    let result = LcrOrchestrator::new(config).build(snapshot)?;
    Ok((result.document, result.counts))
}
