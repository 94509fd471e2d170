// ==========================================
// Teltarif LCR - 领域模型层
// ==========================================
// 职责: 定义输入资费模型、LCR 表行与代码值
// 红线: 不含解析逻辑,不含引擎逻辑
// ==========================================

pub mod tables;
pub mod tariff;
pub mod types;

// 重导出核心类型
pub use tables::{
    LcrDocument, NetworkRecord, ProviderRecord, RangeRecord, RoutingEntryRecord, SlotRecord,
    TableCounts,
};
pub use tariff::{DestinationOffer, DestinationTariffs, DestinationView, TariffSnapshot};
pub use types::{DayCode, NumericId, ParentRef, RangeCategory, RoutingType, TableKind};
