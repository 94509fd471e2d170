// ==========================================
// Teltarif LCR - 核心库
// ==========================================
// 职责: 归一化 teltarif 资费 -> Auerswald PBX 五张 LCR 表
// 数据流: 快照 + 配置 -> 目录 -> 时段调度/路由规则 -> 组装 -> XML
// 红线: 引擎层为确定性纯函数, I/O 只在导入层与输出层
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 表行模型与资费输入
pub mod domain;

// 引擎层 - 目录/调度/路由/组装
pub mod engine;

// 导入层 - 归一化快照
pub mod importer;

// 配置层 - 目的地/黑名单/容量
pub mod config;

// 输出层 - XML 渲染与投递
pub mod export;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DayCode, NumericId, ParentRef, RangeCategory, RoutingType, TableKind};

// 领域实体
pub use domain::{
    DestinationOffer, DestinationTariffs, LcrDocument, NetworkRecord, ProviderRecord,
    RangeRecord, RoutingEntryRecord, SlotRecord, TableCounts, TariffSnapshot,
};

// 引擎
pub use engine::{build_document, BuildResult, LcrError, LcrOrchestrator, LcrResult};

// 配置
pub use config::LcrConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "teltarif-lcr";
