// ==========================================
// Teltarif LCR - 引擎层
// ==========================================
// 职责: 归一化资费 -> 五张相互引用的 LCR 表
// 红线: 确定性纯函数, 同输入同输出
// ==========================================

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod id_generator;
pub mod orchestrator;
pub mod routing;
pub mod scheduler;
pub mod tariff_fields;

// 重导出核心引擎
pub use assembler::{TableAssembler, TableRows};
pub use catalog::CatalogBuilder;
pub use error::{LcrError, LcrResult};
pub use id_generator::{
    generate_id, generate_numeric_id, DEFAULT_ID_DIGITS, ROUTING_ENTRY_ID_DIGITS,
};
pub use orchestrator::{build_document, BuildResult, LcrOrchestrator};
pub use routing::{RoutingRuleBuilder, BLACKLIST_PRIORITY};
pub use scheduler::{Schedule, SlotLabel, TimeSlotScheduler};
