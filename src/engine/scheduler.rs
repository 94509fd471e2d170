// ==========================================
// Teltarif LCR - 时段调度引擎
// ==========================================
// 职责: 由时段标签推导 (日期, 时刻) 切换点, 按 (网络, 日期) 分组
// 红线: 每个 (网络, 日期) 组有且只有一个 00:00 切换点
// ==========================================
// 输入: 资费表 + 路由条目
// 输出: SlotRecord 列表 + 补齐后的路由条目
// ==========================================

mod core;
mod label;


pub use self::core::{midnight_slot_id, slot_id, Schedule, SlotGroups, TimeSlotScheduler};
pub use label::SlotLabel;
