// ==========================================
// Teltarif LCR - 导入层
// ==========================================
// 职责: 读取归一化资费快照 (YAML), 交给引擎层
// ==========================================

pub mod error;
pub mod snapshot_loader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use snapshot_loader::{
    destination_slug, list_snapshot_files, load_destination_file, load_snapshot,
    load_snapshot_dir, load_snapshot_file,
};
