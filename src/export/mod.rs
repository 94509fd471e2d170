// ==========================================
// Teltarif LCR - 输出层
// ==========================================
// 职责: LcrDocument -> PBX 导入 XML -> 文件/标准输出
// ==========================================

pub mod archive;
pub mod xml;

pub use archive::{is_stdout, write_document, write_to, STDOUT_TARGET};
pub use xml::{escape_attribute, render_xml};
