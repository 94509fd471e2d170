// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 临时目录与 YAML 夹具文件
// ==========================================
#![allow(dead_code)]

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 在临时目录中写入文件
///
/// # 返回
/// - PathBuf: 写入的文件路径
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// 样例配置
pub const SAMPLE_CONFIG: &str = r#"
destinations:
  - Usa
  - Polen (Mobilfunk)
blacklist:
  "0190": Premium
limits:
  Provider: 32
  Network: 8
  Range: 16
  Slot: 64
  RoutingEntry: 256
max_alternatives: 2
"#;

/// Usa 缓存文件 (usa_festnetz.yaml)
pub const USA_CACHE: &str = r#"
providers:
  "Mo-So ganztags":
    - rank: 1
      provider: ProviderA
      prefix: "01042"
      price: 0,01 EUR/Min
      pulse: 60/60
    - rank: 2
      provider: ProviderB
      product: Spar
      prefix: "01013"
      price: 0,90 ct/Min
prefixes:
  - "001"
notes:
  - Alle Tarife haben den Takt 1/1
updated_at: "2024-05-01"
"#;

/// Polen Mobilfunk 缓存文件 (polen_handy.yaml)
pub const POLEN_CACHE: &str = r#"
providers:
  "Mo-Fr 08-18 Uhr":
    - rank: 1
      provider: ProviderC
      prefix: "01088"
      price: 2,10 ct/Min
      pulse: 60/60
  "Sa, So 07:30-19 Uhr":
    - rank: 1
      provider: ProviderA
      prefix: "01042"
      price: 1,90 ct/Min
      pulse: 60/1
prefixes:
  - "004850"
notes: []
"#;

/// 创建包含两个目的地缓存文件的临时目录
pub fn create_cache_dir() -> Result<TempDir, Box<dyn Error>> {
    let dir = TempDir::new()?;
    write_file(&dir, "usa_festnetz.yaml", USA_CACHE)?;
    write_file(&dir, "polen_handy.yaml", POLEN_CACHE)?;
    Ok(dir)
}
