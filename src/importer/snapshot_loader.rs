// ==========================================
// Teltarif LCR - 归一化快照加载
// ==========================================
// 支持: 单个 YAML 文件 (目的地 -> 资费表)
//       或按目的地 slug 命名的 YAML 目录 (抓取缓存格式)
// 加载时按页面备注补全默认节拍/产品名
// ==========================================

use crate::domain::tariff::{DestinationTariffs, TariffSnapshot};
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FIXED_NETWORK: &str = "festnetz";
const MOBILE_NETWORK: &str = "mobilfunk";
const MOBILE_NETWORK_SLUG: &str = "handy";

/// 目的地名称 -> 缓存文件名 (不含扩展名)
///
/// # 示例
/// - "Usa" -> "usa_festnetz"
/// - "Polen (Mobilfunk)" -> "polen_handy"
/// - "Österreich (Festnetz)" -> "oesterreich_festnetz"
/// - "Usa (New York)" -> "usa_festnetz_new-york"
pub fn destination_slug(destination: &str) -> String {
    let lower = destination.trim().to_lowercase();

    let (country, mut network, mut region) = match lower.split_once(char::is_whitespace) {
        Some((country, rest)) => {
            // "(Netz)" 去掉首尾括号
            let mut chars = rest.trim().chars();
            chars.next();
            chars.next_back();
            let inner = chars.as_str().to_string();
            if inner == FIXED_NETWORK || inner == MOBILE_NETWORK {
                (country.to_string(), inner, None)
            } else {
                (country.to_string(), FIXED_NETWORK.to_string(), Some(inner))
            }
        }
        None => (lower.clone(), FIXED_NETWORK.to_string(), None),
    };

    if network == MOBILE_NETWORK {
        network = MOBILE_NETWORK_SLUG.to_string();
    }
    let country = country
        .replace('ß', "ss")
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue");
    region = region.map(|r| r.replace(' ', "-"));

    match region {
        Some(region) => format!("{}_{}_{}", country, network, region),
        None => format!("{}_{}", country, network),
    }
}

/// 加载单目的地资费文件
pub fn load_destination_file(path: &Path) -> ImportResult<DestinationTariffs> {
    let content = read_file(path)?;
    let mut tariffs: DestinationTariffs =
        serde_yaml::from_str(&content).map_err(|e| yaml_error(path, e))?;
    tariffs.apply_note_defaults();
    Ok(tariffs)
}

/// 加载单文件快照 (目的地 -> 资费表)
pub fn load_snapshot_file(path: &Path) -> ImportResult<TariffSnapshot> {
    let content = read_file(path)?;
    let mut snapshot: TariffSnapshot =
        serde_yaml::from_str(&content).map_err(|e| yaml_error(path, e))?;
    for tariffs in snapshot.destinations.values_mut() {
        tariffs.apply_note_defaults();
    }
    info!(
        path = %path.display(),
        destinations = snapshot.destinations.len(),
        "快照文件已加载"
    );
    Ok(snapshot)
}

/// 加载目录快照: 每个配置目的地对应 <slug>.yaml
pub fn load_snapshot_dir(dir: &Path, destinations: &[String]) -> ImportResult<TariffSnapshot> {
    let mut snapshot = TariffSnapshot::new();

    for dest in destinations {
        let file = dir.join(format!("{}.yaml", destination_slug(dest)));
        if !file.is_file() {
            return Err(ImportError::MissingDestination {
                destination: dest.clone(),
                expected_file: file.display().to_string(),
            });
        }
        debug!(destination = %dest, file = %file.display(), "加载目的地资费");
        snapshot.insert(dest.clone(), load_destination_file(&file)?);
    }

    info!(
        dir = %dir.display(),
        destinations = snapshot.destinations.len(),
        "快照目录已加载"
    );
    Ok(snapshot)
}

/// 按路径类型加载快照
pub fn load_snapshot(path: &Path, destinations: &[String]) -> ImportResult<TariffSnapshot> {
    if path.is_dir() {
        load_snapshot_dir(path, destinations)
    } else if path.is_file() {
        load_snapshot_file(path)
    } else {
        Err(ImportError::FileNotFound(path.display().to_string()))
    }
}

/// 目录下全部 .yaml 文件, 按文件名排序
pub fn list_snapshot_files(dir: &Path) -> ImportResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ImportError::FileNotFound(dir.display().to_string()));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "yaml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_file(path: &Path) -> ImportResult<String> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn yaml_error(path: &Path, err: serde_yaml::Error) -> ImportError {
    ImportError::YamlParseError {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
