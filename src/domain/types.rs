// ==========================================
// Teltarif LCR - 领域类型定义
// ==========================================
// 依据: Auerswald LCR 导入格式 (Slcr4TablesDB)
// 红线: 所有代码值必须与 PBX 导入 schema 一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 数字 ID (Numeric Id)
// ==========================================
// 打印时不补零: 4 位 ID 的值 42 输出为 "42"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericId(pub u32);

impl NumericId {
    /// 黑名单号段使用的空网络 ID
    pub const NONE: NumericId = NumericId(0);

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NumericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 日期代码 (Day Code / tag)
// ==========================================
// 位掩码: Mo=1 ... Fr=16, Sa=32, So/Feiertag=64+128
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum DayCode {
    Weekdays,      // 31: Mo-Fr
    Saturday,      // 32: Sa
    SundayHoliday, // 192: So, Feiertag
    Weekend,       // 224: Sa-So
    AllWeek,       // 255: Mo-So, Feiertag
}

impl DayCode {
    pub fn code(&self) -> u16 {
        match self {
            DayCode::Weekdays => 31,
            DayCode::Saturday => 32,
            DayCode::SundayHoliday => 192,
            DayCode::Weekend => 224,
            DayCode::AllWeek => 255,
        }
    }
}

impl From<DayCode> for u16 {
    fn from(day: DayCode) -> Self {
        day.code()
    }
}

impl TryFrom<u16> for DayCode {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            31 => Ok(DayCode::Weekdays),
            32 => Ok(DayCode::Saturday),
            192 => Ok(DayCode::SundayHoliday),
            224 => Ok(DayCode::Weekend),
            255 => Ok(DayCode::AllWeek),
            other => Err(format!("未知日期代码: {}", other)),
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 路由类型 (Routing Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingType {
    NoLcr, // 0: 不走 LCR (黑名单)
    Busy,  // 1: 占线
    Lcr,   // 2: LCR
}

impl RoutingType {
    pub fn code(&self) -> u8 {
        match self {
            RoutingType::NoLcr => 0,
            RoutingType::Busy => 1,
            RoutingType::Lcr => 2,
        }
    }
}

impl fmt::Display for RoutingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 号段类别 (Range Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeCategory {
    Normal,    // 0
    Blacklist, // 1
}

impl RangeCategory {
    pub fn code(&self) -> u8 {
        match self {
            RangeCategory::Normal => 0,
            RangeCategory::Blacklist => 1,
        }
    }
}

impl fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 路由条目父引用 (Parent Reference)
// ==========================================
// parentType: 0 = 号段 (Gasse), 1 = 时间切换点 (DynRouting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ParentRef {
    Range(NumericId),
    Slot(NumericId),
}

impl ParentRef {
    pub fn type_code(&self) -> u8 {
        match self {
            ParentRef::Range(_) => 0,
            ParentRef::Slot(_) => 1,
        }
    }

    pub fn id(&self) -> NumericId {
        match self {
            ParentRef::Range(id) | ParentRef::Slot(id) => *id,
        }
    }
}

// ==========================================
// 表类型 (Table Kind)
// ==========================================
// 声明顺序即输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableKind {
    #[serde(alias = "provider", alias = "providers")]
    Provider,
    #[serde(alias = "Network", alias = "network", alias = "networks")]
    Netz,
    #[serde(alias = "Range", alias = "range", alias = "ranges")]
    Gasse,
    #[serde(alias = "Slot", alias = "slot", alias = "slots")]
    DynRouting,
    #[serde(alias = "routing_entry", alias = "routing_entries")]
    RoutingEntry,
}

impl TableKind {
    /// 固定输出顺序
    pub const ALL: [TableKind; 5] = [
        TableKind::Provider,
        TableKind::Netz,
        TableKind::Gasse,
        TableKind::DynRouting,
        TableKind::RoutingEntry,
    ];

    /// PBX 表名 (不含 Slcr 前缀)
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Provider => "Provider",
            TableKind::Netz => "Netz",
            TableKind::Gasse => "Gasse",
            TableKind::DynRouting => "DynRouting",
            TableKind::RoutingEntry => "RoutingEntry",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "provider" | "providers" => Ok(TableKind::Provider),
            "netz" | "network" | "networks" => Ok(TableKind::Netz),
            "gasse" | "range" | "ranges" => Ok(TableKind::Gasse),
            "dynrouting" | "slot" | "slots" => Ok(TableKind::DynRouting),
            "routingentry" | "routing_entry" | "routing_entries" => Ok(TableKind::RoutingEntry),
            other => Err(format!("未知表名: {}", other)),
        }
    }
}
