// ==========================================
// Teltarif LCR - PBX 导入文档渲染
// ==========================================
// 格式: XML 声明 + Slcr4TablesDB 根 + 五个 Slcr<表>_table
// 红线: 每行一个元素, 无缩进, 显式闭合标签
//       属性顺序与 PBX 字段顺序一致
// ==========================================

use crate::domain::tables::LcrDocument;
use crate::domain::types::TableKind;

pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";
pub const ROOT_ELEMENT: &str = "Slcr4TablesDB";

/// 渲染完整导入文档
///
/// # 参数
/// - document: 已组装 (已排序, 已去重) 的五表文档
///
/// # 返回
/// - 以换行分隔元素的 XML 文本 (末尾无换行)
pub fn render_xml(document: &LcrDocument) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(XML_DECLARATION.to_string());
    lines.push(format!("<{}>", ROOT_ELEMENT));

    for table in TableKind::ALL {
        let rows = table_rows(document, table);
        let table_element = format!("Slcr{}_table", table.as_str());
        if rows.is_empty() {
            lines.push(format!("<{0}></{0}>", table_element));
            continue;
        }
        lines.push(format!("<{}>", table_element));
        lines.extend(rows);
        lines.push(format!("</{}>", table_element));
    }

    lines.push(format!("</{}>", ROOT_ELEMENT));
    lines.join("\n")
}

/// 单表全部行元素
fn table_rows(document: &LcrDocument, table: TableKind) -> Vec<String> {
    let element = format!("Slcr{}", table.as_str());
    match table {
        TableKind::Provider => document
            .providers
            .iter()
            .map(|p| {
                render_element(
                    &element,
                    &[
                        ("providerId", p.provider_id.to_string()),
                        ("vorwahl", p.prefix.clone()),
                        ("name", p.name.clone()),
                    ],
                )
            })
            .collect(),
        TableKind::Netz => document
            .networks
            .iter()
            .map(|n| {
                render_element(
                    &element,
                    &[("netzId", n.netz_id.to_string()), ("name", n.name.clone())],
                )
            })
            .collect(),
        TableKind::Gasse => document
            .ranges
            .iter()
            .map(|r| {
                render_element(
                    &element,
                    &[
                        ("gassenId", r.gassen_id.to_string()),
                        ("gasse", r.prefix.clone()),
                        ("name", r.name.clone()),
                        ("netzId", r.netz_id.to_string()),
                        ("category", r.category.to_string()),
                    ],
                )
            })
            .collect(),
        TableKind::DynRouting => document
            .slots
            .iter()
            .map(|s| {
                render_element(
                    &element,
                    &[
                        ("dynRoutingId", s.dyn_routing_id.to_string()),
                        ("netzId", s.netz_id.to_string()),
                        ("tag", s.day.to_string()),
                        ("schaltStunde", s.hour.to_string()),
                        ("schaltMinute", s.minute.to_string()),
                    ],
                )
            })
            .collect(),
        TableKind::RoutingEntry => document
            .routing_entries
            .iter()
            .map(|e| {
                render_element(
                    &element,
                    &[
                        ("routingEntryId", e.routing_entry_id.to_string()),
                        ("parentType", e.parent.type_code().to_string()),
                        ("parentId", e.parent.id().to_string()),
                        ("prio", e.prio.to_string()),
                        ("routingType", e.routing_type.to_string()),
                        ("routingId", e.routing_id.to_string()),
                        ("preisProMinute", e.price_per_minute.to_string()),
                        ("preisProVerbg", e.price_per_connect.to_string()),
                        ("taktErster", e.pulse_first.to_string()),
                        ("taktWeiterer", e.pulse_next.to_string()),
                    ],
                )
            })
            .collect(),
    }
}

fn render_element(name: &str, attributes: &[(&str, String)]) -> String {
    let attrs: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, escape_attribute(value)))
        .collect();
    format!("<{0} {1}></{0}>", name, attrs.join(" "))
}

/// 属性值转义
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#09;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tables::{NetworkRecord, ProviderRecord};
    use crate::domain::types::NumericId;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("A & B"), "A &amp; B");
        assert_eq!(escape_attribute("\"x\" <y>"), "&quot;x&quot; &lt;y&gt;");
        assert_eq!(escape_attribute("Österreich"), "Österreich");
    }

    #[test]
    fn test_empty_document_keeps_all_tables() {
        let xml = render_xml(&LcrDocument::default());
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], XML_DECLARATION);
        assert_eq!(lines[1], "<Slcr4TablesDB>");
        assert_eq!(lines[2], "<SlcrProvider_table></SlcrProvider_table>");
        assert_eq!(lines[6], "<SlcrRoutingEntry_table></SlcrRoutingEntry_table>");
        assert_eq!(lines[7], "</Slcr4TablesDB>");
    }

    #[test]
    fn test_attribute_order_matches_pbx_fields() {
        let document = LcrDocument {
            providers: vec![ProviderRecord {
                provider_id: NumericId(5035),
                prefix: "01042".to_string(),
                name: "ProviderA".to_string(),
            }],
            networks: vec![NetworkRecord {
                netz_id: NumericId(2474),
                name: "Usa".to_string(),
            }],
            ..Default::default()
        };
        let xml = render_xml(&document);
        assert!(xml.contains(
            "<SlcrProvider providerId=\"5035\" vorwahl=\"01042\" name=\"ProviderA\"></SlcrProvider>"
        ));
        assert!(xml.contains("<SlcrNetz netzId=\"2474\" name=\"Usa\"></SlcrNetz>"));
    }
}
