// ==========================================
// Teltarif LCR - 文档投递
// ==========================================
// 目标: 文件 或 标准输出 ("-")
// 可选 gzip 压缩 (PBX 上传接口要求 gzip 文件)
// ==========================================

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// 标准输出目标
pub const STDOUT_TARGET: &str = "-";

/// 是否写往标准输出
pub fn is_stdout(target: &str) -> bool {
    target == STDOUT_TARGET
}

/// 写出文档
///
/// # 参数
/// - target: 输出路径, "-" 表示标准输出
/// - xml: 渲染后的文档
/// - gzip: 是否 gzip 压缩
pub fn write_document(target: &str, xml: &str, gzip: bool) -> io::Result<()> {
    if is_stdout(target) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_to(&mut handle, xml, gzip)?;
        handle.flush()?;
        return Ok(());
    }

    let file = File::create(Path::new(target))?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, xml, gzip)?;
    writer.flush()?;
    info!(output = %target, gzip, "LCR 数据已写入 {}", target);
    Ok(())
}

/// 写入任意 writer, 文档末尾补换行
pub fn write_to<W: Write>(writer: &mut W, xml: &str, gzip: bool) -> io::Result<()> {
    if gzip {
        let mut encoder = GzEncoder::new(writer, Compression::best());
        encoder.write_all(xml.as_bytes())?;
        encoder.write_all(b"\n")?;
        encoder.finish()?;
    } else {
        writer.write_all(xml.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_plain_write_appends_newline() {
        let mut buf = Vec::new();
        write_to(&mut buf, "<a></a>", false).unwrap();
        assert_eq!(buf, b"<a></a>\n");
    }

    #[test]
    fn test_gzip_write_decompresses_to_document() {
        let mut buf = Vec::new();
        write_to(&mut buf, "<a></a>", true).unwrap();

        let mut decoded = String::new();
        GzDecoder::new(buf.as_slice())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "<a></a>\n");
    }

    #[test]
    fn test_stdout_target() {
        assert!(is_stdout("-"));
        assert!(!is_stdout("lcr.xml"));
    }
}
