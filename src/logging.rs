// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 输出到 stderr, 文档可直接写往 stdout
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 由命令行开关推导默认日志级别
///
/// # 参数
/// - verbosity: -v 次数
/// - quiet: --quiet 或输出到标准输出
pub fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbosity > 0 {
        "debug"
    } else {
        "info"
    }
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 覆盖推导出的级别
///   例如: RUST_LOG=teltarif_lcr=trace
///
/// # 示例
/// ```no_run
/// use teltarif_lcr::logging;
/// logging::init(0, false);
/// ```
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .with_thread_ids(false)
        .with_line_number(verbosity > 1)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), "info");
        assert_eq!(level_for(2, false), "debug");
        assert_eq!(level_for(2, true), "error");
    }
}
