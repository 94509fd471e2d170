// ==========================================
// Teltarif LCR - 命令行主入口
// ==========================================
// 流程: 配置 -> 快照 -> 生成五表 -> 渲染 XML -> 写出
// 退出码: 0 成功, 2 超出表容量, 1 其他错误
// ==========================================

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use teltarif_lcr::config::{resolve_config_path, LcrConfig};
use teltarif_lcr::engine::{LcrError, LcrOrchestrator};
use teltarif_lcr::export::{is_stdout, render_xml, write_document};
use teltarif_lcr::importer::load_snapshot;
use teltarif_lcr::{logging, APP_NAME, VERSION};
use tracing::{debug, error, info};

/// 由 teltarif 资费快照生成 Auerswald LCR 导入文件
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = VERSION, about)]
struct Cli {
    /// 配置文件 (默认 ./lcr.yaml 或用户配置目录)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 归一化快照: YAML 文件或缓存目录
    #[arg(short, long, default_value = "cache")]
    snapshot: PathBuf,

    /// gzip 压缩输出
    #[arg(long)]
    gzip: bool,

    /// 静默模式, 只输出错误
    #[arg(short, long)]
    quiet: bool,

    /// 提高日志级别
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 输出文件, "-" 表示标准输出
    output: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet || is_stdout(&cli.output));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<LcrError>()
                .map(LcrError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = LcrConfig::load(&config_path)?;
    info!(
        config = %config_path.display(),
        destinations = config.destinations.len(),
        "配置已加载"
    );

    let snapshot = load_snapshot(&cli.snapshot, &config.destinations)
        .with_context(|| format!("无法加载资费快照 {}", cli.snapshot.display()))?;

    let result = LcrOrchestrator::new(&config).build(&snapshot)?;
    let xml = render_xml(&result.document);

    write_document(&cli.output, &xml, cli.gzip)
        .with_context(|| format!("无法写出 LCR 数据到 {}", cli.output))?;

    for (table, count) in result.counts.iter() {
        info!("{} {}_table entries", count, table);
    }
    debug!(
        counts = %serde_json::to_string(&result.counts)?,
        backfilled_slots = result.backfilled_slots,
        dropped_entries = result.dropped_entries,
        "生成统计"
    );
    Ok(())
}
