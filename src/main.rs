// ==========================================
// 扫码生产日报 - 命令行入口
// ==========================================
// 用法:
//   scan-report <snapshot.json> [--config <path>] [--format json|csv] [--locale zh-CN|en]
//
// 读取当天记录快照（ReportInput JSON）,生成分页描述写到 stdout
// ==========================================

use anyhow::{bail, Context, Result};
use scan_report::config::ReportConfigLoader;
use scan_report::engine::{find_duplicate_codes, ReportGenerator};
use scan_report::i18n::{set_locale, t, t_with_args};
use scan_report::{export, logging, ReportInput};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug)]
struct CliArgs {
    snapshot: PathBuf,
    config: Option<PathBuf>,
    format: OutputFormat,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut snapshot = None;
    let mut config = None;
    let mut format = OutputFormat::Json;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().with_context(|| t("cli.usage"))?;
                config = Some(PathBuf::from(value));
            }
            "--format" => {
                let value = args.next().with_context(|| t("cli.usage"))?;
                format = match value.trim().to_lowercase().as_str() {
                    "json" => OutputFormat::Json,
                    "csv" => OutputFormat::Csv,
                    other => bail!(t_with_args("cli.unknown_format", &[("format", other)])),
                };
            }
            "--locale" => {
                let value = args.next().with_context(|| t("cli.usage"))?;
                set_locale(value.trim());
            }
            "-h" | "--help" => {
                println!("{}", t("cli.usage"));
                std::process::exit(0);
            }
            _ if snapshot.is_none() => snapshot = Some(PathBuf::from(arg)),
            _ => bail!(t("cli.usage")),
        }
    }

    let snapshot = snapshot.with_context(|| t("cli.usage"))?;
    Ok(CliArgs {
        snapshot,
        config,
        format,
    })
}

fn main() -> Result<()> {
    logging::init();
    let args = parse_args()?;

    tracing::info!("{} v{}", scan_report::APP_NAME, scan_report::VERSION);

    if !args.snapshot.exists() {
        bail!(t_with_args(
            "cli.snapshot_not_found",
            &[("path", &args.snapshot.display().to_string())]
        ));
    }

    let loader = match &args.config {
        Some(path) => ReportConfigLoader::new().with_path(path),
        None => ReportConfigLoader::new(),
    };
    let config = loader.load().context("加载报表版式配置失败")?;

    let raw = std::fs::read_to_string(&args.snapshot)
        .with_context(|| format!("读取快照失败: {}", args.snapshot.display()))?;
    let input: ReportInput = serde_json::from_str(&raw)
        .with_context(|| format!("解析快照失败: {}", args.snapshot.display()))?;

    let generator = ReportGenerator::new(config)?;
    let pages = generator.generate(&input)?;

    let duplicates = find_duplicate_codes(input.all_records());
    if !duplicates.is_empty() {
        tracing::warn!(codes = ?duplicates.codes(), "快照中存在重复条码");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &pages)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            export::write_pages_csv(&mut out, &pages, &input.articles, generator.config())?;
        }
    }

    eprintln!(
        "{}",
        t_with_args(
            "cli.summary",
            &[
                ("pages", &pages.len().to_string()),
                ("records", &input.total_records().to_string()),
                ("duplicates", &duplicates.codes().len().to_string()),
            ]
        )
    );
    Ok(())
}
