use anyhow::{Context, Result};
use clap::Parser;
use exam_question_extract::utils::logging;
use exam_question_extract::{App, Config};
use std::path::PathBuf;
use std::process::ExitCode;

/// 从试卷 PDF 中提取题目并按科目输出 JSON
#[derive(Parser, Debug)]
#[command(name = "exam-question-extract", version, about)]
struct Cli {
    /// 试卷 PDF 所在目录
    #[arg(env = "EXAM_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// 输出目录（默认写回源目录）
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 清理页眉页脚等样板文字
    #[arg(long)]
    strip_boilerplate: bool,

    /// 每份文档跳过的前几页（封面、公式页）
    #[arg(long)]
    skip_leading_pages: Option<usize>,

    /// 跳过评分说明文件（文件名含 mi_）
    #[arg(long)]
    skip_marking_instructions: bool,

    /// 运行报告（JSON）输出路径
    #[arg(long)]
    report_file: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
            None => Config::from_env().context("无法从环境变量加载配置")?,
        };

        if let Some(source_dir) = self.source_dir {
            config.source_dir = source_dir;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = Some(output_dir);
        }
        if let Some(pages) = self.skip_leading_pages {
            config.skip_leading_pages = pages;
        }
        if let Some(report_file) = self.report_file {
            config.report_file = Some(report_file);
        }
        config.strip_boilerplate |= self.strip_boilerplate;
        config.skip_marking_instructions |= self.skip_marking_instructions;
        config.verbose_logging |= self.verbose;

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // 加载配置
    let config = Cli::parse().into_config()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let report = App::initialize(config)?.run().await?;

    if report.has_failures() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
