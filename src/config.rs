use crate::error::{AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 试卷 PDF 存放目录
    pub source_dir: PathBuf,
    /// 输出目录（为空时写回源目录）
    pub output_dir: Option<PathBuf>,
    /// 源文档扩展名（不区分大小写）
    pub document_extension: String,
    /// 输出文件扩展名
    pub output_extension: String,
    /// 是否清理页眉页脚等样板文字
    pub strip_boilerplate: bool,
    /// 每份试卷跳过的前几页（封面、公式页）
    pub skip_leading_pages: usize,
    /// 是否跳过评分说明文件（文件名含 `mi_`）
    pub skip_marking_instructions: bool,
    /// 运行报告输出路径
    pub report_file: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("exam_papers"),
            output_dir: None,
            document_extension: "pdf".to_string(),
            output_extension: "json".to_string(),
            strip_boilerplate: false,
            skip_leading_pages: 0,
            skip_marking_instructions: false,
            report_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::default().apply_env()
    }

    /// 从 TOML 文件加载配置，再叠加环境变量
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FileError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;

        config.apply_env()
    }

    fn apply_env(mut self) -> AppResult<Self> {
        if let Ok(v) = std::env::var("EXAM_SOURCE_DIR") {
            self.source_dir = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("EXAM_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("EXAM_REPORT_FILE") {
            self.report_file = Some(PathBuf::from(v));
        }
        self.strip_boilerplate = env_parse("STRIP_BOILERPLATE", "bool")?.unwrap_or(self.strip_boilerplate);
        self.skip_leading_pages = env_parse("SKIP_LEADING_PAGES", "usize")?.unwrap_or(self.skip_leading_pages);
        self.skip_marking_instructions =
            env_parse("SKIP_MARKING_INSTRUCTIONS", "bool")?.unwrap_or(self.skip_marking_instructions);
        self.verbose_logging = env_parse("VERBOSE_LOGGING", "bool")?.unwrap_or(self.verbose_logging);
        Ok(self)
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if self.document_extension.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "document_extension".to_string(),
                reason: "不能为空".to_string(),
            }
            .into());
        }
        if self.output_extension.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output_extension".to_string(),
                reason: "不能为空".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// 实际的输出目录
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.source_dir)
    }
}

fn env_parse<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}
