use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 源目录相关错误（致命）
    #[error("源目录错误: {0}")]
    Source(#[from] SourceError),
    /// 单个文档解码错误（可恢复）
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
    /// 输出文件写入错误（可恢复）
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 正则表达式编译失败
    #[error("正则表达式错误: {0}")]
    Pattern(#[from] regex::Error),
}

/// 源目录错误
#[derive(Debug, Error)]
pub enum SourceError {
    /// 目录不存在或无法读取
    #[error("源目录不可用 ({path}): {reason}")]
    SourceUnavailable { path: String, reason: String },
}

/// 文档错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 读取文件字节失败
    #[error("读取文档失败 ({file}): {source}")]
    ReadFailed {
        file: String,
        #[source]
        source: std::io::Error,
    },
    /// 文档无法解码为文本（损坏或格式不符）
    #[error("文档解码失败 ({file}): {source}")]
    DocumentDecodeFailure {
        file: String,
        #[source]
        source: DecodeError,
    },
}

impl DocumentError {
    /// 出错的文件名
    pub fn file(&self) -> &str {
        match self {
            DocumentError::ReadFailed { file, .. }
            | DocumentError::DocumentDecodeFailure { file, .. } => file,
        }
    }
}

/// 解码器错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 字节不是合法的文档格式
    #[error("格式无效: {0}")]
    Malformed(String),
    /// 解码器在阻塞线程中异常退出
    #[error("解码器异常退出: {0}")]
    Panicked(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 写入输出文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 序列化失败
    #[error("序列化失败 ({path}): {source}")]
    SerializeFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 读取配置文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 分数标注错误
///
/// 只在日志中出现，分数解析失败时回退到默认值 1
#[derive(Debug, Error)]
pub enum MarksError {
    #[error("无法解析分数标注: {raw}")]
    MalformedMarksValue { raw: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置值无效
    #[error("配置项 {field} 无效: {reason}")]
    InvalidValue { field: String, reason: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建源目录不可用错误
    pub fn source_unavailable(path: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Source(SourceError::SourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        })
    }

    /// 创建输出写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailure {
            path: path.into(),
            source,
        })
    }

    /// 是否为致命错误（需要中止整个批次）
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Source(_) | AppError::Config(_) | AppError::Pattern(_)
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
