use std::path::PathBuf;

/// 已解码为纯文本的源文档
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// 文件名（用于科目判断和日志）
    pub file_name: String,
    /// 完整路径
    pub path: PathBuf,
    /// 解码后的全文
    pub text: String,
}
