use crate::error::{AppError, AppResult, DecodeError, DocumentError};
use crate::models::document::SourceDocument;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::warn;

/// 文档解码能力：把原始字节转换为逐页文本
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, DecodeError>;
}

/// 基于 pdf-extract 的 PDF 解码器
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfDecoder;

impl DocumentDecoder for PdfDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| DecodeError::Malformed(format!("{:?}", e)))
    }
}

/// 文档加载器
///
/// 负责枚举源目录中的文档，并逐个读取、解码
#[derive(Clone)]
pub struct DocumentLoader {
    decoder: Arc<dyn DocumentDecoder>,
    extension: String,
    skip_leading_pages: usize,
}

impl DocumentLoader {
    /// 使用 PDF 解码器创建
    pub fn new(extension: impl Into<String>) -> Self {
        Self::with_decoder(Arc::new(PdfDecoder), extension)
    }

    /// 使用自定义解码器创建
    pub fn with_decoder(decoder: Arc<dyn DocumentDecoder>, extension: impl Into<String>) -> Self {
        Self {
            decoder,
            extension: extension.into(),
            skip_leading_pages: 0,
        }
    }

    /// 设置每份文档跳过的前几页
    pub fn skip_leading_pages(mut self, pages: usize) -> Self {
        self.skip_leading_pages = pages;
        self
    }

    /// 列出目录下所有待处理的文档
    pub async fn list_documents(&self, folder: &Path) -> AppResult<Vec<PathBuf>> {
        list_documents(folder, &self.extension).await
    }

    /// 读取并解码单个文档
    pub async fn load(&self, path: &Path) -> Result<SourceDocument, DocumentError> {
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bytes = fs::read(path)
            .await
            .map_err(|source| DocumentError::ReadFailed {
                file: file_name.clone(),
                source,
            })?;

        // 解码是 CPU 密集操作，放到阻塞线程；解码器 panic 也在这里被拦截
        let decoder = Arc::clone(&self.decoder);
        let decoded = tokio::task::spawn_blocking(move || decoder.decode(&bytes))
            .await
            .map_err(|e| DocumentError::DocumentDecodeFailure {
                file: file_name.clone(),
                source: DecodeError::Panicked(e.to_string()),
            })?;

        let pages = decoded.map_err(|source| DocumentError::DocumentDecodeFailure {
            file: file_name.clone(),
            source,
        })?;

        let page_count = pages.len();
        let text = pages
            .into_iter()
            .skip(self.skip_leading_pages)
            .collect::<Vec<_>>()
            .join("\n\n");

        tracing::debug!(
            "解码完成: {} (共 {} 页, 跳过 {} 页, {} 字符)",
            file_name,
            page_count,
            self.skip_leading_pages.min(page_count),
            text.chars().count()
        );

        Ok(SourceDocument {
            file_name,
            path: path.to_path_buf(),
            text,
        })
    }
}

/// 列出文件夹中扩展名匹配（不区分大小写）的文件，按文件名排序
pub async fn list_documents(folder: &Path, extension: &str) -> AppResult<Vec<PathBuf>> {
    let metadata = fs::metadata(folder)
        .await
        .map_err(|e| AppError::source_unavailable(folder.display().to_string(), e))?;

    if !metadata.is_dir() {
        return Err(AppError::source_unavailable(
            folder.display().to_string(),
            "不是目录",
        ));
    }

    let mut entries = fs::read_dir(folder)
        .await
        .map_err(|e| AppError::source_unavailable(folder.display().to_string(), e))?;

    let suffix = format!(".{}", extension.trim_start_matches('.').to_lowercase());
    let mut documents = Vec::new();

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::source_unavailable(folder.display().to_string(), e))?
    {
        let path = entry.path();
        let matches = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase().ends_with(&suffix))
            .unwrap_or(false);
        if !matches {
            continue;
        }

        // metadata 跟随符号链接
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => documents.push(path),
            Ok(_) => warn!("⚠️ 不是文件，跳过: {}", path.display()),
            Err(e) => warn!("⚠️ 无法访问 {}，跳过: {}", path.display(), e),
        }
    }

    // 目录遍历顺序因平台而异，排序保证处理顺序稳定
    documents.sort();

    Ok(documents)
}
