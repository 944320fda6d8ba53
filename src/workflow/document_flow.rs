//! 文档处理流程 - 流程层
//!
//! 核心职责：定义"一份文档"的文本处理流程
//!
//! 流程顺序：
//! 1. 清理样板文字（可选）
//! 2. 切分题目

use crate::config::Config;
use crate::error::AppResult;
use crate::models::document::SourceDocument;
use crate::models::question::QuestionUnit;
use crate::services::{QuestionSegmenter, RegexSegmenter, TextCleaner};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;
use tracing::{debug, info, warn};

/// 文档处理流程
///
/// - 不读写文件
/// - 不关心科目归并
/// - 只依赖业务能力（services）
pub struct DocumentFlow {
    segmenter: Box<dyn QuestionSegmenter>,
    cleaner: Option<TextCleaner>,
    verbose_logging: bool,
}

impl DocumentFlow {
    /// 根据配置创建默认流程（正则切分）
    pub fn new(config: &Config) -> AppResult<Self> {
        let cleaner = if config.strip_boilerplate {
            Some(TextCleaner::new()?)
        } else {
            None
        };

        Ok(Self {
            segmenter: Box::new(RegexSegmenter::new()?),
            cleaner,
            verbose_logging: config.verbose_logging,
        })
    }

    /// 替换切分策略
    pub fn with_segmenter(mut self, segmenter: Box<dyn QuestionSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn run(&self, document: &SourceDocument, ctx: &DocumentCtx) -> Vec<QuestionUnit> {
        let text = match &self.cleaner {
            Some(cleaner) => {
                let cleaned = cleaner.clean(&document.text);
                debug!(
                    "{} 清理样板文字: {} → {} 字符",
                    ctx,
                    document.text.chars().count(),
                    cleaned.chars().count()
                );
                cleaned
            }
            None => document.text.clone(),
        };

        let questions = self.segmenter.segment(&text);

        if questions.is_empty() {
            warn!("{} ⚠️ 未找到任何题号: {}", ctx, ctx.file_name);
        } else {
            info!(
                "{} ✓ 切分出 {} 道题目 (科目: {})",
                ctx,
                questions.len(),
                ctx.subject
            );
        }

        if self.verbose_logging {
            self.log_questions(ctx, &questions);
        }

        questions
    }

    fn log_questions(&self, ctx: &DocumentCtx, questions: &[QuestionUnit]) {
        for question in questions {
            info!(
                "{}   {} {} [分值: {}]",
                ctx,
                question.number,
                truncate_text(question.text.trim(), 80),
                question.marks
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subject::Subject;
    use std::path::PathBuf;

    fn document(text: &str) -> SourceDocument {
        SourceDocument {
            file_name: "2022_Maths_Paper.pdf".to_string(),
            path: PathBuf::from("2022_Maths_Paper.pdf"),
            text: text.to_string(),
        }
    }

    fn ctx() -> DocumentCtx {
        DocumentCtx::new(1, 1, "2022_Maths_Paper.pdf".to_string(), Subject::Mathematics)
    }

    struct OneQuestionPerLine;

    impl QuestionSegmenter for OneQuestionPerLine {
        fn segment(&self, text: &str) -> Vec<QuestionUnit> {
            text.lines()
                .enumerate()
                .map(|(i, line)| QuestionUnit::new(format!("{}.", i + 1), line, 1))
                .collect()
        }
    }

    #[test]
    fn test_run_without_cleaning_keeps_raw_text() {
        let flow = DocumentFlow::new(&Config::default()).unwrap();
        let questions = flow.run(&document("Page 2\n1. Solve 2x = 8 for x.\n2. Expand 3(a+b)."), &ctx());

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "Solve 2x = 8 for x.\n");
    }

    #[test]
    fn test_run_with_cleaning_strips_boilerplate() {
        let config = Config {
            strip_boilerplate: true,
            ..Default::default()
        };
        let flow = DocumentFlow::new(&config).unwrap();
        let questions = flow.run(
            &document("1. Solve 2x = 8 for x.\nMARKS DO NOT WRITE IN THIS MARGIN\n\n2. Expand 3(a+b)."),
            &ctx(),
        );

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "Solve 2x = 8 for x. ");
    }

    #[test]
    fn test_segmenter_is_replaceable() {
        let flow = DocumentFlow::new(&Config::default())
            .unwrap()
            .with_segmenter(Box::new(OneQuestionPerLine));
        let questions = flow.run(&document("first\nsecond\nthird"), &ctx());

        let numbers: Vec<_> = questions.iter().map(|q| q.number.as_str()).collect();
        assert_eq!(numbers, ["1.", "2.", "3."]);
    }
}
