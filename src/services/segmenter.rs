//! 题目切分服务 - 业务能力层
//!
//! 只负责把一份文档的全文切成有序的题目列表，不关心科目和输出

use crate::error::{AppResult, MarksError};
use crate::models::question::{QuestionUnit, DEFAULT_MARKS};
use regex::Regex;
use tracing::warn;

/// 题号：数字 + 句点，后接空白或文本结尾
const LABEL_PATTERN: &str = r"([0-9]+\.)(?:\s+|$)";

/// 分数标注：`(3 marks)` / `(1 mark)`，不区分大小写
const MARKS_PATTERN: &str = r"(?i)\(\s*([0-9]+)\s*marks?";

/// 切分策略
///
/// 以后可以替换为基于版面结构的实现，调用方无需改动
pub trait QuestionSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<QuestionUnit>;
}

/// 基于正则的切分器
///
/// 纯文本匹配，不感知版面；多栏排版重排后出现的孤立数字可能被误认为题号
#[derive(Debug, Clone)]
pub struct RegexSegmenter {
    label_re: Regex,
    marks_re: Regex,
}

impl RegexSegmenter {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            label_re: Regex::new(LABEL_PATTERN)?,
            marks_re: Regex::new(MARKS_PATTERN)?,
        })
    }

    /// 提取题目文本中的分值，没有标注时返回默认值
    pub fn extract_marks(&self, text: &str) -> u32 {
        let Some(raw) = self
            .marks_re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return DEFAULT_MARKS;
        };

        match raw.parse::<u32>() {
            Ok(marks) => marks,
            Err(_) => {
                let err = MarksError::MalformedMarksValue {
                    raw: raw.to_string(),
                };
                warn!("⚠️ {}，使用默认分值 {}", err, DEFAULT_MARKS);
                DEFAULT_MARKS
            }
        }
    }

    /// 找出所有有效题号：(标签起点, 正文起点, 标签)
    fn find_labels<'t>(&self, text: &'t str) -> Vec<(usize, usize, &'t str)> {
        self.label_re
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let label = caps.get(1)?;
                starts_token(text, whole.start()).then(|| (whole.start(), whole.end(), label.as_str()))
            })
            .collect()
    }
}

impl QuestionSegmenter for RegexSegmenter {
    fn segment(&self, text: &str) -> Vec<QuestionUnit> {
        let labels = self.find_labels(text);

        labels
            .iter()
            .enumerate()
            .map(|(i, &(_, body_start, number))| {
                let body_end = labels.get(i + 1).map_or(text.len(), |next| next.0);
                let body = &text[body_start..body_end];
                QuestionUnit::new(number, body, self.extract_marks(body))
            })
            .collect()
    }
}

/// 题号前必须是文本开头或空白，避免把 `x+1=5.` 中的 `5.` 当成题号
fn starts_token(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().map_or(true, char::is_whitespace)
}
