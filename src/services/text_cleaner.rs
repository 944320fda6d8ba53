//! 文本清理服务 - 业务能力层
//!
//! 去掉试卷页眉、页脚、页边提示等样板文字，减少误切分

use crate::error::AppResult;
use regex::Regex;

/// 需要整体删除的样板文字（不区分大小写）
const BOILERPLATE_PATTERNS: &[&str] = &[
    r"MARKS\s+DO\s+NOT\s+WRITE\s+IN\s+THIS\s+MARGIN",
    r"page\s+\d+",
    r"National\s+Qualifications",
    r"National\s+5\s+Mathematics",
    r"National\s+5\s+Applications\s+of\s+Mathematics",
    r"SQA\s+\|",
    r"Scottish\s+Qualifications\s+Authority",
    r"FORMULAE\s+LIST",
    r"YOU\s+MAY\s+(?:NOT\s+)?USE\s+A\s+CALCULATOR",
    r"\*X\d+\*",
    r"ADDITIONAL\s+SPACE\s+FOR\s+ANSWERS",
    r"DO\s+NOT\s+WRITE\s+ON\s+THIS\s+PAGE",
    r"\[BLANK\s+PAGE\]",
];

/// 样板文字清理器
#[derive(Debug, Clone)]
pub struct TextCleaner {
    patterns: Vec<Regex>,
    whitespace_re: Regex,
}

impl TextCleaner {
    pub fn new() -> AppResult<Self> {
        let patterns = BOILERPLATE_PATTERNS
            .iter()
            .map(|p| Regex::new(&format!("(?i){}", p)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            whitespace_re: Regex::new(r"\s+")?,
        })
    }

    /// 清理文本：删除样板文字，把连续空白压缩为一个空格
    pub fn clean(&self, text: &str) -> String {
        let stripped = self
            .patterns
            .iter()
            .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned());

        self.whitespace_re
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}
