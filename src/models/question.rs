use serde::{Deserialize, Serialize};

/// 题目未标注分数时的默认分值
pub const DEFAULT_MARKS: u32 = 1;

/// 切分后的一道题目
///
/// 序列化结构即前端读取的记录格式：`{ "number", "text", "marks" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionUnit {
    /// 题号标签，包含句点，例如 `"5."`
    pub number: String,
    /// 题号之后到下一个题号之前的原始文本，小问 `(a)`/`(b)` 保留在内
    pub text: String,
    /// 分值
    pub marks: u32,
}

impl QuestionUnit {
    pub fn new(number: impl Into<String>, text: impl Into<String>, marks: u32) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
            marks,
        }
    }
}

impl std::fmt::Display for QuestionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题目内容以便显示（最多60个字符）
        let preview = crate::utils::logging::truncate_text(self.text.trim(), 60);
        write!(f, "{} {} [分值: {}]", self.number, preview, self.marks)
    }
}
