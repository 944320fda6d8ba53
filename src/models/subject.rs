/// 科目枚举
///
/// 文件名只区分两个科目，无法判断的文件归入 `Unclassified` 供人工复核
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Subject {
    /// 数学
    Mathematics,
    /// 应用数学
    #[serde(rename = "Applications of Mathematics")]
    ApplicationsOfMathematics,
    /// 无法分类
    Unclassified,
}

impl Subject {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::ApplicationsOfMathematics => "Applications of Mathematics",
            Subject::Unclassified => "Unclassified",
        }
    }

    /// 输出文件名前缀：空白替换为 `_`
    pub fn file_stem(self) -> String {
        self.name()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// 根据文件名判断科目
    ///
    /// - 含 `Applications`（区分大小写）→ 应用数学
    /// - 仅以其他大小写形式含 `applications` → 无法分类
    /// - 含 `math`（不区分大小写）→ 数学
    /// - 其他 → 无法分类
    pub fn classify(file_name: &str) -> Self {
        if file_name.contains("Applications") {
            return Subject::ApplicationsOfMathematics;
        }

        let lower = file_name.to_lowercase();
        if lower.contains("applications") {
            return Subject::Unclassified;
        }
        if lower.contains("math") {
            return Subject::Mathematics;
        }

        Subject::Unclassified
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
