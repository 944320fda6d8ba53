use crate::models::question::QuestionUnit;
use crate::models::subject::Subject;

/// 按科目归集的题目
///
/// 科目按首次出现的顺序排列；同一科目内先按文档处理顺序、再按文档内题号出现顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectCollection {
    entries: Vec<(Subject, Vec<QuestionUnit>)>,
}

impl SubjectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一份文档的题目，返回新的集合
    pub fn merge(mut self, subject: Subject, questions: Vec<QuestionUnit>) -> Self {
        match self.entries.iter_mut().find(|(s, _)| *s == subject) {
            Some((_, existing)) => existing.extend(questions),
            None => self.entries.push((subject, questions)),
        }
        self
    }

    pub fn get(&self, subject: Subject) -> Option<&[QuestionUnit]> {
        self.entries
            .iter()
            .find(|(s, _)| *s == subject)
            .map(|(_, questions)| questions.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, &[QuestionUnit])> {
        self.entries.iter().map(|(s, q)| (*s, q.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 所有科目的题目总数
    pub fn total_questions(&self) -> usize {
        self.entries.iter().map(|(_, q)| q.len()).sum()
    }
}
