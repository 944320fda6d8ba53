//! 科目归集服务 - 业务能力层
//!
//! 按文件名判断科目，并把各文档的题目归并为按科目划分的集合

use crate::models::collection::SubjectCollection;
use crate::models::question::QuestionUnit;
use crate::models::subject::Subject;

/// 判断文档所属科目
pub fn classify(file_name: &str) -> Subject {
    Subject::classify(file_name)
}

/// 将逐文档结果按处理顺序归并
///
/// 纯函数：输入顺序即输出顺序，不按题号或分值重排
pub fn route<I>(results: I) -> SubjectCollection
where
    I: IntoIterator<Item = (Subject, Vec<QuestionUnit>)>,
{
    results
        .into_iter()
        .fold(SubjectCollection::new(), |collection, (subject, questions)| {
            collection.merge(subject, questions)
        })
}
