use exam_question_extract::config::Config;
use exam_question_extract::error::DecodeError;
use exam_question_extract::models::loaders::DocumentDecoder;
use exam_question_extract::utils::logging;
use exam_question_extract::{App, AppError, QuestionUnit, Subject};
use std::path::Path;
use std::sync::Arc;

/// 把文件内容当作纯文本，换页符分页；内容以 CORRUPT 开头视为损坏文档
struct PlainTextDecoder;

impl DocumentDecoder for PlainTextDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        if text.starts_with("CORRUPT") {
            return Err(DecodeError::Malformed("invalid file header".to_string()));
        }
        Ok(text.split('\u{c}').map(str::to_string).collect())
    }
}

fn config_for(dir: &Path) -> Config {
    Config {
        source_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn app(config: Config) -> App {
    logging::init(false);
    App::with_decoder(config, Arc::new(PlainTextDecoder)).expect("初始化失败")
}

fn read_questions(path: &Path) -> Vec<QuestionUnit> {
    let content = std::fs::read_to_string(path).expect("读取输出文件失败");
    serde_json::from_str(&content).expect("输出不是合法的题目数组")
}

#[tokio::test]
async fn test_routes_papers_by_subject() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("2022_Applications_Paper.pdf"),
        "1. Calculate the cost of the holiday. (3 marks)\n2. Find the median.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("2022_Maths_Paper.pdf"),
        "1. What is 2+2? (2 marks) 2. Solve x+1=5. 3. Explain why. (3 marks)",
    )
    .unwrap();

    let report = app(config_for(dir.path())).run().await.unwrap();

    assert!(!report.has_failures());
    assert_eq!(report.documents_processed, 2);

    let apps = read_questions(&dir.path().join("Applications_of_Mathematics_questions.json"));
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].marks, 3);
    assert!(apps[0].text.starts_with("Calculate the cost"));

    let maths = read_questions(&dir.path().join("Mathematics_questions.json"));
    assert_eq!(
        maths,
        vec![
            QuestionUnit::new("1.", "What is 2+2? (2 marks) ", 2),
            QuestionUnit::new("2.", "Solve x+1=5. ", 1),
            QuestionUnit::new("3.", "Explain why. (3 marks)", 3),
        ]
    );
}

#[tokio::test]
async fn test_same_subject_documents_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("2021_Maths_Paper.pdf"),
        "1. From 2021 first\n2. From 2021 second\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("2022_Maths_Paper.pdf"),
        "1. From 2022 first\n2. From 2022 second\n3. From 2022 third\n",
    )
    .unwrap();

    app(config_for(dir.path())).run().await.unwrap();

    let maths = read_questions(&dir.path().join("Mathematics_questions.json"));
    let texts: Vec<_> = maths.iter().map(|q| q.text.trim()).collect();
    assert_eq!(
        texts,
        [
            "From 2021 first",
            "From 2021 second",
            "From 2022 first",
            "From 2022 second",
            "From 2022 third",
        ]
    );
    // 题号不要求跨文档唯一
    assert_eq!(maths[0].number, maths[2].number);
}

#[tokio::test]
async fn test_corrupt_document_does_not_abort_batch() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_Maths_2021.pdf"), "1. Good one\n2. Good two").unwrap();
    std::fs::write(dir.path().join("b_Maths_2022.pdf"), "CORRUPT %PDF").unwrap();
    std::fs::write(dir.path().join("c_Maths_2023.pdf"), "1. Good three").unwrap();

    let report = app(config_for(dir.path())).run().await.unwrap();

    assert_eq!(report.documents_found, 3);
    assert_eq!(report.documents_processed, 2);
    assert_eq!(report.failed_documents.len(), 1);
    assert_eq!(report.failed_documents[0].file_name, "b_Maths_2022.pdf");
    assert!(report.has_failures());

    let maths = read_questions(&dir.path().join("Mathematics_questions.json"));
    assert_eq!(maths.len(), 3);
    assert_eq!(report.subjects[0].documents, 2);
}

#[tokio::test]
async fn test_missing_source_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = app(config_for(&dir.path().join("does_not_exist")))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Source(_)));
}

#[tokio::test]
async fn test_empty_directory_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("readme.txt"), "1. not a paper").unwrap();

    let report = app(config_for(dir.path())).run().await.unwrap();

    assert_eq!(report.documents_found, 0);
    assert!(report.subjects.is_empty());
    assert!(!dir.path().join("Mathematics_questions.json").exists());
}

#[tokio::test]
async fn test_write_failure_for_one_subject_still_writes_others() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("2022_Applications_Paper.pdf"), "1. Apps question").unwrap();
    std::fs::write(dir.path().join("2022_Maths_Paper.pdf"), "1. Maths question").unwrap();
    // 用同名目录占住 Mathematics 的输出路径
    std::fs::create_dir(out.path().join("Mathematics_questions.json")).unwrap();

    let config = Config {
        output_dir: Some(out.path().to_path_buf()),
        ..config_for(dir.path())
    };
    let report = app(config).run().await.unwrap();

    assert!(report.has_failures());
    let failed: Vec<_> = report.failed_subjects().map(|s| s.subject).collect();
    assert_eq!(failed, [Subject::Mathematics]);

    let apps = read_questions(&out.path().join("Applications_of_Mathematics_questions.json"));
    assert_eq!(apps.len(), 1);
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let paper = dir.path().join("2022_Maths_Paper.pdf");
    std::fs::write(&paper, "1. First\n2. Second\n3. Third").unwrap();
    app(config_for(dir.path())).run().await.unwrap();

    std::fs::write(&paper, "1. Only one now").unwrap();
    app(config_for(dir.path())).run().await.unwrap();

    let maths = read_questions(&dir.path().join("Mathematics_questions.json"));
    assert_eq!(maths, vec![QuestionUnit::new("1.", "Only one now", 1)]);
}

#[tokio::test]
async fn test_optional_cleanup_features() {
    let dir = tempfile::tempdir().unwrap();
    let report_file = dir.path().join("report.json");
    std::fs::write(
        dir.path().join("N5_Mathematics_2022.pdf"),
        "Cover page 1. Do not open\u{c}FORMULAE LIST\u{c}1. Factorise x² - 9 fully. (2 marks)\nPage 4\n\n2. Simplify 3a + 2a.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("mi_N5_Mathematics_2022.pdf"),
        "1. Award 1 mark for (x-3)(x+3)",
    )
    .unwrap();

    let config = Config {
        strip_boilerplate: true,
        skip_leading_pages: 2,
        skip_marking_instructions: true,
        report_file: Some(report_file.clone()),
        ..config_for(dir.path())
    };
    let report = app(config).run().await.unwrap();

    assert_eq!(report.skipped_documents, ["mi_N5_Mathematics_2022.pdf"]);

    let maths = read_questions(&dir.path().join("Mathematics_questions.json"));
    assert_eq!(
        maths,
        vec![
            QuestionUnit::new("1.", "Factorise x² - 9 fully. (2 marks) ", 2),
            QuestionUnit::new("2.", "Simplify 3a + 2a.", 1),
        ]
    );

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report_file).unwrap()).unwrap();
    assert_eq!(saved["documents_processed"], 1);
    assert_eq!(saved["subjects"][0]["questions"], 2);
}

#[tokio::test]
async fn test_unclassified_papers_get_their_own_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("2019_paper2.pdf"), "1. Which subject am I?").unwrap();

    let report = app(config_for(dir.path())).run().await.unwrap();

    assert_eq!(report.subjects.len(), 1);
    assert_eq!(report.subjects[0].subject, Subject::Unclassified);
    assert!(dir.path().join("Unclassified_questions.json").exists());
}

#[tokio::test]
async fn test_document_without_questions_still_counts_for_subject() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("2021_Maths_Paper.pdf"), "FORMULAE LIST only").unwrap();
    std::fs::write(dir.path().join("2022_Maths_Paper.pdf"), "1. Solve 3x = 12.").unwrap();

    let report = app(config_for(dir.path())).run().await.unwrap();

    assert_eq!(report.subjects.len(), 1);
    assert_eq!(report.subjects[0].documents, 2);
    assert_eq!(report.subjects[0].questions, 1);
    assert_eq!(report.total_questions(), 1);
}
