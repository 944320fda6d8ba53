pub mod question_writer;
pub mod segmenter;
pub mod subject_router;
pub mod text_cleaner;

pub use question_writer::QuestionWriter;
pub use segmenter::{QuestionSegmenter, RegexSegmenter};
pub use text_cleaner::TextCleaner;
