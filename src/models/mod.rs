pub mod collection;
pub mod document;
pub mod loaders;
pub mod question;
pub mod subject;

pub use collection::SubjectCollection;
pub use document::SourceDocument;
pub use loaders::{list_documents, DocumentDecoder, DocumentLoader, PdfDecoder};
pub use question::{QuestionUnit, DEFAULT_MARKS};
pub use subject::Subject;
