//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批处理调度和统计，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理一次运行的生命周期（初始化、运行、报告）
//! - 扫描源目录（`Vec<PathBuf>`）
//! - 逐份处理、按科目归并、逐科目写入
//!
//! ### `document_processor` - 单个文档处理器
//! - 加载并解码单份文档
//! - 判断科目
//! - 委托 `DocumentFlow` 切分题目
//!
//! ### `report` - 运行报告
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文档>)
//!     ↓
//! document_processor (处理单份文档)
//!     ↓
//! workflow::DocumentFlow (清理 → 切分)
//!     ↓
//! services (能力层：segmenter / cleaner / router / writer)
//! ```

pub mod batch_processor;
pub mod document_processor;
pub mod report;

// 重新导出主要类型
pub use batch_processor::App;
pub use document_processor::{process_document, DocumentOutcome};
pub use report::{BatchReport, DocumentFailure, SubjectSummary};
