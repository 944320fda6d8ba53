//! # Exam Question Extract
//!
//! 从历年试卷 PDF 中提取题目（题号、题干、分值），按科目输出为 JSON，供前端读取
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、科目、文档等数据结构
//! - `models::loaders` - 枚举源目录并把 PDF 解码为纯文本
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `RegexSegmenter` - 按题号切分题目、提取分值
//! - `TextCleaner` - 清理页眉页脚
//! - `subject_router` - 按文件名判断科目并归并
//! - `QuestionWriter` - 写出科目 JSON 文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的文本处理流程
//! - `DocumentCtx` - 上下文封装（文档序号 + 科目）
//! - `DocumentFlow` - 流程编排（清理 → 切分）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批处理入口，顺序处理全部文档并输出报告
//! - `orchestrator/document_processor` - 单个文档处理器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuestionUnit, Subject, SubjectCollection};
pub use orchestrator::{App, BatchReport};
pub use services::{QuestionSegmenter, RegexSegmenter};
pub use workflow::{DocumentCtx, DocumentFlow};
