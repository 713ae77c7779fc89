// ==========================================
// 扫码生产日报 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、只读派生查询
// 红线: 不含存储逻辑,不含分页逻辑
// ==========================================

pub mod article;
pub mod record;
pub mod report;
pub mod types;

// 重导出核心类型
pub use article::{Article, ArticleCatalog};
pub use record::{OperationEntry, ScannedCodeRecord};
pub use report::{DaySummary, PageSummary, ReportInput, ReportPageDescriptor, ReportSettings};
pub use types::{AuditStatus, Operation};
