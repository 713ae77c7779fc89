// ==========================================
// 扫码生产日报 - 引擎层
// ==========================================
// 职责: 纯内存计算引擎,不访问存储、不渲染
// 红线: 输入视为不可变快照,不修改输入记录
// ==========================================

pub mod duplicates;
pub mod error;
pub mod grouping;
pub mod line_cost;
pub mod orchestrator;
pub mod paginator;
pub mod report_assembly;

// 重导出核心引擎
pub use duplicates::{find_duplicate_codes, DuplicateReport};
pub use error::{ReportError, ReportSection};
pub use grouping::GroupingEngine;
pub use line_cost::LineCostEstimator;
pub use orchestrator::ReportGenerator;
pub use paginator::{PagePlacement, ReportPaginator};
pub use report_assembly::ReportAssembler;
