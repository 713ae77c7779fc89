// ==========================================
// 扫码生产日报 - 核心库
// ==========================================
// 职责: 当日扫码记录 → 按物料/工序分组 → 行预算分页 → 页描述
// 边界: 不含扫码输入、持久化、PDF 渲染、分享
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分组/分页/组装
pub mod engine;

// 配置层 - 报表版式
pub mod config;

// 导出层 - 页描述明细
pub mod export;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Article, ArticleCatalog, AuditStatus, DaySummary, Operation, OperationEntry, PageSummary,
    ReportInput, ReportPageDescriptor, ReportSettings, ScannedCodeRecord,
};

// 引擎
pub use engine::{
    find_duplicate_codes, DuplicateReport, GroupingEngine, LineCostEstimator, ReportAssembler,
    ReportError, ReportGenerator, ReportPaginator,
};

// 配置
pub use config::{ReportConfigLoader, ReportLayoutConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "扫码生产日报";
