// ==========================================
// 扫码生产日报 - 配置层
// ==========================================
// 职责: 报表版式配置加载与校验
// 存储: JSON 文件
// ==========================================

pub mod report_config;

// 重导出
pub use report_config::{
    ConfigError, GroupFitRule, LineCostPolicy, PageCapacityPolicy, ReportConfigLoader, ReportLayoutConfig,
    CONFIG_PATH_ENV,
};
