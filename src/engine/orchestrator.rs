// ==========================================
// 扫码生产日报 - 报表生成编排
// ==========================================
// 流程: 分组引擎 → 分页引擎 → 报表组装
// 同步、单线程、无 I/O; 每次调用基于独立输入快照生成新结果,无缓存
// ==========================================

use crate::config::ReportLayoutConfig;
use crate::domain::report::{ReportInput, ReportPageDescriptor};
use crate::engine::error::ReportError;
use crate::engine::grouping::GroupingEngine;
use crate::engine::paginator::ReportPaginator;
use crate::engine::report_assembly::ReportAssembler;
use tracing::{info, instrument, warn};

// ==========================================
// ReportGenerator - 日报生成器
// ==========================================
pub struct ReportGenerator {
    config: ReportLayoutConfig,
    assembler: ReportAssembler,
}

impl ReportGenerator {
    /// 创建生成器（校验版式配置）
    pub fn new(config: ReportLayoutConfig) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self {
            config,
            assembler: ReportAssembler::new(),
        })
    }

    pub fn config(&self) -> &ReportLayoutConfig {
        &self.config
    }

    /// 生成日报分页
    ///
    /// # 返回
    /// 按页码排列的页描述; 无记录时为一张空白页
    #[instrument(skip(self, input), fields(
        report_date = %input.report_date,
        total_records = input.total_records()
    ))]
    pub fn generate(&self, input: &ReportInput) -> Result<Vec<ReportPageDescriptor>, ReportError> {
        let grouping = GroupingEngine::new(&input.articles, &self.config);

        let historyless = input
            .audited
            .iter()
            .chain(input.other.iter())
            .filter(|r| r.operation_history.is_empty())
            .count();
        if historyless > 0 {
            warn!(
                count = historyless,
                fallback = %self.config.fallback_operation,
                "存在无工序历史的记录,归入兜底工序"
            );
        }

        let day_summary = self.assembler.day_summary(input, &grouping);

        let placements = ReportPaginator::new(&self.config).paginate(
            &grouping,
            &input.packaged,
            &input.audited,
            &input.other,
        )?;

        let pages = self.assembler.assemble(input, placements, day_summary);

        info!(total_pages = pages.len(), "日报分页完成");
        Ok(pages)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            config: ReportLayoutConfig::default(),
            assembler: ReportAssembler::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, PageCapacityPolicy};
    use crate::domain::article::ArticleCatalog;
    use crate::domain::report::ReportSettings;
    use chrono::NaiveDate;

    #[test]
    fn test_invalid_config_rejected() {
        let config = ReportLayoutConfig {
            capacity: PageCapacityPolicy {
                page_lines: 6,
                page_header: 5,
                ..PageCapacityPolicy::default()
            },
            ..ReportLayoutConfig::default()
        };
        let err = ReportGenerator::new(config).err().unwrap();
        assert!(matches!(err, ReportError::Config(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_empty_day() {
        let input = ReportInput::new(
            vec![],
            vec![],
            vec![],
            ArticleCatalog::new(),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            ReportSettings::default(),
        );

        let pages = ReportGenerator::default().generate(&input).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].total_pages, 1);
        assert!(pages[0].is_first_page);
        assert!(pages[0].is_empty());
        assert_eq!(pages[0].day_summary.total_records, 0);
        assert_eq!(pages[0].day_summary.total_audited, 0);
        assert_eq!(pages[0].day_summary.total_packaged, 0);
        assert!(pages[0].day_summary.operation_counts.is_empty());
    }
}
