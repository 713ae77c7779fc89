// ==========================================
// 扫码生产日报 - 报表组装
// ==========================================
// 职责: 计算全天汇总（一次）,回填到每一页,并回填总页数
// 红线: 全天汇总基于分页前的输入快照,每页数值完全相同
// ==========================================

use crate::domain::report::{DaySummary, PageSummary, ReportInput, ReportPageDescriptor};
use crate::domain::types::Operation;
use crate::engine::grouping::GroupingEngine;
use crate::engine::paginator::PagePlacement;

// ==========================================
// ReportAssembler - 报表组装器
// ==========================================
pub struct ReportAssembler {
    // 无状态
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算全天汇总
    ///
    /// - total_records: 三个列表的记录总数
    /// - total_audited: audited 标志为真的记录数（跨三个列表）
    /// - total_packaged: 已包装列表记录数
    /// - operation_counts: 在制记录（audited + other）按工序计数,
    ///   标准工艺顺序,仅保留非零项; 无工序历史记录计入兜底工序
    pub fn day_summary(&self, input: &ReportInput, grouping: &GroupingEngine<'_>) -> DaySummary {
        let mut counts = [0usize; Operation::ALL.len()];
        for record in input.audited.iter().chain(input.other.iter()) {
            counts[grouping.operation_of(record).canonical_index()] += 1;
        }

        let operation_counts = Operation::ALL
            .iter()
            .zip(counts.iter())
            .filter(|(_, count)| **count > 0)
            .map(|(op, count)| (*op, *count))
            .collect();

        DaySummary {
            total_records: input.total_records(),
            total_audited: input.all_records().filter(|r| r.audited).count(),
            total_packaged: input.packaged.len(),
            operation_counts,
        }
    }

    /// 组装页描述
    ///
    /// 页码从 1 开始; 每页记录为输入记录的独立副本
    pub fn assemble(
        &self,
        input: &ReportInput,
        placements: Vec<PagePlacement<'_>>,
        day_summary: DaySummary,
    ) -> Vec<ReportPageDescriptor> {
        let total_pages = placements.len();
        placements
            .into_iter()
            .enumerate()
            .map(|(idx, placement)| ReportPageDescriptor {
                page_number: idx + 1,
                total_pages,
                report_date: input.report_date,
                is_first_page: idx == 0,
                settings: input.settings.clone(),
                page_summary: PageSummary {
                    used_lines: placement.used_lines,
                    budget: placement.budget,
                    packaged_count: placement.packaged.len(),
                    process_count: placement.process.len(),
                },
                packaged_records: placement.packaged.into_iter().cloned().collect(),
                process_records: placement.process.into_iter().cloned().collect(),
                day_summary: day_summary.clone(),
            })
            .collect()
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
