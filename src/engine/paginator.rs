// ==========================================
// 扫码生产日报 - 报表分页引擎
// ==========================================
// 红线: 分组不可跨页拆分
// 红线: 分组按序尝试; 放不下时按 GroupFitRule 跳过或停止
// ==========================================
// 职责: 行预算驱动的贪心分页
// 输入: 已包装记录 + 在制记录（audited + other,按条码升序）
// 输出: PagePlacement 列表（未回填全天汇总）
// ==========================================
// 每页两个阶段:
// 1) 包装阶段: 按物料名字典序放入整组
// 2) 在制阶段（页剩余行数 > 页眉预留时进入,即 used < budget）: 按标准工艺顺序遍历工序,
//    工序标题放不下即结束本阶段; 工序内按物料名放入整组,
//    StopAtFirstMiss 下放不下只结束该工序,继续下一工序
// ==========================================

use crate::config::{GroupFitRule, ReportLayoutConfig};
use crate::domain::record::ScannedCodeRecord;
use crate::engine::error::{ReportError, ReportSection};
use crate::engine::grouping::GroupingEngine;
use crate::engine::line_cost::LineCostEstimator;
use tracing::{debug, instrument, warn};

// ==========================================
// PagePlacement - 单页分配结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PagePlacement<'r> {
    pub packaged: Vec<&'r ScannedCodeRecord>,
    pub process: Vec<&'r ScannedCodeRecord>,
    pub used_lines: u32,
    pub budget: u32,
}

impl PagePlacement<'_> {
    pub fn is_empty(&self) -> bool {
        self.packaged.is_empty() && self.process.is_empty()
    }
}

// ==========================================
// ReportPaginator - 分页引擎
// ==========================================
pub struct ReportPaginator<'a> {
    config: &'a ReportLayoutConfig,
    estimator: LineCostEstimator,
}

impl<'a> ReportPaginator<'a> {
    pub fn new(config: &'a ReportLayoutConfig) -> Self {
        Self {
            config,
            estimator: LineCostEstimator::new(config.line_cost),
        }
    }

    /// 执行分页
    ///
    /// # 参数
    /// - `grouping`: 分组引擎（物料目录 + 兜底规则）
    /// - `packaged`: 当前工序为包装的记录
    /// - `audited` / `other`: 其余记录,合并为在制池并按条码升序
    ///
    /// # 返回
    /// 至少一页; 无记录时为一张空白首页
    ///
    /// # 错误
    /// - `OversizedGroup`: 某个分组在空白续页上也放不下
    /// - `NoProgress`: 续页未放入任何记录
    #[instrument(skip_all, fields(
        packaged_count = packaged.len(),
        in_process_count = audited.len() + other.len()
    ))]
    pub fn paginate<'r>(
        &self,
        grouping: &GroupingEngine<'_>,
        packaged: &'r [ScannedCodeRecord],
        audited: &'r [ScannedCodeRecord],
        other: &'r [ScannedCodeRecord],
    ) -> Result<Vec<PagePlacement<'r>>, ReportError> {
        let mut packaged_pool: Vec<&'r ScannedCodeRecord> = packaged.iter().collect();
        let mut process_pool: Vec<&'r ScannedCodeRecord> =
            audited.iter().chain(other.iter()).collect();
        process_pool.sort_by(|a, b| a.code.cmp(&b.code));

        self.ensure_groups_fit(grouping, &packaged_pool, &process_pool)?;

        let mut pages: Vec<PagePlacement<'r>> = Vec::new();
        while !packaged_pool.is_empty() || !process_pool.is_empty() {
            let is_first_page = pages.is_empty();
            let page = self.fill_page(grouping, &packaged_pool, &process_pool, is_first_page);

            if page.is_empty() && !is_first_page {
                return Err(ReportError::NoProgress {
                    page_number: pages.len() + 1,
                    remaining_packaged: packaged_pool.len(),
                    remaining_process: process_pool.len(),
                });
            }

            remove_placed(&mut packaged_pool, &page.packaged);
            remove_placed(&mut process_pool, &page.process);

            debug!(
                page_number = pages.len() + 1,
                used_lines = page.used_lines,
                budget = page.budget,
                packaged = page.packaged.len(),
                process = page.process.len(),
                "分页完成"
            );
            pages.push(page);
        }

        if pages.is_empty() {
            pages.push(PagePlacement {
                budget: self.config.capacity.budget(true),
                ..PagePlacement::default()
            });
        }

        Ok(pages)
    }

    // ==========================================
    // 单页填充
    // ==========================================

    fn fill_page<'r>(
        &self,
        grouping: &GroupingEngine<'_>,
        packaged_pool: &[&'r ScannedCodeRecord],
        process_pool: &[&'r ScannedCodeRecord],
        is_first_page: bool,
    ) -> PagePlacement<'r> {
        let capacity = &self.config.capacity;
        let budget = capacity.budget(is_first_page);
        let page_lines = capacity.lines(is_first_page);
        let header_reservation = capacity.header_reservation(is_first_page);
        let mut page = PagePlacement {
            budget,
            ..PagePlacement::default()
        };

        let stop_at_first_miss = self.config.fit_rule == GroupFitRule::StopAtFirstMiss;

        // 1. 包装阶段
        let packaged_groups = grouping.group_by_article_name(packaged_pool.iter().copied());
        for group in packaged_groups.into_values() {
            let cost = self.estimator.packaged_group_cost(group.len());
            if page.used_lines.saturating_add(cost) > budget {
                if stop_at_first_miss {
                    break;
                }
                continue;
            }
            page.used_lines += cost;
            page.packaged.extend(group);
        }

        // 2. 在制阶段: 剩余按页总行数计
        if page_lines.saturating_sub(page.used_lines) <= header_reservation {
            return page;
        }

        let header_cost = self.estimator.operation_header_cost();
        let operation_groups = grouping.group_by_operation(process_pool.iter().copied());
        for records in operation_groups.into_values() {
            if page.used_lines.saturating_add(header_cost) > budget {
                break;
            }
            page.used_lines += header_cost;

            for group in grouping.group_by_article_name(records).into_values() {
                let cost = self.estimator.process_group_cost(group.len());
                if page.used_lines.saturating_add(cost) > budget {
                    if stop_at_first_miss {
                        break;
                    }
                    continue;
                }
                page.used_lines += cost;
                page.process.extend(group);
            }
        }

        page
    }

    // ==========================================
    // 终止性保证
    // ==========================================

    /// 每个最小放置单元都必须能放进空白续页,否则分页永远无法结束
    fn ensure_groups_fit(
        &self,
        grouping: &GroupingEngine<'_>,
        packaged_pool: &[&ScannedCodeRecord],
        process_pool: &[&ScannedCodeRecord],
    ) -> Result<(), ReportError> {
        let budget = self.config.capacity.budget(false);

        for (article, group) in grouping.group_by_article_name(packaged_pool.iter().copied()) {
            let cost = self.estimator.packaged_group_cost(group.len());
            if cost > budget {
                warn!(article, cost, budget, "包装物料组超出单页容量");
                return Err(ReportError::OversizedGroup {
                    section: ReportSection::Packaged,
                    operation: None,
                    article: article.to_string(),
                    cost,
                    budget,
                });
            }
        }

        let header_cost = self.estimator.operation_header_cost();
        for (operation, records) in grouping.group_by_operation(process_pool.iter().copied()) {
            for (article, group) in grouping.group_by_article_name(records) {
                let cost = header_cost.saturating_add(self.estimator.process_group_cost(group.len()));
                if cost > budget {
                    warn!(%operation, article, cost, budget, "在制物料组超出单页容量");
                    return Err(ReportError::OversizedGroup {
                        section: ReportSection::Process,
                        operation: Some(operation),
                        article: article.to_string(),
                        cost,
                        budget,
                    });
                }
            }
        }

        Ok(())
    }
}

/// 按引用身份（而非 id / code）移除已放置的记录
fn remove_placed<'r>(pool: &mut Vec<&'r ScannedCodeRecord>, placed: &[&'r ScannedCodeRecord]) {
    if placed.is_empty() {
        return;
    }
    pool.retain(|record| !placed.iter().any(|p| std::ptr::eq(*p, *record)));
}
