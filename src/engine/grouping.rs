// ==========================================
// 扫码生产日报 - 分组引擎
// ==========================================
// 职责: 按物料名称 / 按当前工序对记录分组
// 输出: BTreeMap, 迭代顺序即下游要求的顺序
//   - 物料名称: 字典序
//   - 工序: 标准工艺顺序（Operation 的 Ord）
// 组内记录保持输入顺序
// ==========================================

use crate::config::ReportLayoutConfig;
use crate::domain::article::ArticleCatalog;
use crate::domain::record::ScannedCodeRecord;
use crate::domain::types::Operation;
use std::collections::BTreeMap;

// ==========================================
// GroupingEngine - 分组引擎
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct GroupingEngine<'a> {
    articles: &'a ArticleCatalog,
    unassigned_label: &'a str,
    fallback_operation: Operation,
}

impl<'a> GroupingEngine<'a> {
    pub fn new(articles: &'a ArticleCatalog, config: &'a ReportLayoutConfig) -> Self {
        Self {
            articles,
            unassigned_label: config.unassigned_label.as_str(),
            fallback_operation: config.fallback_operation,
        }
    }

    /// 记录的物料名称（无物料或物料已删除时为未分配标签）
    pub fn article_name(&self, record: &ScannedCodeRecord) -> &'a str {
        self.articles
            .resolve(record.article_id.as_ref())
            .map(|article| article.name.as_str())
            .unwrap_or(self.unassigned_label)
    }

    /// 记录的归属工序（无工序历史时为兜底工序）
    pub fn operation_of(&self, record: &ScannedCodeRecord) -> Operation {
        record.current_operation().unwrap_or(self.fallback_operation)
    }

    /// 按物料名称分组
    pub fn group_by_article_name<'r, I>(
        &self,
        records: I,
    ) -> BTreeMap<&'a str, Vec<&'r ScannedCodeRecord>>
    where
        I: IntoIterator<Item = &'r ScannedCodeRecord>,
    {
        let mut groups: BTreeMap<&'a str, Vec<&'r ScannedCodeRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(self.article_name(record)).or_default().push(record);
        }
        groups
    }

    /// 按当前工序分组
    pub fn group_by_operation<'r, I>(
        &self,
        records: I,
    ) -> BTreeMap<Operation, Vec<&'r ScannedCodeRecord>>
    where
        I: IntoIterator<Item = &'r ScannedCodeRecord>,
    {
        let mut groups: BTreeMap<Operation, Vec<&'r ScannedCodeRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(self.operation_of(record)).or_default().push(record);
        }
        groups
    }
}
