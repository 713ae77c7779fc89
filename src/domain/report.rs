// ==========================================
// 扫码生产日报 - 报表输入/输出模型
// ==========================================
// 输入: ReportInput（一次生成调用的不可变快照）
// 输出: ReportPageDescriptor 序列（从 1 编号,构造后不可变）
// ==========================================

use crate::domain::article::ArticleCatalog;
use crate::domain::record::ScannedCodeRecord;
use crate::domain::types::Operation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ReportSettings - 设置快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub logo_reference: Option<String>, // Logo 资源句柄（由渲染层解析为字节）
    pub operator_name: String,          // 操作员
    pub shift: String,                  // 班次
}

// ==========================================
// ReportInput - 报表生成输入快照
// ==========================================
// 三分区由调用方负责: packaged / audited / other
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(default)]
    pub packaged: Vec<ScannedCodeRecord>,
    #[serde(default)]
    pub audited: Vec<ScannedCodeRecord>,
    #[serde(default)]
    pub other: Vec<ScannedCodeRecord>,
    #[serde(default)]
    pub articles: ArticleCatalog,
    pub report_date: NaiveDate, // 已归一到当天
    pub settings: ReportSettings,
}

impl ReportInput {
    /// 使用已分区的记录列表构造
    pub fn new(
        packaged: Vec<ScannedCodeRecord>,
        audited: Vec<ScannedCodeRecord>,
        other: Vec<ScannedCodeRecord>,
        articles: ArticleCatalog,
        report_date: NaiveDate,
        settings: ReportSettings,
    ) -> Self {
        Self {
            packaged,
            audited,
            other,
            articles,
            report_date,
            settings,
        }
    }

    /// 按 is_packaged() 与 audited 标志对当天记录做三分区
    pub fn from_records(
        records: Vec<ScannedCodeRecord>,
        articles: ArticleCatalog,
        report_date: NaiveDate,
        settings: ReportSettings,
    ) -> Self {
        let mut packaged = Vec::new();
        let mut audited = Vec::new();
        let mut other = Vec::new();
        for record in records {
            if record.is_packaged() {
                packaged.push(record);
            } else if record.audited {
                audited.push(record);
            } else {
                other.push(record);
            }
        }
        Self::new(packaged, audited, other, articles, report_date, settings)
    }

    /// 输入记录总数
    pub fn total_records(&self) -> usize {
        self.packaged.len() + self.audited.len() + self.other.len()
    }

    /// 全部记录（packaged → audited → other）
    pub fn all_records(&self) -> impl Iterator<Item = &ScannedCodeRecord> {
        self.packaged
            .iter()
            .chain(self.audited.iter())
            .chain(self.other.iter())
    }
}

// ==========================================
// DaySummary - 全天汇总（每页相同）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub total_records: usize,
    pub total_audited: usize,
    pub total_packaged: usize,
    /// 在制记录的工序分布（标准工艺顺序,仅非零项）
    pub operation_counts: Vec<(Operation, usize)>,
}

impl DaySummary {
    pub fn count_for(&self, operation: Operation) -> usize {
        self.operation_counts
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

// ==========================================
// PageSummary - 单页统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub used_lines: u32,     // 已用行数
    pub budget: u32,         // 本页行预算
    pub packaged_count: usize,
    pub process_count: usize,
}

// ==========================================
// ReportPageDescriptor - 报表页描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPageDescriptor {
    pub page_number: usize, // 从 1 开始
    pub total_pages: usize, // 全部分页完成后回填
    pub report_date: NaiveDate,
    pub is_first_page: bool,
    pub settings: ReportSettings,
    pub packaged_records: Vec<ScannedCodeRecord>,
    pub process_records: Vec<ScannedCodeRecord>,
    pub page_summary: PageSummary,
    pub day_summary: DaySummary,
}

impl ReportPageDescriptor {
    pub fn record_count(&self) -> usize {
        self.packaged_records.len() + self.process_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_from_records_partitions_by_packaging_then_audit() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();

        let mut packaged = ScannedCodeRecord::new("P", at);
        packaged.append_operation(Operation::Packaging, at);
        packaged.audited = true;

        let mut audited = ScannedCodeRecord::new("A", at);
        audited.append_operation(Operation::Testing, at);
        audited.audited = true;

        let other = ScannedCodeRecord::new("O", at);

        let input = ReportInput::from_records(
            vec![other, audited, packaged],
            ArticleCatalog::new(),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            ReportSettings::default(),
        );

        assert_eq!(input.packaged.len(), 1);
        assert_eq!(input.packaged[0].code, "P");
        assert_eq!(input.audited.len(), 1);
        assert_eq!(input.audited[0].code, "A");
        assert_eq!(input.other.len(), 1);
        assert_eq!(input.total_records(), 3);
    }

    #[test]
    fn test_snapshot_json_format() {
        let raw = r#"{
            "other": [{
                "id": "6f1c5a34-0d6e-4a43-9d1b-1f6a8e3c2b10",
                "code": "C-1",
                "article_id": "0b8e7c9a-5d4f-4e2a-8c1b-3a2d9f7e6c54",
                "created_at": "2026-03-02T06:00:00Z",
                "operation_history": [
                    {"operation": "TESTING", "timestamp": "2026-03-02T07:00:00Z"}
                ]
            }],
            "articles": [{
                "id": "0b8e7c9a-5d4f-4e2a-8c1b-3a2d9f7e6c54",
                "name": "Widget",
                "expected_piece_count": 12
            }],
            "report_date": "2026-03-02",
            "settings": {"operator_name": "Chen", "shift": "A"}
        }"#;

        let input: ReportInput = serde_json::from_str(raw).unwrap();

        assert!(input.packaged.is_empty());
        assert!(input.audited.is_empty());
        assert_eq!(input.other.len(), 1);
        let record = &input.other[0];
        assert_eq!(record.current_operation(), Some(Operation::Testing));
        assert!(!record.audited);
        assert_eq!(record.article(&input.articles).unwrap().name, "Widget");
        assert_eq!(input.settings.logo_reference, None);
    }
}
