// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use scan_report::domain::{
    Article, ArticleCatalog, Operation, ReportInput, ReportSettings, ScannedCodeRecord,
};
use uuid::Uuid;

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn day_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap()
}

pub fn settings() -> ReportSettings {
    ReportSettings {
        logo_reference: Some("assets/logo.png".to_string()),
        operator_name: "Chen".to_string(),
        shift: "Night".to_string(),
    }
}

// ==========================================
// ScannedCodeRecord 构建器
// ==========================================

pub struct RecordBuilder {
    code: String,
    article_id: Option<Uuid>,
    audited: bool,
    piece_count: Option<u32>,
    operations: Vec<Operation>,
}

impl RecordBuilder {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            article_id: None,
            audited: false,
            piece_count: None,
            operations: Vec::new(),
        }
    }

    pub fn article(mut self, article: &Article) -> Self {
        self.article_id = Some(article.id);
        self
    }

    pub fn audited(mut self, piece_count: u32) -> Self {
        self.audited = true;
        self.piece_count = Some(piece_count);
        self
    }

    /// 依次追加工序,每道间隔 10 分钟
    pub fn operations(mut self, operations: &[Operation]) -> Self {
        self.operations.extend_from_slice(operations);
        self
    }

    pub fn operation(self, operation: Operation) -> Self {
        self.operations(&[operation])
    }

    pub fn build(self) -> ScannedCodeRecord {
        let mut record = ScannedCodeRecord::new(&self.code, day_start());
        record.article_id = self.article_id;
        for (i, op) in self.operations.iter().enumerate() {
            record.append_operation(*op, day_start() + Duration::minutes(10 * (i as i64 + 1)));
        }
        record.audited = self.audited;
        record.piece_count = self.piece_count;
        record
    }
}

/// 批量构建同物料同工序记录,条码为 `{prefix}-{序号:03}`
pub fn batch(
    prefix: &str,
    count: usize,
    article: Option<&Article>,
    operation: Option<Operation>,
) -> Vec<ScannedCodeRecord> {
    (0..count)
        .map(|i| {
            let mut builder = RecordBuilder::new(&format!("{}-{:03}", prefix, i));
            if let Some(article) = article {
                builder = builder.article(article);
            }
            if let Some(op) = operation {
                builder = builder.operation(op);
            }
            builder.build()
        })
        .collect()
}

// ==========================================
// ReportInput 构建器
// ==========================================

#[derive(Default)]
pub struct DayBuilder {
    records: Vec<ScannedCodeRecord>,
    articles: Vec<Article>,
}

impl DayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article(&mut self, name: &str) -> Article {
        let article = Article::new(name);
        self.articles.push(article.clone());
        article
    }

    pub fn records(mut self, records: Vec<ScannedCodeRecord>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> ReportInput {
        ReportInput::from_records(
            self.records,
            ArticleCatalog::from(self.articles),
            report_date(),
            settings(),
        )
    }
}
