// ==========================================
// 扫码生产日报 - 页描述导出
// ==========================================
// 职责: 将页描述展开为明细行（每页每条记录一行）写出 CSV
// 说明: 版式渲染（PDF 等）与分享不在本模块内
// ==========================================

use crate::config::ReportLayoutConfig;
use crate::domain::article::ArticleCatalog;
use crate::domain::report::ReportPageDescriptor;
use crate::engine::error::ReportSection;
use crate::engine::grouping::GroupingEngine;
use serde::Serialize;
use std::io;
use thiserror::Error;

/// 导出错误
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写出失败: {0}")]
    CsvWriteError(String),

    #[error("输出失败: {0}")]
    Io(#[from] io::Error),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

/// 明细行
#[derive(Debug, Serialize)]
struct PageLineRow<'a> {
    page_number: usize,
    total_pages: usize,
    report_date: String,
    section: String,
    operation: &'static str,
    article: &'a str,
    code: &'a str,
    audited: bool,
    piece_count: Option<u32>,
}

/// 写出 CSV（含表头）
///
/// 包装区与在制区的记录均带工序列; 物料名经目录解析
pub fn write_pages_csv<W: io::Write>(
    writer: W,
    pages: &[ReportPageDescriptor],
    articles: &ArticleCatalog,
    config: &ReportLayoutConfig,
) -> Result<usize, ExportError> {
    let grouping = GroupingEngine::new(articles, config);
    let mut csv_writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);

    let mut rows = 0usize;
    for page in pages {
        let sections = [
            (ReportSection::Packaged, &page.packaged_records),
            (ReportSection::Process, &page.process_records),
        ];
        for (section, records) in sections {
            for record in records.iter() {
                csv_writer.serialize(PageLineRow {
                    page_number: page.page_number,
                    total_pages: page.total_pages,
                    report_date: page.report_date.format("%Y-%m-%d").to_string(),
                    section: section.to_string(),
                    operation: grouping.operation_of(record).to_db_str(),
                    article: grouping.article_name(record),
                    code: &record.code,
                    audited: record.audited,
                    piece_count: record.piece_count,
                })?;
                rows += 1;
            }
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Article;
    use crate::domain::record::ScannedCodeRecord;
    use crate::domain::report::{ReportInput, ReportSettings};
    use crate::domain::types::Operation;
    use crate::engine::ReportGenerator;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_write_pages_csv_rows() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let widget = Article::new("Widget");

        let mut packaged = ScannedCodeRecord::new("P-1", at);
        packaged.article_id = Some(widget.id);
        packaged.append_operation(Operation::Packaging, at);

        let mut in_process = ScannedCodeRecord::new("T-1", at);
        in_process.append_operation(Operation::Testing, at);
        in_process.record_audit(4, at);

        let input = ReportInput::from_records(
            vec![packaged, in_process],
            ArticleCatalog::from(vec![widget]),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            ReportSettings::default(),
        );
        let generator = ReportGenerator::default();
        let pages = generator.generate(&input).unwrap();

        let mut out = Vec::new();
        let rows = write_pages_csv(&mut out, &pages, &input.articles, generator.config()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(rows, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "page_number,total_pages,report_date,section,operation,article,code,audited,piece_count"
        );
        assert_eq!(lines[1], "1,1,2026-03-02,PACKAGED,PACKAGING,Widget,P-1,false,");
        assert_eq!(lines[2], "1,1,2026-03-02,PROCESS,TESTING,Unassigned,T-1,true,4");
    }
}
