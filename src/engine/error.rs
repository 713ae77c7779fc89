// ==========================================
// 扫码生产日报 - 引擎层错误类型
// ==========================================
// 引擎只处理内存快照,无 I/O 失败;
// 唯一的真实失败是分页无法推进（超大分组）
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::Operation;
use std::fmt;
use thiserror::Error;

/// 分组所在的报表区段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Packaged, // 已包装
    Process,  // 在制
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSection::Packaged => write!(f, "PACKAGED"),
            ReportSection::Process => write!(f, "PROCESS"),
        }
    }
}

fn operation_label(operation: &Option<Operation>) -> String {
    operation.map(|op| op.to_string()).unwrap_or_else(|| "-".to_string())
}

/// 报表引擎错误
#[derive(Error, Debug)]
pub enum ReportError {
    /// 单个分组在空白续页上也放不下
    #[error(
        "分组超出单页容量: section={section}, operation={}, article={article}, cost={cost}, budget={budget}",
        operation_label(.operation)
    )]
    OversizedGroup {
        section: ReportSection,
        operation: Option<Operation>,
        article: String,
        cost: u32,
        budget: u32,
    },

    /// 续页未放入任何记录
    #[error("分页无进展: page={page_number}, remaining_packaged={remaining_packaged}, remaining_process={remaining_process}")]
    NoProgress {
        page_number: usize,
        remaining_packaged: usize,
        remaining_process: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
