// ==========================================
// 扫码生产日报 - 领域类型定义
// ==========================================
// 工序 (Operation) 为封闭枚举,顺序即工艺流程顺序
// 红线: 工序顺序不可配置,不按字母排序
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工序 (Operation)
// ==========================================
// 声明顺序 = 标准工艺顺序, Ord 派生依赖此顺序
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Ribbonizing,   // 焊带
    Assembly,      // 组装
    Polishing,     // 抛光
    CleanGeometry, // 清洁/几何检测
    Framing,       // 装框
    Labeling,      // 贴标
    Polarity,      // 极性检测
    Testing,       // 测试
    CleaningQa,    // 清洁/质检
    Packaging,     // 包装
}

impl Operation {
    /// 全部工序（标准工艺顺序）
    pub const ALL: [Operation; 10] = [
        Operation::Ribbonizing,
        Operation::Assembly,
        Operation::Polishing,
        Operation::CleanGeometry,
        Operation::Framing,
        Operation::Labeling,
        Operation::Polarity,
        Operation::Testing,
        Operation::CleaningQa,
        Operation::Packaging,
    ];

    /// 在标准工艺顺序中的位置（从 0 开始）
    pub fn canonical_index(&self) -> usize {
        *self as usize
    }

    /// 从字符串解析工序
    pub fn from_str(s: &str) -> Option<Self> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.to_db_str() == s.trim().to_uppercase())
    }

    /// 转换为存储/导出用字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Operation::Ribbonizing => "RIBBONIZING",
            Operation::Assembly => "ASSEMBLY",
            Operation::Polishing => "POLISHING",
            Operation::CleanGeometry => "CLEAN_GEOMETRY",
            Operation::Framing => "FRAMING",
            Operation::Labeling => "LABELING",
            Operation::Polarity => "POLARITY",
            Operation::Testing => "TESTING",
            Operation::CleaningQa => "CLEANING_QA",
            Operation::Packaging => "PACKAGING",
        }
    }

    /// 本地化显示名称（供渲染层使用）
    pub fn label(&self) -> String {
        crate::i18n::t(&format!("operation.{}", self.to_db_str().to_lowercase()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 审核状态 (Audit Status)
// ==========================================
// 由记录的 audited/piece_count 与物料的 expected_piece_count 比较得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "status")]
pub enum AuditStatus {
    NotAudited,                              // 未审核
    NoExpectation,                           // 已审核,但无可比较的期望数量
    Complete,                                // 数量一致
    Mismatch { expected: u32, counted: u32 }, // 数量不一致
}

impl AuditStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, AuditStatus::Complete)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditStatus::NotAudited => write!(f, "NOT_AUDITED"),
            AuditStatus::NoExpectation => write!(f, "NO_EXPECTATION"),
            AuditStatus::Complete => write!(f, "COMPLETE"),
            AuditStatus::Mismatch { expected, counted } => {
                write!(f, "MISMATCH(expected={}, counted={})", expected, counted)
            }
        }
    }
}
