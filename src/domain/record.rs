// ==========================================
// 扫码生产日报 - 扫码记录领域模型
// ==========================================
// 红线: operation_history 只追加,不重排,不删除
// 当前工序 = 时间戳最新的记录; 时间戳相同时后追加者为准
// ==========================================

use crate::domain::article::{Article, ArticleCatalog};
use crate::domain::types::{AuditStatus, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// OperationEntry - 工序流转记录
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEntry {
    pub operation: Operation,
    pub timestamp: DateTime<Utc>,
}

// ==========================================
// ScannedCodeRecord - 扫码记录
// ==========================================
// 用途: 持久化层写入,分页引擎只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedCodeRecord {
    // ===== 主键 =====
    pub id: Uuid, // 记录唯一标识（生命周期内不变）

    // ===== 业务字段 =====
    pub code: String,              // 条码值（不强制唯一）
    #[serde(default)]
    pub article_id: Option<Uuid>,  // 物料引用（读取时经 ArticleCatalog 解析）

    // ===== 审核 =====
    #[serde(default)]
    pub audited: bool,             // 是否已确认件数
    #[serde(default)]
    pub piece_count: Option<u32>,  // 审核录入件数

    // ===== 时间 =====
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ship_date: Option<DateTime<Utc>>,

    // ===== 工序流转（按追加顺序）=====
    #[serde(default)]
    pub operation_history: Vec<OperationEntry>,
}

impl ScannedCodeRecord {
    /// 创建新记录（无物料、无工序）
    pub fn new(code: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.to_string(),
            article_id: None,
            audited: false,
            piece_count: None,
            created_at,
            modified_at: None,
            ship_date: None,
            operation_history: Vec::new(),
        }
    }

    // ==========================================
    // 派生只读查询
    // ==========================================

    /// 工序历史按 (时间戳, 追加位置) 升序排列后的下标
    fn chronological_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.operation_history.len()).collect();
        indices.sort_by_key(|&i| (self.operation_history[i].timestamp, i));
        indices
    }

    /// 当前工序（时间戳最新; 历史为空返回 None）
    pub fn current_operation(&self) -> Option<Operation> {
        self.chronological_indices()
            .last()
            .map(|&i| self.operation_history[i].operation)
    }

    /// 上一道工序（时间戳次新; 不足两条返回 None）
    pub fn previous_operation(&self) -> Option<Operation> {
        let indices = self.chronological_indices();
        if indices.len() < 2 {
            return None;
        }
        Some(self.operation_history[indices[indices.len() - 2]].operation)
    }

    /// 当前工序是否为包装
    pub fn is_packaged(&self) -> bool {
        self.current_operation() == Some(Operation::Packaging)
    }

    /// 解析物料
    pub fn article<'a>(&self, catalog: &'a ArticleCatalog) -> Option<&'a Article> {
        catalog.resolve(self.article_id.as_ref())
    }

    /// 审核完整性: 审核件数与物料期望件数比较
    pub fn audit_status(&self, catalog: &ArticleCatalog) -> AuditStatus {
        if !self.audited {
            return AuditStatus::NotAudited;
        }
        let expected = self.article(catalog).and_then(|a| a.expected_piece_count);
        match (expected, self.piece_count) {
            (Some(expected), Some(counted)) if expected == counted => AuditStatus::Complete,
            (Some(expected), Some(counted)) => AuditStatus::Mismatch { expected, counted },
            _ => AuditStatus::NoExpectation,
        }
    }

    // ==========================================
    // 变更操作（由持久化协作方调用,分页引擎不调用）
    // ==========================================

    /// 追加工序流转
    pub fn append_operation(&mut self, operation: Operation, at: DateTime<Utc>) {
        self.operation_history.push(OperationEntry {
            operation,
            timestamp: at,
        });
        self.modified_at = Some(at);
    }

    /// 人工修正创建时间
    pub fn correct_created_at(&mut self, created_at: DateTime<Utc>, now: DateTime<Utc>) {
        self.created_at = created_at;
        self.modified_at = Some(now);
    }

    /// 记录审核结果
    pub fn record_audit(&mut self, piece_count: u32, now: DateTime<Utc>) {
        self.audited = true;
        self.piece_count = Some(piece_count);
        self.modified_at = Some(now);
    }
}
