// ==========================================
// 扫码生产日报 - 重复条码检测
// ==========================================
// 条码不强制唯一; 重复是可报告的数据质量状况,不是错误
// 分页引擎本身不去重,由本模块为界面/导出层标记
// ==========================================

use crate::domain::record::ScannedCodeRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ==========================================
// DuplicateReport - 重复条码报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// 条码 -> 出现该条码的记录 id（按输入顺序）,仅含出现 >= 2 次的条码
    pub duplicates: BTreeMap<String, Vec<Uuid>>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
    }

    /// 记录是否被标记为重复
    pub fn is_duplicate(&self, record_id: &Uuid) -> bool {
        self.duplicates.values().flatten().any(|id| id == record_id)
    }

    /// 重复条码（字典序）
    pub fn codes(&self) -> Vec<&str> {
        self.duplicates.keys().map(String::as_str).collect()
    }

    /// 被标记的记录数
    pub fn flagged_count(&self) -> usize {
        self.duplicates.values().map(Vec::len).sum()
    }
}

/// 按条码精确匹配查找重复记录
pub fn find_duplicate_codes<'r, I>(records: I) -> DuplicateReport
where
    I: IntoIterator<Item = &'r ScannedCodeRecord>,
{
    let mut by_code: BTreeMap<String, Vec<Uuid>> = BTreeMap::new();
    for record in records {
        by_code.entry(record.code.clone()).or_default().push(record.id);
    }
    by_code.retain(|_, ids| ids.len() >= 2);

    if !by_code.is_empty() {
        tracing::debug!(duplicate_codes = by_code.len(), "检测到重复条码");
    }

    DuplicateReport { duplicates: by_code }
}
