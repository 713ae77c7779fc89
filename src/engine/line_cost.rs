// ==========================================
// 扫码生产日报 - 行成本估算
// ==========================================
// 仅用于判断分组能否放入剩余页容量
// 常量来自 LineCostPolicy,可覆写
// ==========================================

use crate::config::LineCostPolicy;

// ==========================================
// LineCostEstimator - 行成本估算器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCostEstimator {
    policy: LineCostPolicy,
}

impl LineCostEstimator {
    pub fn new(policy: LineCostPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LineCostPolicy {
        &self.policy
    }

    /// 已包装物料组: 标题 + 小计 + 每条记录一行
    pub fn packaged_group_cost(&self, record_count: usize) -> u32 {
        self.policy
            .packaged_group_overhead
            .saturating_add(lines(record_count))
    }

    /// 在制工序段标题（与其下物料数量无关）
    pub fn operation_header_cost(&self) -> u32 {
        self.policy.operation_header
    }

    /// 在制工序内的物料块: 块头两行 + 小计 + 每条记录一行
    pub fn process_group_cost(&self, record_count: usize) -> u32 {
        self.policy
            .process_group_overhead
            .saturating_add(lines(record_count))
    }
}

fn lines(record_count: usize) -> u32 {
    u32::try_from(record_count).unwrap_or(u32::MAX)
}
