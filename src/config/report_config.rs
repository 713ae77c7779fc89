// ==========================================
// 扫码生产日报 - 报表版式配置
// ==========================================
// 职责: 页容量、行成本常量、兜底工序、未分配标签
// 存储: JSON 文件（显式路径 > SCAN_REPORT_CONFIG > 用户配置目录）
// 红线: 缺省值即历史版式,所有字段可单独覆写
// ==========================================

use crate::domain::types::Operation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "SCAN_REPORT_CONFIG";

/// 默认配置文件名（位于 `<config_dir>/scan-report/` 下）
pub const CONFIG_FILE_NAME: &str = "report_layout.json";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 (path={}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 (path={}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置无效 (field={field}): {message}")]
    Invalid { field: String, message: String },
}

// ==========================================
// PageCapacityPolicy - 页容量
// ==========================================
/// 页行预算 = 页总行数 - 页眉预留
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCapacityPolicy {
    pub first_page_lines: u32,  // 首页总行数
    pub first_page_header: u32, // 首页页眉预留
    pub page_lines: u32,        // 续页总行数
    pub page_header: u32,       // 续页页眉预留
}

impl Default for PageCapacityPolicy {
    fn default() -> Self {
        Self {
            first_page_lines: 50,
            first_page_header: 15,
            page_lines: 55,
            page_header: 5,
        }
    }
}

impl PageCapacityPolicy {
    /// 页行预算
    pub fn budget(&self, is_first_page: bool) -> u32 {
        if is_first_page {
            self.first_page_lines.saturating_sub(self.first_page_header)
        } else {
            self.page_lines.saturating_sub(self.page_header)
        }
    }

    /// 页总行数（含页眉）
    pub fn lines(&self, is_first_page: bool) -> u32 {
        if is_first_page {
            self.first_page_lines
        } else {
            self.page_lines
        }
    }

    /// 页眉预留行数
    pub fn header_reservation(&self, is_first_page: bool) -> u32 {
        if is_first_page {
            self.first_page_header
        } else {
            self.page_header
        }
    }
}

// ==========================================
// LineCostPolicy - 行成本常量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineCostPolicy {
    pub packaged_group_overhead: u32, // 包装物料组: 标题 + 小计
    pub operation_header: u32,        // 在制工序段标题
    pub process_group_overhead: u32,  // 在制物料块: 两行块头 + 小计
}

impl Default for LineCostPolicy {
    fn default() -> Self {
        Self {
            packaged_group_overhead: 2,
            operation_header: 2,
            process_group_overhead: 3,
        }
    }
}

// ==========================================
// GroupFitRule - 分组放不下时的处理
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupFitRule {
    /// 跳过放不下的分组,继续按序尝试后续分组
    SkipOversized,
    /// 第一个放不下的分组即结束当前循环
    StopAtFirstMiss,
}

impl Default for GroupFitRule {
    fn default() -> Self {
        GroupFitRule::SkipOversized
    }
}

// ==========================================
// ReportLayoutConfig - 报表版式配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayoutConfig {
    pub capacity: PageCapacityPolicy,
    pub line_cost: LineCostPolicy,
    pub fit_rule: GroupFitRule,
    /// 无工序历史记录的归属工序（待产品确认）
    pub fallback_operation: Operation,
    /// 无物料记录的分组标签
    pub unassigned_label: String,
}

impl Default for ReportLayoutConfig {
    fn default() -> Self {
        Self {
            capacity: PageCapacityPolicy::default(),
            line_cost: LineCostPolicy::default(),
            fit_rule: GroupFitRule::default(),
            fallback_operation: Operation::CleaningQa,
            unassigned_label: "Unassigned".to_string(),
        }
    }
}

impl ReportLayoutConfig {
    /// 校验页预算
    ///
    /// 续页预算必须大于续页页眉预留,否则在制阶段永远无法进入,分页不会推进
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cap = &self.capacity;
        if cap.budget(true) == 0 {
            return Err(ConfigError::Invalid {
                field: "capacity.first_page_lines".to_string(),
                message: format!(
                    "首页预算为 0 ({} - {})",
                    cap.first_page_lines, cap.first_page_header
                ),
            });
        }
        if cap.budget(false) <= cap.page_header {
            return Err(ConfigError::Invalid {
                field: "capacity.page_lines".to_string(),
                message: format!(
                    "续页预算 {} 必须大于续页页眉预留 {}",
                    cap.budget(false),
                    cap.page_header
                ),
            });
        }
        if self.unassigned_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "unassigned_label".to_string(),
                message: "未分配标签不能为空".to_string(),
            });
        }
        Ok(())
    }

    /// 从 JSON 字符串解析
    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: ReportLayoutConfig =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

// ==========================================
// ReportConfigLoader - 配置加载
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ReportConfigLoader {
    explicit_path: Option<PathBuf>,
}

impl ReportConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定配置文件（文件必须存在）
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.explicit_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// 用户配置目录下的默认路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scan-report").join(CONFIG_FILE_NAME))
    }

    /// 加载配置
    ///
    /// # 规则
    /// - 显式路径或环境变量指定的文件必须存在
    /// - 默认路径文件不存在时返回缺省配置
    pub fn load(&self) -> Result<ReportLayoutConfig, ConfigError> {
        if let Some(path) = &self.explicit_path {
            return Self::load_file(path);
        }

        if let Ok(raw_path) = std::env::var(CONFIG_PATH_ENV) {
            let raw_path = raw_path.trim();
            if !raw_path.is_empty() {
                return Self::load_file(Path::new(raw_path));
            }
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => {
                tracing::debug!("未找到报表版式配置文件,使用缺省配置");
                Ok(ReportLayoutConfig::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<ReportLayoutConfig, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ReportLayoutConfig::from_json_str(&raw, path)?;
        tracing::info!(path = %path.display(), "已加载报表版式配置");
        Ok(config)
    }
}
