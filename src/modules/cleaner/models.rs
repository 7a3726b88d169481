use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 单个条目的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Removed { bytes_freed: u64 },
    Absent,
    Failed { error: String },
}

/// 条目处理记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutcome {
    /// 清单中的位置（从 1 开始）
    pub index: usize,
    pub entry: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self.status, EntryStatus::Removed { .. })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self.status, EntryStatus::Absent)
    }

    pub fn bytes_freed(&self) -> u64 {
        match self.status {
            EntryStatus::Removed { bytes_freed } => bytes_freed,
            _ => 0,
        }
    }
}

/// 一次成功卸载的统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallSummary {
    pub total: usize,
    pub removed: usize,
    pub absent: usize,
    pub bytes_freed: u64,
}

impl UninstallSummary {
    pub fn record(&mut self, outcome: &EntryOutcome) {
        self.total += 1;
        match outcome.status {
            EntryStatus::Removed { bytes_freed } => {
                self.removed += 1;
                self.bytes_freed += bytes_freed;
            }
            EntryStatus::Absent => self.absent += 1,
            EntryStatus::Failed { .. } => {}
        }
    }
}

/// 预检查中每个条目的计划动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedEntry {
    pub index: usize,
    pub entry: String,
    pub path: PathBuf,
    pub exists: bool,
}

/// 预检查结果（全部条目均可删除）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflightReport {
    pub entries: Vec<PlannedEntry>,
}

impl PreflightReport {
    pub fn to_remove(&self) -> usize {
        self.entries.iter().filter(|e| e.exists).count()
    }

    pub fn absent(&self) -> usize {
        self.entries.len() - self.to_remove()
    }
}
