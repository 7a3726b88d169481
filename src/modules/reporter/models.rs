use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::modules::cleaner::models::{EntryOutcome, UninstallSummary};
use crate::modules::common::utils;
use crate::modules::manifest::models::UninstallConfig;

/// 卸载报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UninstallReport {
    pub id: String,
    pub manifest: PathBuf,
    pub dest_root: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub outcomes: Vec<EntryOutcome>,
    pub summary: UninstallSummary,
    pub success: bool,
    pub error: Option<String>,
}

impl UninstallReport {
    pub fn new(config: &UninstallConfig) -> Self {
        Self {
            id: utils::generate_id(),
            manifest: config.manifest_path.clone(),
            dest_root: config.dest_root.to_string_lossy().into_owned(),
            started_at: Utc::now(),
            finished_at: None,
            outcomes: Vec::new(),
            summary: UninstallSummary::default(),
            success: false,
            error: None,
        }
    }

    /// 记录一个条目（失败条目不计入统计）
    pub fn push(&mut self, outcome: &EntryOutcome) {
        self.summary.record(outcome);
        self.outcomes.push(outcome.clone());
    }

    /// 以运行结果收尾
    pub fn finish<T, E: std::fmt::Display>(mut self, result: &Result<T, E>) -> Self {
        self.finished_at = Some(Utc::now());
        match result {
            Ok(_) => {
                self.success = true;
                self.error = None;
            }
            Err(e) => {
                self.success = false;
                self.error = Some(e.to_string());
            }
        }
        self
    }
}

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Json,
    Html,
}
