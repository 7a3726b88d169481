pub mod html;
pub mod models;

use crate::modules::common::error::UninstallerError;
use models::{ReportFormat, UninstallReport};

/// 按格式渲染报告
pub fn render(report: &UninstallReport, format: ReportFormat) -> Result<String, UninstallerError> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| UninstallerError::Serde(e.to_string())),
        ReportFormat::Html => html::generate_html_report(report),
    }
}
