use crate::modules::cleaner::models::{EntryOutcome, EntryStatus};
use crate::modules::common::error::UninstallerError;
use crate::modules::common::utils;
use super::models::UninstallReport;

/// 生成 HTML 报告
pub fn generate_html_report(report: &UninstallReport) -> Result<String, UninstallerError> {
    let manifest = report.manifest.to_string_lossy();
    let dest_root = if report.dest_root.is_empty() {
        "(无)".to_string()
    } else {
        escape_html(&report.dest_root)
    };
    let finished = report
        .finished_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let failed = report
        .outcomes
        .iter()
        .filter(|o| matches!(o.status, EntryStatus::Failed { .. }))
        .count();

    let html = format!(r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>卸载报告 - {}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: "Segoe UI", "Microsoft YaHei", sans-serif;
            background: #f0f2f5;
            padding: 20px;
        }}
        .container {{
            max-width: 960px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            box-shadow: 0 8px 30px rgba(0,0,0,0.15);
            overflow: hidden;
        }}
        .header {{
            background: #2c3e50;
            color: white;
            padding: 30px;
        }}
        .header h1 {{ font-size: 26px; margin-bottom: 10px; }}
        .header .meta {{ opacity: 0.8; font-size: 14px; }}
        .summary {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
            gap: 16px;
            padding: 24px;
            background: #f8f9fa;
        }}
        .stat {{
            background: white;
            padding: 16px;
            border-radius: 10px;
            text-align: center;
        }}
        .stat .value {{ font-size: 28px; font-weight: bold; color: #667eea; }}
        .stat .label {{ color: #666; margin-top: 6px; font-size: 14px; }}
        .success .value {{ color: #27ae60; }}
        .failed .value {{ color: #e74c3c; }}
        .content {{ padding: 24px; }}
        .error {{
            background: #f8d7da;
            border-left: 4px solid #e74c3c;
            color: #721c24;
            padding: 12px 16px;
            margin-bottom: 20px;
        }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 10px 12px; text-align: left; border-bottom: 1px solid #eee; }}
        th {{ background: #f8f9fa; color: #2c3e50; }}
        .status {{
            display: inline-block;
            padding: 3px 10px;
            border-radius: 16px;
            font-size: 12px;
            font-weight: 600;
        }}
        .status.removed {{ background: #d4edda; color: #155724; }}
        .status.absent {{ background: #e9ecef; color: #495057; }}
        .status.failed {{ background: #f8d7da; color: #721c24; }}
        .path {{
            font-family: "Consolas", monospace;
            font-size: 13px;
            word-break: break-all;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>卸载报告</h1>
            <div class="meta">
                <p>清单: <strong>{}</strong></p>
                <p>目标根: {}</p>
                <p>开始: {} / 结束: {}</p>
                <p>报告ID: {}</p>
            </div>
        </div>

        <div class="summary">
            <div class="stat">
                <div class="value">{}</div>
                <div class="label">已处理条目</div>
            </div>
            <div class="stat success">
                <div class="value">{}</div>
                <div class="label">已删除</div>
            </div>
            <div class="stat">
                <div class="value">{}</div>
                <div class="label">不存在</div>
            </div>
            <div class="stat failed">
                <div class="value">{}</div>
                <div class="label">删除失败</div>
            </div>
            <div class="stat">
                <div class="value">{}</div>
                <div class="label">释放空间</div>
            </div>
        </div>

        <div class="content">
            {}
            {}
        </div>
    </div>
</body>
</html>"#,
        escape_html(&manifest),
        escape_html(&manifest),
        dest_root,
        report.started_at.format("%Y-%m-%d %H:%M:%S"),
        finished,
        report.id,
        report.outcomes.len(),
        report.summary.removed,
        report.summary.absent,
        failed,
        utils::format_size(report.summary.bytes_freed),
        report
            .error
            .as_deref()
            .map(|e| format!(r#"<div class="error">{}</div>"#, escape_html(e)))
            .unwrap_or_default(),
        generate_outcome_table(&report.outcomes),
    );

    Ok(html)
}

fn generate_outcome_table(outcomes: &[EntryOutcome]) -> String {
    if outcomes.is_empty() {
        return "<p>清单为空</p>".to_string();
    }

    let mut html = String::from(r#"
        <table>
            <thead>
                <tr>
                    <th>#</th>
                    <th>状态</th>
                    <th>路径</th>
                    <th>释放空间</th>
                </tr>
            </thead>
            <tbody>
    "#);

    for outcome in outcomes {
        let (status_html, detail) = match &outcome.status {
            EntryStatus::Removed { .. } => {
                (r#"<span class="status removed">已删除</span>"#, String::new())
            }
            EntryStatus::Absent => {
                (r#"<span class="status absent">不存在</span>"#, String::new())
            }
            EntryStatus::Failed { error } => (
                r#"<span class="status failed">失败</span>"#,
                format!("<br>{}", escape_html(error)),
            ),
        };

        let size_html = match outcome.bytes_freed() {
            0 => "-".to_string(),
            bytes => utils::format_size(bytes),
        };

        html.push_str(&format!(r#"
                <tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td class="path">{}{}</td>
                    <td>{}</td>
                </tr>
        "#,
            outcome.index,
            status_html,
            escape_html(&outcome.path.to_string_lossy()),
            detail,
            size_html,
        ));
    }

    html.push_str("</tbody></table>");

    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
