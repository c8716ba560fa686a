//! JSON出力（集計＋明細）

use crate::error::Result;
use review_analysis_common::AnalysisReport;
use std::path::Path;

pub fn write_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = report.to_json_pretty()?;
    std::fs::write(output_path, json)?;
    Ok(())
}

/// JSONファイルからレポートを読み込む
pub fn read_json(path: &Path) -> Result<AnalysisReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
