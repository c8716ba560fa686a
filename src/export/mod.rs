pub mod json;
pub mod excel;

use crate::error::Result;
use review_analysis_common::AnalysisReport;
use std::path::Path;

/// 指定された形式でレポートを書き出す
pub fn export_report(
    report: &AnalysisReport,
    json_path: Option<&Path>,
    excel_path: Option<&Path>,
) -> Result<()> {
    if let Some(path) = json_path {
        println!("- JSONを出力中...");
        json::write_json(report, path)?;
        println!("✔ JSON出力: {}", path.display());
    }

    if let Some(path) = excel_path {
        println!("- Excelを生成中...");
        excel::generate_excel(report, path)?;
        println!("✔ Excel出力: {}", path.display());
    }

    Ok(())
}
