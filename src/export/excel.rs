//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す

use crate::error::Result;
use review_analysis_common::export::excel_core::generate_report_excel_buffer;
use review_analysis_common::AnalysisReport;
use std::path::Path;

pub fn generate_excel(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let buffer = generate_report_excel_buffer(report)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
