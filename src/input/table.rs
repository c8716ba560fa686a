//! 表形式（CSV / Excel）からのレビュー読み込み

use crate::error::{ReviewAiError, Result};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

/// 本文らしき列を選ぶ: 数値以外の値を含む最初の列（なければ先頭列）
fn pick_text_column(rows: &[Vec<String>]) -> usize {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .find(|&col| {
            rows.iter().any(|row| {
                row.get(col)
                    .map(|v| v.trim())
                    .is_some_and(|v| !v.is_empty() && v.parse::<f64>().is_err())
            })
        })
        .unwrap_or(0)
}

fn column_values(rows: Vec<Vec<String>>) -> Vec<String> {
    let col = pick_text_column(&rows);
    rows.into_iter()
        .filter_map(|mut row| {
            if col < row.len() {
                Some(row.swap_remove(col))
            } else {
                None
            }
        })
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// CSVを読み込む（1行目はヘッダー）
pub fn read_csv_reviews(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(column_values(rows))
}

/// Excelを読み込む（先頭シート、1行目はヘッダー）
pub fn read_xlsx_reviews(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ReviewAiError::ExcelRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReviewAiError::ExcelRead(format!("シートがありません: {}", path.display())))?
        .map_err(|e| ReviewAiError::ExcelRead(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .skip(1)
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    Ok(column_values(rows))
}
