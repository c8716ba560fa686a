//! Excel生成（共通ライブラリ）
//!
//! 解析レポートを「集計」「詳細」の2シートに書き出す。

use crate::error::{Error, Result};
use crate::types::{AnalysisReport, CategorySummary, DetailRow};
use rust_xlsxwriter::*;

/// 集計シート名
pub const SUMMARY_SHEET: &str = "集計";
/// 詳細シート名
pub const DETAIL_SHEET: &str = "詳細";

/// 列定義
struct Column {
    label: &'static str,
    width: f64,
}

const SUMMARY_COLUMNS: &[Column] = &[
    Column { label: "カテゴリ", width: 12.0 },
    Column { label: "件数", width: 8.0 },
    Column { label: "平均compound", width: 14.0 },
    Column { label: "ポジティブ率(%)", width: 16.0 },
];

const DETAIL_COLUMNS: &[Column] = &[
    Column { label: "カテゴリ", width: 12.0 },
    Column { label: "文", width: 60.0 },
    Column { label: "言語", width: 6.0 },
    Column { label: "compound", width: 10.0 },
    Column { label: "pos", width: 8.0 },
    Column { label: "neu", width: 8.0 },
    Column { label: "neg", width: 8.0 },
];

fn xlsx_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Export(format!("{}: {}", context, e))
}

/// ヘッダー行と列幅を設定
fn write_header(worksheet: &mut Worksheet, columns: &[Column], format: &Format) -> Result<()> {
    for (col, column) in columns.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, column.label, format)
            .map_err(xlsx_err("ヘッダー書き込みエラー"))?;
        worksheet
            .set_column_width(col, column.width)
            .map_err(xlsx_err("列幅設定エラー"))?;
    }
    Ok(())
}

fn write_summary_row(worksheet: &mut Worksheet, row: u32, summary: &CategorySummary) -> Result<()> {
    let err = xlsx_err("集計書き込みエラー");
    worksheet.write_string(row, 0, summary.topic.label()).map_err(&err)?;
    worksheet.write_number(row, 1, summary.count as f64).map_err(&err)?;

    // 件数0のカテゴリは「-」
    for (col, value) in [(2u16, summary.avg_compound), (3u16, summary.positive_pct)] {
        match value {
            Some(v) => worksheet.write_number(row, col, v).map_err(&err)?,
            None => worksheet.write_string(row, col, "-").map_err(&err)?,
        };
    }
    Ok(())
}

fn write_detail_row(worksheet: &mut Worksheet, row: u32, detail: &DetailRow, wrap: &Format) -> Result<()> {
    let err = xlsx_err("詳細書き込みエラー");
    worksheet.write_string(row, 0, detail.category.label()).map_err(&err)?;
    worksheet
        .write_string_with_format(row, 1, &detail.sentence, wrap)
        .map_err(&err)?;
    worksheet.write_string(row, 2, detail.lang.as_str()).map_err(&err)?;
    for (offset, value) in [detail.compound, detail.pos, detail.neu, detail.neg].into_iter().enumerate() {
        worksheet.write_number(row, 3 + offset as u16, value).map_err(&err)?;
    }
    Ok(())
}

/// Excelをバッファに生成
pub fn generate_report_excel_buffer(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let wrap_format = Format::new().set_text_wrap();

    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SUMMARY_SHEET)
            .map_err(xlsx_err("シート名設定エラー"))?;
        write_header(worksheet, SUMMARY_COLUMNS, &header_format)?;
        for (i, summary) in report.summary.iter().enumerate() {
            write_summary_row(worksheet, i as u32 + 1, summary)?;
        }
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(DETAIL_SHEET)
            .map_err(xlsx_err("シート名設定エラー"))?;
        write_header(worksheet, DETAIL_COLUMNS, &header_format)?;
        for (i, detail) in report.details.iter().enumerate() {
            write_detail_row(worksheet, i as u32 + 1, detail, &wrap_format)?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(xlsx_err("Excel保存エラー"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze_reviews;

    #[test]
    fn test_generate_buffer_is_xlsx() {
        let report = analyze_reviews(&["値段は高いが味は最高", "店員の態度が悪い"]);
        let buffer = generate_report_excel_buffer(&report).unwrap();
        // xlsxはZIP形式
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_buffer_for_empty_report() {
        let empty: Vec<&str> = vec![];
        let report = analyze_reviews(&empty);
        assert!(generate_report_excel_buffer(&report).is_ok());
    }
}
