//! コンソール表示（集計表・明細表・保存履歴）

use crate::storage::AnalysisRecord;
use review_analysis_common::{CategorySummary, DetailRow};

fn format_optional(value: Option<f64>, digits: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", digits, v))
}

/// 集計表の1行
pub fn summary_line(summary: &CategorySummary) -> String {
    format!(
        "  {}\t件数: {}\t平均: {}\tポジティブ率: {}",
        summary.topic.label(),
        summary.count,
        format_optional(summary.avg_compound, 3),
        summary.positive_pct.map_or_else(|| "-".to_string(), |v| format!("{:.1}%", v)),
    )
}

/// 明細表の1行
pub fn detail_line(detail: &DetailRow) -> String {
    format!(
        "  [{}] ({}) {:+.3}  pos={:.3} neu={:.3} neg={:.3}  {}",
        detail.category.label(),
        detail.lang,
        detail.compound,
        detail.pos,
        detail.neu,
        detail.neg,
        detail.sentence,
    )
}

pub fn print_summary(summary: &[CategorySummary]) {
    println!("カテゴリ別集計（score: compound）");
    for s in summary {
        println!("{}", summary_line(s));
    }
}

pub fn print_details(details: &[DetailRow]) {
    println!("文ごとの解析結果（カテゴリ／言語／感情スコア）");
    if details.is_empty() {
        println!("  (なし)");
    }
    for d in details {
        println!("{}", detail_line(d));
    }
}

pub fn print_history(records: &[AnalysisRecord]) {
    println!("保存済みレコード（{}件）", records.len());
    for record in records {
        let sentences: usize = record.summary.iter().map(|s| s.count).sum();
        println!(
            "  {}  レビュー数: {}  明細: {}行  (カテゴリ割当 {}件)",
            record.timestamp,
            record.num_reviews,
            record.details.len(),
            sentences,
        );
    }
}
