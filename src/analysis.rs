//! 解析の実行（解析 → 表示 → 出力 → 保存）

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::export;
use crate::storage::{AnalysisRecord, RecordStore};
use indicatif::{ProgressBar, ProgressStyle};
use review_analysis_common::{AnalysisReport, ReviewAnalyzer};

/// この件数以上でプログレスバーを表示
const PROGRESS_THRESHOLD: usize = 50;

/// レビュー群を解析する（件数が多い場合は進捗を表示）
///
/// レポートと解析した文の数を返す
pub fn analyze_with_progress(reviews: &[String]) -> (AnalysisReport, usize) {
    let analyzer = ReviewAnalyzer::default();

    let progress = (reviews.len() >= PROGRESS_THRESHOLD).then(|| {
        let bar = ProgressBar::new(reviews.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len}件") {
            bar.set_style(style);
        }
        bar
    });

    let mut records = Vec::new();
    for review in reviews {
        records.extend(analyzer.analyze_review(review));
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    tracing::debug!(reviews = reviews.len(), sentences = records.len(), "文ごとの解析が完了しました");
    (analyzer.build_report(&records), records.len())
}

/// 解析して結果を表示・出力・保存する
pub fn run_analysis(reviews: &[String], output: &OutputArgs, config: &Config) -> Result<AnalysisReport> {
    println!("レビュー数: {} 件\n", reviews.len());

    println!("[1/3] 解析中...");
    let (report, sentences) = analyze_with_progress(reviews);
    println!("✔ {}文を解析\n", sentences);

    if report.is_empty() {
        println!("解析できる文がありませんでした");
    }

    display::print_summary(&report.summary);
    if !output.summary_only {
        println!();
        display::print_details(&report.details);
    }
    println!();

    println!("[2/3] 出力中...");
    export::export_report(&report, output.output.as_deref(), output.excel.as_deref())?;
    println!("✔ 出力完了\n");

    println!("[3/3] 保存中...");
    if config.save_results && !output.no_save {
        let store = RecordStore::new(&config.storage_path);
        store.append(&AnalysisRecord::new(reviews.len(), &report))?;
        println!("✔ 解析結果を保存しました（{}）", store.path().display());
    } else {
        println!("- 保存をスキップしました");
    }

    Ok(report)
}
