//! 解析結果の保存（CSV簡易DB）
//!
//! 1解析 = 1行の追記専用ストア。
//! 列: timestamp, num_reviews, summary_json, details_json

use crate::error::{ReviewAiError, Result};
use review_analysis_common::{AnalysisReport, CategorySummary, DetailRow};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

const HEADER: [&str; 4] = ["timestamp", "num_reviews", "summary_json", "details_json"];

/// 保存レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: String,
    pub num_reviews: usize,
    pub summary: Vec<CategorySummary>,
    pub details: Vec<DetailRow>,
}

impl AnalysisRecord {
    /// 現在時刻（UTC）でレコードを作成
    pub fn new(num_reviews: usize, report: &AnalysisReport) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            num_reviews,
            summary: report.summary.clone(),
            details: report.details.clone(),
        }
    }
}

/// CSV上の1行
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    timestamp: String,
    num_reviews: usize,
    summary_json: String,
    details_json: String,
}

impl CsvRow {
    fn from_record(record: &AnalysisRecord) -> Result<Self> {
        Ok(Self {
            timestamp: record.timestamp.clone(),
            num_reviews: record.num_reviews,
            summary_json: serde_json::to_string(&record.summary)?,
            details_json: serde_json::to_string(&record.details)?,
        })
    }

    fn into_record(self) -> Result<AnalysisRecord> {
        let summary = serde_json::from_str(&self.summary_json)
            .map_err(|e| ReviewAiError::InvalidRecord(format!("{} summary_json: {}", self.timestamp, e)))?;
        let details = serde_json::from_str(&self.details_json)
            .map_err(|e| ReviewAiError::InvalidRecord(format!("{} details_json: {}", self.timestamp, e)))?;
        Ok(AnalysisRecord {
            timestamp: self.timestamp,
            num_reviews: self.num_reviews,
            summary,
            details,
        })
    }
}

/// 追記専用のレコードストア
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存先ディレクトリとヘッダー行を用意する
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        if !self.path.exists() {
            let mut writer = csv::Writer::from_path(&self.path)?;
            writer.write_record(HEADER)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// レコードを1行追記
    pub fn append(&self, record: &AnalysisRecord) -> Result<()> {
        self.init()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(CsvRow::from_record(record)?)?;
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), timestamp = %record.timestamp, "解析結果を追記しました");
        Ok(())
    }

    /// 全レコードを読み込む（壊れた行は警告してスキップ）
    pub fn load(&self) -> Result<Vec<AnalysisRecord>> {
        self.init()?;

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            match row.map_err(ReviewAiError::from).and_then(CsvRow::into_record) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("保存データの行をスキップしました: {}", e),
            }
        }
        Ok(records)
    }

    /// 最新 `limit` 件（古い順）
    pub fn tail(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        let mut records = self.load()?;
        let start = records.len().saturating_sub(limit);
        Ok(records.split_off(start))
    }
}
