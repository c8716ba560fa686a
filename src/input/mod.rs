//! レビュー入力の読み込み
//!
//! - テキスト: 1行1レビュー
//! - CSV / Excel: 本文らしき列を1つ選んで1セル1レビュー
//! - フォルダ: 直下の対応ファイルをファイル名順に読み込む

mod interactive;
mod table;

pub use interactive::prompt_reviews;

use crate::error::{ReviewAiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// サンプルレビュー
pub const SAMPLE_REVIEWS: &[&str] = &[
    "パスタがとてもおいしかった、ソースが濃厚で満足です。",
    "スタッフの対応が遅くて残念。注文から提供まで時間がかかった。",
    "店内は落ち着いた雰囲気でデートに向いていると思います。",
    "値段が高めに感じたが、量は十分だった。",
    "テーブルが少し汚れていた。清潔感がもう少し欲しい。",
];

/// 入力ファイルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Csv,
    Xlsx,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "txt" => Some(InputKind::Text),
            "csv" => Some(InputKind::Csv),
            "xlsx" | "xlsm" | "xls" => Some(InputKind::Xlsx),
            _ => None,
        }
    }
}

/// テキストを1行1レビューに分ける（空行は除外）
pub fn split_reviews(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// フォルダ直下の対応ファイルを列挙（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ReviewAiError::FileNotFound(folder.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| InputKind::from_path(p).is_some())
        .collect();

    files.sort();
    Ok(files)
}

/// 1ファイルからレビューを読み込む
pub fn load_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ReviewAiError::FileNotFound(path.display().to_string()));
    }

    let kind = InputKind::from_path(path)
        .ok_or_else(|| ReviewAiError::UnsupportedInput(path.display().to_string()))?;

    let reviews = match kind {
        InputKind::Text => {
            // 不正なUTF-8は置換して読む
            let bytes = std::fs::read(path)?;
            let content = String::from_utf8_lossy(&bytes);
            split_reviews(content.trim_start_matches('\u{feff}'))
        }
        InputKind::Csv => table::read_csv_reviews(path)?,
        InputKind::Xlsx => table::read_xlsx_reviews(path)?,
    };

    tracing::debug!(path = %path.display(), count = reviews.len(), "レビューを読み込みました");
    Ok(reviews)
}

/// ファイル・フォルダ・直接入力をまとめて読み込む（指定順を保持）
pub fn collect_reviews(paths: &[PathBuf], texts: &[String]) -> Result<Vec<String>> {
    let mut reviews = Vec::new();

    for path in paths {
        if path.is_dir() {
            for file in scan_folder(path)? {
                reviews.extend(load_file(&file)?);
            }
        } else {
            reviews.extend(load_file(path)?);
        }
    }

    for text in texts {
        reviews.extend(split_reviews(text));
    }

    Ok(reviews)
}
