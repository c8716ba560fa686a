//! エラー型定義
//!
//! 解析処理そのものは失敗しない（全入力に対して結果を返す）。
//! エラーになるのはレポートのシリアライズ・エクスポートのみ。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
