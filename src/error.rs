use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない入力形式です: {0}（.txt / .csv / .xlsx に対応）")]
    UnsupportedInput(String),

    #[error("解析するレビューがありません")]
    NoReviews,

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("保存データが不正: {0}")]
    InvalidRecord(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

impl From<review_analysis_common::Error> for ReviewAiError {
    fn from(err: review_analysis_common::Error) -> Self {
        match err {
            review_analysis_common::Error::Json(e) => ReviewAiError::JsonParse(e),
            review_analysis_common::Error::Export(msg) => ReviewAiError::ExcelGeneration(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReviewAiError>;
