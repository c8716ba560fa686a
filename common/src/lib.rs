//! Review Analysis Common Library
//!
//! 飲食レビューの解析コア（文分割・言語判定・感情スコア・カテゴリ分類・集計）。
//! ファイルI/Oは持たず、CLI側から呼び出される。

pub mod types;
pub mod error;
pub mod keywords;
pub mod segmenter;
pub mod language;
pub mod sentiment;
pub mod category;
pub mod pipeline;
pub mod export;

pub use types::{AnalysisReport, CategorySummary, DetailRow, Lang, SentenceRecord, SentimentScore, Topic};
pub use error::{Error, Result};
pub use keywords::{KeywordTable, PolarityWords};
pub use segmenter::segment;
pub use language::detect;
pub use sentiment::{
    ensure_lexicon, simple_japanese_sentiment, KeywordPolarityScorer, LexiconScorer,
    SentimentEngine, SentimentScorer,
};
pub use category::{aggregate, categorize, CategoryBucket};
pub use pipeline::{analyze_reviews, ReviewAnalyzer};
