//! 解析結果の型定義
//!
//! - SentenceRecord: 文ごとの解析結果（テキスト・言語・感情スコア）
//! - CategorySummary: カテゴリ別の集計
//! - DetailRow: (文, カテゴリ) ごとの明細行
//! - AnalysisReport: 集計＋明細（JSONエクスポートの形）

use serde::{Deserialize, Serialize};
use std::fmt;

/// ポジティブ/ネガティブ判定の閾値（compound）
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// 小数点以下 `digits` 桁に丸める
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// 分類カテゴリ（宣言順が表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Taste,
    Service,
    Ambience,
    WaitTime,
    Price,
    Cleanliness,
    Other,
}

impl Topic {
    /// カテゴリ数
    pub const COUNT: usize = 7;

    /// 全カテゴリ（宣言順）
    pub const ALL: [Topic; Topic::COUNT] = [
        Topic::Taste,
        Topic::Service,
        Topic::Ambience,
        Topic::WaitTime,
        Topic::Price,
        Topic::Cleanliness,
        Topic::Other,
    ];

    /// 宣言順のインデックス
    pub fn index(self) -> usize {
        self as usize
    }

    /// シリアライズ用ID
    pub fn id(self) -> &'static str {
        match self {
            Topic::Taste => "taste",
            Topic::Service => "service",
            Topic::Ambience => "ambience",
            Topic::WaitTime => "wait_time",
            Topic::Price => "price",
            Topic::Cleanliness => "cleanliness",
            Topic::Other => "other",
        }
    }

    /// 表示用ラベル
    pub fn label(self) -> &'static str {
        match self {
            Topic::Taste => "味",
            Topic::Service => "接客",
            Topic::Ambience => "雰囲気",
            Topic::WaitTime => "待ち時間",
            Topic::Price => "価格",
            Topic::Cleanliness => "清潔感",
            Topic::Other => "その他",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 判定言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ja,
    En,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 感情スコア（VADER互換の4次元）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    /// 総合スコア -1.0..=1.0
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

impl SentimentScore {
    /// 中立スコア
    pub const NEUTRAL: SentimentScore = SentimentScore {
        compound: 0.0,
        pos: 0.0,
        neu: 1.0,
        neg: 0.0,
    };

    /// compoundが閾値を超えて正か
    pub fn is_positive(&self) -> bool {
        self.compound > POLARITY_THRESHOLD
    }
}

/// 文ごとの解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub text: String,
    pub lang: Lang,
    pub scores: SentimentScore,
}

/// カテゴリ別集計（件数0ならavg/pctはnull）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub topic: Topic,
    pub count: usize,
    pub avg_compound: Option<f64>,
    pub positive_pct: Option<f64>,
}

/// 明細行（多ラベルの文はカテゴリ数だけ行が出る）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub category: Topic,
    pub sentence: String,
    pub lang: Lang,
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

impl DetailRow {
    pub fn new(category: Topic, record: &SentenceRecord) -> Self {
        Self {
            category,
            sentence: record.text.clone(),
            lang: record.lang,
            compound: record.scores.compound,
            pos: record.scores.pos,
            neu: record.scores.neu,
            neg: record.scores.neg,
        }
    }

    pub fn scores(&self) -> SentimentScore {
        SentimentScore {
            compound: self.compound,
            pos: self.pos,
            neu: self.neu,
            neg: self.neg,
        }
    }
}

/// 解析レポート（集計＋明細）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Vec<CategorySummary>,
    pub details: Vec<DetailRow>,
}

impl AnalysisReport {
    /// 解析対象の文が1つもないか
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// 指定カテゴリの集計
    pub fn summary_for(&self, topic: Topic) -> Option<&CategorySummary> {
        self.summary.iter().find(|s| s.topic == topic)
    }

    /// 整形JSON（非ASCIIはそのまま）
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
