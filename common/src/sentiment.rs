//! 感情スコア
//!
//! 言語ごとに2つの戦略を持つ:
//! - 英語: VADER（`vader_sentiment`）による辞書ベース判定
//! - 日本語: 固定のポジ/ネガ語の出現回数による簡易判定
//!
//! VADER辞書はプロセス内で一度だけ準備し、以降は読み取り専用で共有する。

use crate::keywords::PolarityWords;
use crate::types::{round_to, Lang, SentimentScore, POLARITY_THRESHOLD};
use std::sync::OnceLock;
use tracing::{debug, warn};
use vader_sentiment::SentimentIntensityAnalyzer;

/// 文 → 感情スコア
pub trait SentimentScorer {
    fn score(&self, sentence: &str) -> SentimentScore;
}

static LEXICON: OnceLock<Option<SentimentIntensityAnalyzer<'static>>> = OnceLock::new();

/// VADER辞書を準備する（初回のみ、失敗しても処理は継続）
///
/// 準備に失敗した場合は `None` を返し、英語文は中立スコアになる。
pub fn ensure_lexicon() -> Option<&'static SentimentIntensityAnalyzer<'static>> {
    LEXICON
        .get_or_init(|| {
            let prepared = std::panic::catch_unwind(|| {
                let analyzer = SentimentIntensityAnalyzer::new();
                // 辞書は初回参照時に展開されるため、ここで一度引いておく
                let _ = analyzer.polarity_scores("good");
                analyzer
            });
            match prepared {
                Ok(analyzer) => {
                    debug!("VADER辞書を準備しました");
                    Some(analyzer)
                }
                Err(_) => {
                    warn!("VADER辞書の準備に失敗しました。英語文は中立スコアで扱います");
                    None
                }
            }
        })
        .as_ref()
}

/// 英語文の感情分析（VADER）
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, sentence: &str) -> SentimentScore {
        let Some(analyzer) = ensure_lexicon() else {
            return SentimentScore::NEUTRAL;
        };

        let scores = analyzer.polarity_scores(sentence);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        SentimentScore {
            compound: get("compound"),
            pos: get("pos"),
            neu: get("neu"),
            neg: get("neg"),
        }
    }
}

/// 簡易日本語感情スコア（ルールベース）
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordPolarityScorer {
    words: PolarityWords,
}

impl KeywordPolarityScorer {
    pub fn new(words: PolarityWords) -> Self {
        Self { words }
    }

    /// ポジ語・ネガ語の出現回数（重なりも数える）
    pub fn hits(&self, sentence: &str) -> (usize, usize) {
        let count = |words: &[&str]| -> usize {
            words.iter().map(|w| count_overlapping(sentence, w)).sum()
        };
        (count(self.words.positive), count(self.words.negative))
    }
}

impl SentimentScorer for KeywordPolarityScorer {
    fn score(&self, sentence: &str) -> SentimentScore {
        let (pos_hits, neg_hits) = self.hits(sentence);
        let raw = pos_hits as f64 - neg_hits as f64;

        // -1..1 に正規化
        let compound = if raw > 0.0 {
            (raw / (raw + 1.0)).min(1.0)
        } else if raw < 0.0 {
            (raw / (raw.abs() + 1.0)).max(-1.0)
        } else {
            0.0
        };

        // pos/neu/negは実測ではなくcompoundから決める固定値
        let (pos, neu, neg) = if compound > POLARITY_THRESHOLD {
            (0.6, 0.4, 0.0)
        } else if compound < -POLARITY_THRESHOLD {
            (0.0, 0.4, 0.6)
        } else {
            (0.0, 1.0, 0.0)
        };

        SentimentScore {
            compound: round_to(compound, 3),
            pos,
            neu,
            neg,
        }
    }
}

/// needle の出現回数（重なりを含む）
fn count_overlapping(haystack: &str, needle: &str) -> usize {
    let Some(step) = needle.chars().next().map(char::len_utf8) else {
        return 0;
    };

    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + step;
    }
    count
}

/// 組み込み語彙での日本語感情スコア
pub fn simple_japanese_sentiment(text: &str) -> SentimentScore {
    KeywordPolarityScorer::default().score(text)
}

/// 言語に応じて戦略を切り替えるスコアラー
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentEngine {
    japanese: KeywordPolarityScorer,
    english: LexiconScorer,
}

impl SentimentEngine {
    pub fn new(words: PolarityWords) -> Self {
        Self {
            japanese: KeywordPolarityScorer::new(words),
            english: LexiconScorer,
        }
    }

    /// 言語に対応するスコアラー
    pub fn scorer_for(&self, lang: Lang) -> &dyn SentimentScorer {
        match lang {
            Lang::En => &self.english,
            Lang::Ja => &self.japanese,
        }
    }

    pub fn score(&self, sentence: &str, lang: Lang) -> SentimentScore {
        self.scorer_for(lang).score(sentence)
    }
}
