//! 解析パイプライン
//!
//! レビュー群 → 文分割 → 言語判定＋感情スコア → カテゴリ分類 → 集計。
//! 状態を持たないため、同じ入力には常に同じ結果を返す。

use crate::category::{aggregate, CategoryBucket};
use crate::keywords::{KeywordTable, PolarityWords};
use crate::language::detect;
use crate::segmenter::segment;
use crate::sentiment::SentimentEngine;
use crate::types::{AnalysisReport, SentenceRecord};

/// レビュー解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewAnalyzer {
    keywords: KeywordTable,
    sentiment: SentimentEngine,
}

impl ReviewAnalyzer {
    pub fn new(keywords: KeywordTable, polarity: PolarityWords) -> Self {
        Self {
            keywords,
            sentiment: SentimentEngine::new(polarity),
        }
    }

    /// 1文を解析
    pub fn analyze_sentence(&self, sentence: &str) -> SentenceRecord {
        let lang = detect(sentence);
        SentenceRecord {
            text: sentence.to_string(),
            lang,
            scores: self.sentiment.score(sentence, lang),
        }
    }

    /// 1件のレビューを文ごとに解析
    pub fn analyze_review(&self, review: &str) -> Vec<SentenceRecord> {
        segment(review)
            .iter()
            .map(|s| self.analyze_sentence(s))
            .collect()
    }

    /// 複数レビューを文ごとに解析（レビュー順・文順を保持）
    pub fn analyze_sentences<S: AsRef<str>>(&self, reviews: &[S]) -> Vec<SentenceRecord> {
        reviews
            .iter()
            .flat_map(|r| self.analyze_review(r.as_ref()))
            .collect()
    }

    /// 文ごとの解析結果からレポートを組み立てる
    pub fn build_report(&self, records: &[SentenceRecord]) -> AnalysisReport {
        let buckets = CategoryBucket::from_records(records, &self.keywords);
        AnalysisReport {
            summary: aggregate(&buckets),
            details: buckets.detail_rows(),
        }
    }

    pub fn analyze<S: AsRef<str>>(&self, reviews: &[S]) -> AnalysisReport {
        let records = self.analyze_sentences(reviews);
        self.build_report(&records)
    }
}

/// 組み込み辞書でレビュー群を解析する
pub fn analyze_reviews<S: AsRef<str>>(reviews: &[S]) -> AnalysisReport {
    ReviewAnalyzer::default().analyze(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Lang, Topic};

    #[test]
    fn test_analyze_review_preserves_order() {
        let analyzer = ReviewAnalyzer::default();
        let records = analyzer.analyze_review("美味しい。接客が遅い！\n雰囲気は普通");
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["美味しい", "接客が遅い", "雰囲気は普通"]);
        assert!(records.iter().all(|r| r.lang == Lang::Ja));
    }

    #[test]
    fn test_analyze_empty_input() {
        let empty: Vec<String> = vec![];
        let report = analyze_reviews(&empty);
        assert!(report.is_empty());
        assert_eq!(report.summary.len(), Topic::COUNT);
        assert!(report.summary.iter().all(|s| s.count == 0));

        let blank = analyze_reviews(&["   ", "\n\n"]);
        assert!(blank.is_empty());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let reviews = ["パスタがとてもおいしかった、ソースが濃厚で満足です。", "Great food but slow service."];
        assert_eq!(analyze_reviews(&reviews), analyze_reviews(&reviews));
    }

    #[test]
    fn test_multi_label_rows_share_scores() {
        let report = analyze_reviews(&["値段は高いが味は最高"]);
        assert_eq!(report.details.len(), 2);
        assert_eq!(report.details[0].category, Topic::Taste);
        assert_eq!(report.details[1].category, Topic::Price);
        assert_eq!(report.details[0].compound, 0.5);
        assert_eq!(report.details[0].scores(), report.details[1].scores());

        let price = report.summary_for(Topic::Price).unwrap();
        assert_eq!(price.count, 1);
        assert_eq!(price.positive_pct, Some(100.0));
    }

    #[test]
    fn test_details_keep_review_order_across_topics() {
        let report = analyze_reviews(&["値段が高い", "パスタが美味しい"]);
        let rows: Vec<(Topic, &str)> = report
            .details
            .iter()
            .map(|d| (d.category, d.sentence.as_str()))
            .collect();
        assert_eq!(rows, vec![(Topic::Price, "値段が高い"), (Topic::Taste, "パスタが美味しい")]);
        assert_eq!(report.summary[0].topic, Topic::Taste);
    }

    #[test]
    fn test_english_sentence_uses_lexicon() {
        let analyzer = ReviewAnalyzer::default();
        let record = analyzer.analyze_sentence("The staff were friendly");
        assert_eq!(record.lang, Lang::En);
        assert!(record.scores.compound > 0.05);
    }
}
