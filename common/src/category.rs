//! カテゴリ分類と集計
//!
//! 1文が複数カテゴリに該当することもある（多ラベル）。
//! どのキーワードにも該当しない文は「その他」のみ。

use crate::keywords::KeywordTable;
use crate::types::{round_to, CategorySummary, DetailRow, SentenceRecord, Topic};

/// 組み込みキーワード表で文をカテゴリに割り当てる
pub fn categorize(sentence: &str) -> Vec<Topic> {
    KeywordTable::builtin().categorize(sentence)
}

impl KeywordTable {
    /// 文をカテゴリに割り当てる（宣言順・重複なし・空なら[その他]）
    pub fn categorize(&self, sentence: &str) -> Vec<Topic> {
        let normalized = sentence.to_lowercase();

        let mut assigned: Vec<Topic> = self
            .entries()
            .filter(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
            .map(|(topic, _)| topic)
            .collect();

        if assigned.is_empty() {
            assigned.push(Topic::Other);
        }
        assigned
    }
}

/// カテゴリ → 文の振り分け（挿入順を保持）
#[derive(Debug, Default)]
pub struct CategoryBucket<'a> {
    buckets: [Vec<&'a SentenceRecord>; Topic::COUNT],
    /// 初めて文が入った順のカテゴリ
    order: Vec<Topic>,
}

impl<'a> CategoryBucket<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 文ごとにカテゴリを判定して振り分ける
    pub fn from_records(records: &'a [SentenceRecord], table: &KeywordTable) -> Self {
        let mut bucket = Self::new();
        for record in records {
            for topic in table.categorize(&record.text) {
                bucket.push(topic, record);
            }
        }
        bucket
    }

    pub fn push(&mut self, topic: Topic, record: &'a SentenceRecord) {
        let bucket = &mut self.buckets[topic.index()];
        if bucket.is_empty() {
            self.order.push(topic);
        }
        bucket.push(record);
    }

    pub fn get(&self, topic: Topic) -> &[&'a SentenceRecord] {
        &self.buckets[topic.index()]
    }

    /// 全カテゴリを宣言順に（空も含む）
    pub fn iter(&self) -> impl Iterator<Item = (Topic, &[&'a SentenceRecord])> + '_ {
        Topic::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// 明細行（カテゴリは初出順、カテゴリ内は挿入順）
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        self.order
            .iter()
            .flat_map(|&topic| self.get(topic).iter().map(move |r| DetailRow::new(topic, r)))
            .collect()
    }
}

/// カテゴリごとのスコア集計（全カテゴリを宣言順に返す）
pub fn aggregate(buckets: &CategoryBucket<'_>) -> Vec<CategorySummary> {
    buckets
        .iter()
        .map(|(topic, records)| summarize(topic, records))
        .collect()
}

fn summarize(topic: Topic, records: &[&SentenceRecord]) -> CategorySummary {
    if records.is_empty() {
        return CategorySummary {
            topic,
            count: 0,
            avg_compound: None,
            positive_pct: None,
        };
    }

    let count = records.len();
    let total: f64 = records.iter().map(|r| r.scores.compound).sum();
    let positive = records.iter().filter(|r| r.scores.is_positive()).count();

    CategorySummary {
        topic,
        count,
        avg_compound: Some(round_to(total / count as f64, 3)),
        positive_pct: Some(round_to(positive as f64 / count as f64 * 100.0, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Lang, SentimentScore};

    fn record(text: &str, compound: f64) -> SentenceRecord {
        SentenceRecord {
            text: text.to_string(),
            lang: Lang::Ja,
            scores: SentimentScore {
                compound,
                ..SentimentScore::NEUTRAL
            },
        }
    }

    #[test]
    fn test_categorize_multi_label_in_declared_order() {
        assert_eq!(categorize("値段は高いが味は最高"), vec![Topic::Taste, Topic::Price]);
    }

    #[test]
    fn test_categorize_other() {
        assert_eq!(categorize("普通の店でした"), vec![Topic::Other]);
        assert_eq!(categorize(""), vec![Topic::Other]);
    }

    #[test]
    fn test_categorize_dedups_topic() {
        // 味・美味・ソース・パスタ すべて「味」カテゴリ
        assert_eq!(categorize("パスタのソースの味が美味"), vec![Topic::Taste]);
    }

    #[test]
    fn test_categorize_lowercases() {
        // カタカナは大文字小文字の区別がないので結果は変わらない
        assert_eq!(categorize("コスパ最高"), vec![Topic::Price]);
    }

    #[test]
    fn test_bucket_keeps_insertion_order() {
        let records = vec![
            record("味が濃い", 0.0),
            record("店員が親切", 0.5),
            record("甘いデザート", 0.2),
        ];
        let bucket = CategoryBucket::from_records(&records, &KeywordTable::builtin());
        let taste: Vec<&str> = bucket.get(Topic::Taste).iter().map(|r| r.text.as_str()).collect();
        assert_eq!(taste, vec!["味が濃い", "甘いデザート"]);
        assert_eq!(bucket.get(Topic::Service).len(), 1);
        assert!(bucket.get(Topic::Other).is_empty());
    }

    #[test]
    fn test_aggregate_values() {
        let records = vec![record("a", 0.5), record("b", -0.2), record("c", 0.8)];
        let mut bucket = CategoryBucket::new();
        for r in &records {
            bucket.push(Topic::Taste, r);
        }

        let summary = aggregate(&bucket);
        assert_eq!(summary.len(), Topic::COUNT);

        let taste = &summary[Topic::Taste.index()];
        assert_eq!(taste.count, 3);
        assert_eq!(taste.avg_compound, Some(0.367));
        assert_eq!(taste.positive_pct, Some(66.7));
    }

    #[test]
    fn test_aggregate_empty_topics_present() {
        let bucket = CategoryBucket::new();
        let summary = aggregate(&bucket);
        let topics: Vec<Topic> = summary.iter().map(|s| s.topic).collect();
        assert_eq!(topics, Topic::ALL.to_vec());
        assert!(summary.iter().all(|s| s.count == 0 && s.avg_compound.is_none() && s.positive_pct.is_none()));
    }

    #[test]
    fn test_positive_threshold_is_exclusive() {
        let records = vec![record("a", 0.05), record("b", 0.051)];
        let mut bucket = CategoryBucket::new();
        for r in &records {
            bucket.push(Topic::Price, r);
        }
        let summary = aggregate(&bucket);
        assert_eq!(summary[Topic::Price.index()].positive_pct, Some(50.0));
    }

    #[test]
    fn test_detail_rows_repeat_multi_label_sentence() {
        let records = vec![record("値段は高いが味は最高", 0.5)];
        let bucket = CategoryBucket::from_records(&records, &KeywordTable::builtin());
        let rows = bucket.detail_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, Topic::Taste);
        assert_eq!(rows[1].category, Topic::Price);
        assert_eq!(rows[0].scores(), rows[1].scores());
    }

    #[test]
    fn test_detail_rows_follow_first_seen_topic() {
        let records = vec![
            record("値段が高い", 0.0),
            record("パスタが美味しい", 0.5),
            record("料金も安い", 0.0),
        ];
        let bucket = CategoryBucket::from_records(&records, &KeywordTable::builtin());
        let rows = bucket.detail_rows();
        let pairs: Vec<(Topic, &str)> = rows.iter().map(|r| (r.category, r.sentence.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (Topic::Price, "値段が高い"),
                (Topic::Price, "料金も安い"),
                (Topic::Taste, "パスタが美味しい"),
            ]
        );

        // 集計は宣言順のまま
        let summary = aggregate(&bucket);
        assert_eq!(summary[0].topic, Topic::Taste);
        assert_eq!(summary[Topic::Price.index()].count, 2);
    }
}
