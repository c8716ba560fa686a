//! 固定キーワード辞書
//!
//! カテゴリ判定用のキーワード表と、日本語感情判定用のポジ/ネガ語。
//! いずれも `'static` データで、実行中に変更されない。

use crate::types::Topic;

/// 各カテゴリを示すキーワード（代表語）。宣言順に判定する
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Taste, &["味", "おいし", "美味", "まずい", "塩味", "甘い", "辛い", "ソース", "パスタ", "旨い", "うまい"]),
    (Topic::Service, &["接客", "スタッフ", "店員", "対応", "サービス", "笑顔", "愛想", "態度"]),
    (Topic::Ambience, &["雰囲気", "内装", "音楽", "落ち着", "デート", "明るい", "暗い"]),
    (Topic::WaitTime, &["待ち", "待た", "提供", "行列", "混雑", "時間がかかる"]),
    (Topic::Price, &["値段", "高い", "安い", "コスパ", "価格", "料金"]),
    (Topic::Cleanliness, &["清潔", "汚れ", "掃除", "トイレ", "衛生"]),
];

/// ポジティブ語
const POSITIVE_WORDS: &[&str] = &["美味しい", "おいしい", "最高", "満足", "おすすめ", "良い", "素晴らしい", "旨い", "うまい"];

/// ネガティブ語
const NEGATIVE_WORDS: &[&str] = &["まずい", "遅い", "不満", "汚い", "残念", "高すぎ", "苦い", "待たされた", "最悪"];

/// カテゴリ → キーワードの表（「その他」は含まない）
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [(Topic, &'static [&'static str])],
}

impl KeywordTable {
    /// 組み込みの飲食レビュー用キーワード表
    pub const fn builtin() -> Self {
        Self { entries: TOPIC_KEYWORDS }
    }

    /// (カテゴリ, キーワード) を宣言順に返す
    pub fn entries(&self) -> impl Iterator<Item = (Topic, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 日本語感情判定用のポジ/ネガ語
#[derive(Debug, Clone, Copy)]
pub struct PolarityWords {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

impl PolarityWords {
    pub const fn builtin() -> Self {
        Self {
            positive: POSITIVE_WORDS,
            negative: NEGATIVE_WORDS,
        }
    }
}

impl Default for PolarityWords {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_excludes_other() {
        let table = KeywordTable::builtin();
        assert!(table.entries().all(|(t, _)| t != Topic::Other));
    }

    #[test]
    fn test_table_follows_topic_order() {
        let topics: Vec<Topic> = KeywordTable::builtin().entries().map(|(t, _)| t).collect();
        assert_eq!(topics, Topic::ALL[..Topic::COUNT - 1].to_vec());
    }

    #[test]
    fn test_keywords_lookup() {
        let table = KeywordTable::builtin();
        let price = table.entries().find(|(t, _)| *t == Topic::Price).map(|(_, kws)| kws);
        assert!(price.is_some_and(|kws| kws.contains(&"コスパ")));
    }
}
