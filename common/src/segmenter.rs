//! 文分割
//!
//! 改行の連続、または文末記号（。．！!？?.）＋後続空白を区切りとする。
//! 区切り記号は文に含めない。

use regex::Regex;

/// レビュー本文を文に分割する（空文は除外）
pub fn segment(review: &str) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref BOUNDARY_RE: Regex = Regex::new(r"\n+|[。．！!？?.]+\s*").unwrap();
    }

    BOUNDARY_RE
        .split(review)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
