//! 言語判定（簡易）
//!
//! 英字が多ければen、そうでなければja。真の言語識別ではない。

use crate::types::Lang;

/// かな・漢字とみなすコードポイントの下限（これを超える文字）
const CJK_THRESHOLD: u32 = 0x3000;

/// 文の言語を判定する（同数はja）
pub fn detect(sentence: &str) -> Lang {
    let (letters, kana_kanji) = sentence.chars().fold((0usize, 0usize), |(letters, cjk), c| {
        (
            letters + usize::from(c.is_alphabetic()),
            cjk + usize::from(u32::from(c) > CJK_THRESHOLD),
        )
    });

    if letters > kana_kanji {
        Lang::En
    } else {
        Lang::Ja
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        assert_eq!(detect("Great food!"), Lang::En);
        assert_eq!(detect("The staff was rude"), Lang::En);
    }

    #[test]
    fn test_detect_japanese() {
        assert_eq!(detect("美味しかった"), Lang::Ja);
        assert_eq!(detect("スタッフの対応が遅い"), Lang::Ja);
    }

    #[test]
    fn test_detect_empty_defaults_to_ja() {
        assert_eq!(detect(""), Lang::Ja);
        assert_eq!(detect("123 !!"), Lang::Ja);
    }

    #[test]
    fn test_detect_mixed_script() {
        // かな・漢字も alphabetic に数えるため、英字が1文字でもあればen寄り
        assert_eq!(detect("Pasta美味しい"), Lang::En);
        // 全角読点は alphabetic ではないので ja 側に加算される
        assert_eq!(detect("美味しい、安い"), Lang::Ja);
        assert_eq!(detect("OK、美味しい"), Lang::En);
    }
}
