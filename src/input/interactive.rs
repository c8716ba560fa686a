//! 対話式レビュー入力

use crate::error::{ReviewAiError, Result};
use dialoguer::Input;

/// 1行1レビューで入力を受け付ける（空行で終了）
pub fn prompt_reviews() -> Result<Vec<String>> {
    println!("レビューを1件ずつ入力してください（例：美味しかった！でも接客が遅かった）");
    println!("空行で入力を終了します\n");

    let mut reviews = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(format!("レビュー{}", reviews.len() + 1))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ReviewAiError::Prompt(e.to_string()))?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        reviews.push(trimmed.to_string());
    }

    Ok(reviews)
}
