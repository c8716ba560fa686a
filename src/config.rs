use crate::error::{ReviewAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定の保存先（カレント基準）
pub const DEFAULT_STORAGE_PATH: &str = "data/results.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 解析結果の保存先CSV
    pub storage_path: PathBuf,
    /// 解析結果を保存するか
    pub save_results: bool,
    /// historyで表示する件数
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            save_results: true,
            history_limit: 100,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（なければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("review-ai").join("config.json"))
    }
}
