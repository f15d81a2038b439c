use crate::error::{AppError, Result};
use jobsearch_common::views::DEFAULT_LOCATION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// バックエンドURLを上書きする環境変数
pub const API_URL_ENV: &str = "JOBSEARCH_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub default_location: String,
    pub timeout_seconds: u64,
    pub use_llm_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            default_location: DEFAULT_LOCATION.into(),
            // LLM解析は時間がかかる
            timeout_seconds: 120,
            use_llm_default: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    /// ファイルが無ければデフォルト
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

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("jobsearch-assistant"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 環境変数を優先。不正なURLは無視して設定ファイルの値を使う
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if url.trim().is_empty() {
                return;
            }
            if let Err(e) = self.set_base_url(&url) {
                tracing::warn!("{} を無視します: {}", API_URL_ENV, e);
            }
        }
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }
}
