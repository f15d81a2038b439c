//! セッションのファイル保存
//!
//! CLIはコマンドごとにプロセスが終わるため、アップロードで得た
//! セッションを設定ディレクトリに保存して次のコマンドで使う。

use crate::config::Config;
use crate::error::Result;
use jobsearch_common::{Session, SessionPersistence};
use std::path::{Path, PathBuf};

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// デフォルトの保存先（~/.config/jobsearch-assistant/session.json）
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::config_dir()?.join(SESSION_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionPersistence for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "セッションファイルが不正です: {}", e);
                None
            }
        }
    }

    fn save(&mut self, session: &Session) {
        if let Err(e) = self.write(session) {
            tracing::warn!(path = %self.path.display(), "セッションを保存できませんでした: {}", e);
        }
    }

    fn clear(&mut self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), "セッションを削除できませんでした: {}", e);
        }
    }
}
