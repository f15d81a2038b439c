//! セッション画面コントローラー
//!
//! 2つの独立した軸で画面状態を管理する:
//! - ダイアログ軸: アップロードダイアログの開閉
//! - セクション軸: 結果エリアに出すビュー
//!
//! セッション（user_id/session_id）はここだけが持ち、各ビューへは引数で渡す。
//! 通信は行わない。呼び出し側がレスポンスをイベントとして渡す。

use thiserror::Error;

use crate::error::ApiError;
use crate::format::format_size_kb;
use crate::messages::{upload_success, UNEXPECTED_RESPONSE, UPLOAD_FIRST};
use crate::persistence::SessionPersistence;
use crate::render::{render, ResultView};
use crate::types::{
    ActiveSection, AnalysisResult, FileMeta, Job, Match, ResultPayload, Session, UploadResponse,
    UploadResult,
};

/// ナビゲーションボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Upload,
    Search,
    Match,
}

/// 前提条件を満たさず無視したイベント
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("upload dialog is not open")]
    DialogClosed,

    #[error("no active session")]
    NoSession,

    #[error("upload response did not contain a session")]
    InvalidUploadResponse,
}

pub struct SessionController {
    section: ActiveSection,
    payload: Option<ResultPayload>,
    session: Option<Session>,
    dialog_open: bool,
    upload_error: Option<String>,
    persistence: Option<Box<dyn SessionPersistence>>,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("section", &self.section)
            .field("payload", &self.payload)
            .field("session", &self.session)
            .field("dialog_open", &self.dialog_open)
            .field("upload_error", &self.upload_error)
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            section: ActiveSection::None,
            payload: None,
            session: None,
            dialog_open: false,
            upload_error: None,
            persistence: None,
        }
    }

    /// 永続化付きで生成。保存済みセッションがあれば復元する
    pub fn with_persistence(persistence: Box<dyn SessionPersistence>) -> Self {
        let session = persistence.load();
        Self {
            session,
            persistence: Some(persistence),
            ..Self::new()
        }
    }

    // =============================================
    // 参照
    // =============================================

    pub fn section(&self) -> ActiveSection {
        self.section
    }

    pub fn payload(&self) -> Option<&ResultPayload> {
        self.payload.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    /// セッションが無ければ「先にアップロード」エラー
    pub fn require_session(&self) -> Result<&Session, ApiError> {
        self.session
            .as_ref()
            .ok_or_else(|| ApiError::validation(UPLOAD_FIRST))
    }

    pub fn can_analyze(&self) -> bool {
        self.session.is_some()
    }

    pub fn can_search(&self) -> bool {
        self.session.is_some()
    }

    /// 現在の結果エリア
    pub fn view(&self) -> ResultView {
        render(self.section, self.payload.as_ref(), self.session.as_ref())
    }

    // =============================================
    // イベント
    // =============================================

    pub fn select(&mut self, action: NavAction) {
        match action {
            NavAction::Upload => {
                // 新しいアップロードを始めるので古いセッションは破棄
                self.set_session(None);
                self.upload_error = None;
                self.dialog_open = true;
            }
            NavAction::Search => self.section = ActiveSection::Search,
            NavAction::Match => self.section = ActiveSection::Match,
        }
    }

    /// 新しいアップロード試行の開始（前回エラーを消す）
    pub fn upload_started(&mut self) {
        self.upload_error = None;
    }

    pub fn upload_succeeded(
        &mut self,
        file: &FileMeta,
        response: UploadResponse,
    ) -> Result<(), Rejection> {
        if !self.dialog_open {
            return Err(Rejection::DialogClosed);
        }
        let session = match Session::new(response.user_id.clone(), response.session_id.clone()) {
            Some(s) => s,
            None => {
                self.upload_error = Some(UNEXPECTED_RESPONSE.to_string());
                return Err(Rejection::InvalidUploadResponse);
            }
        };

        let file_type = if file.mime_type.trim().is_empty() {
            None
        } else {
            Some(file.mime_type.clone())
        };
        let path = if response.location.trim().is_empty() {
            None
        } else {
            Some(response.location)
        };
        self.payload = Some(ResultPayload::Upload(UploadResult {
            message: upload_success(&file.name),
            path,
            size: Some(format_size_kb(file.size_bytes)),
            file_type,
            user_id: response.user_id,
            session_id: response.session_id,
        }));
        self.set_session(Some(session));
        self.section = ActiveSection::Upload;
        self.upload_error = None;
        self.dialog_open = false;
        Ok(())
    }

    /// アップロード失敗。セッションもセクションも変えない
    pub fn upload_failed(&mut self, error: ApiError) -> Result<(), Rejection> {
        if !self.dialog_open {
            return Err(Rejection::DialogClosed);
        }
        self.upload_error = Some(error.message);
        Ok(())
    }

    pub fn analyze_succeeded(&mut self, result: AnalysisResult) -> Result<(), Rejection> {
        if self.session.is_none() {
            return Err(Rejection::NoSession);
        }
        self.payload = Some(ResultPayload::Analysis(result));
        self.section = ActiveSection::Analyze;
        self.upload_error = None;
        self.dialog_open = false;
        Ok(())
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.upload_error = None;
    }

    /// 検索結果を結果スロットに保持
    pub fn show_jobs(&mut self, jobs: Vec<Job>) -> Result<(), Rejection> {
        if self.session.is_none() {
            return Err(Rejection::NoSession);
        }
        self.payload = Some(ResultPayload::Jobs(jobs));
        self.section = ActiveSection::Search;
        Ok(())
    }

    /// マッチ一覧を結果スロットに保持
    pub fn show_matches(&mut self, matches: Vec<Match>) -> Result<(), Rejection> {
        if self.session.is_none() {
            return Err(Rejection::NoSession);
        }
        self.payload = Some(ResultPayload::Matches(matches));
        self.section = ActiveSection::Match;
        Ok(())
    }

    fn set_session(&mut self, session: Option<Session>) {
        if let Some(store) = self.persistence.as_mut() {
            match &session {
                Some(s) => store.save(s),
                None => store.clear(),
            }
        }
        self.session = session;
    }
}
