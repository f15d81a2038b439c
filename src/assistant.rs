//! コマンド実行
//!
//! SessionController と各ビューを ApiClient のレスポンスで駆動する。
//! サブコマンドと対話モードの両方がここを通る。戻り値は端末に出す文字列。

use crate::client::{ApiClient, ResumeFile};
use crate::display::{format_jobs, format_session, format_user_details, format_view, spinner};
use crate::error::{AppError, Result};
use jobsearch_common::messages::{ANALYSIS_ERROR, JOB_SEARCH_ERROR, UNEXPECTED_RESPONSE};
use jobsearch_common::views::{AnalysisPanel, SearchForm, UploadForm, UploadOutcome};
use jobsearch_common::{decode_matches, NavAction, SessionController};
use std::path::Path;

pub struct Assistant {
    client: ApiClient,
    controller: SessionController,
    default_location: String,
}

impl Assistant {
    pub fn new(client: ApiClient, controller: SessionController) -> Self {
        Self {
            client,
            controller,
            default_location: jobsearch_common::views::DEFAULT_LOCATION.to_string(),
        }
    }

    /// 勤務地の省略時の値（設定ファイル）
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        if !location.trim().is_empty() {
            self.default_location = location;
        }
        self
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// 履歴書をアップロードしてセッションを開始
    pub async fn upload(&mut self, path: &Path, use_llm: bool) -> Result<String> {
        let resume = ResumeFile::read(path).await?;

        // 新しいアップロードは前のセッションを破棄する
        self.controller.select(NavAction::Upload);

        let mut form = UploadForm::new();
        form.select_file(resume.meta.clone());
        form.set_use_llm(use_llm);
        tracing::info!("{}", form.parser_caption());

        let (ticket, request) = form.begin()?;
        self.controller.upload_started();

        let pb = spinner(form.submit_label());
        let result = self.client.upload_resume(&request, resume.bytes).await;
        pb.finish_and_clear();

        match form.finish(ticket, result) {
            Some(UploadOutcome::Uploaded { file, response }) => {
                if let Err(rejection) = self.controller.upload_succeeded(&file, response) {
                    tracing::warn!("アップロード結果を反映できません: {}", rejection);
                    let message = self.controller.upload_error().unwrap_or(UNEXPECTED_RESPONSE);
                    return Err(AppError::Request(message.to_string()));
                }
            }
            Some(UploadOutcome::Failed(err)) => {
                self.controller.upload_failed(err.clone())?;
                return Err(err.into());
            }
            None => return Err(AppError::Request(UNEXPECTED_RESPONSE.to_string())),
        }

        Ok(format_view(&self.controller.view()))
    }

    /// 現在のセッションの履歴書を解析
    pub async fn analyze(&mut self) -> Result<String> {
        let mut panel = AnalysisPanel::new();
        let (ticket, request) = panel.begin(self.controller.session())?;

        let pb = spinner(panel.button_label());
        let result = self.client.analyze_resume(&request).await;
        pb.finish_and_clear();

        match panel.finish(ticket, result) {
            Some(analysis) => {
                self.controller.analyze_succeeded(analysis)?;
                Ok(format_view(&self.controller.view()))
            }
            None => Err(AppError::Request(
                panel.error().unwrap_or(ANALYSIS_ERROR).to_string(),
            )),
        }
    }

    /// 求人検索
    ///
    /// 職種が省略されたらプロフィールの現職で補完する。補完の失敗は無視。
    pub async fn search(&mut self, title: Option<&str>, location: Option<&str>) -> Result<String> {
        let session = self.controller.session().cloned().ok_or(AppError::NoSession)?;
        self.controller.select(NavAction::Search);

        let mut form = SearchForm::new();
        form.set_location(location.unwrap_or(&self.default_location));

        match title {
            Some(title) => form.set_job_title(title),
            None => {
                if let Some(ticket) = form.begin_prefill(Some(&session)) {
                    let details = self.client.user_details(&session).await;
                    if form.finish_prefill(ticket, details) {
                        tracing::info!("職種をプロフィールから補完: {}", form.job_title());
                    }
                }
            }
        }

        let (ticket, request) = form.begin(Some(&session))?;

        let pb = spinner(form.button_label());
        let result = self.client.search_jobs(&request).await;
        pb.finish_and_clear();

        if !form.finish(ticket, result) {
            return Err(AppError::Request(JOB_SEARCH_ERROR.to_string()));
        }
        if let Some(err) = form.error() {
            return Err(AppError::Request(err.to_string()));
        }

        self.controller.show_jobs(form.results().to_vec())?;
        Ok(format_jobs(&form.results_view()))
    }

    /// プロフィール表示
    pub async fn details(&mut self) -> Result<String> {
        let session = self.controller.session().cloned().ok_or(AppError::NoSession)?;

        let pb = spinner("Loading profile...");
        let details = self.client.user_details(&session).await;
        pb.finish_and_clear();

        Ok(format_user_details(&details?))
    }

    /// マッチ結果JSONを読み込んで表示
    pub fn matches_from_file(&mut self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let matches = decode_matches(&content);
        tracing::debug!("{}件のマッチを読み込み", matches.len());

        self.controller.select(NavAction::Match);
        if self.controller.session().is_none() {
            return Ok(format_view(&self.controller.view()));
        }
        self.controller.show_matches(matches)?;
        Ok(format_view(&self.controller.view()))
    }

    /// 現在のセッション
    pub fn session_summary(&self) -> Option<String> {
        self.controller.session().map(format_session)
    }
}
