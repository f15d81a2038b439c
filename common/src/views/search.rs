//! 求人検索フォームと結果一覧

use crate::error::ApiError;
use crate::format::{description_snippet, format_posted_date, job_location};
use crate::messages::{JOB_TITLE_HINT, JOB_TITLE_REQUIRED, UPLOAD_FIRST};
use crate::sequence::{RequestSeq, Ticket};
use crate::types::{Job, SearchRequest, Session, UserDetails};

/// 勤務地の初期値
pub const DEFAULT_LOCATION: &str = "United States";

/// 1回の検索で取得するページ数
pub const NUM_PAGES: u32 = 3;

pub const SEARCH_IN_PROGRESS: &str = "Search already in progress";

const DESCRIPTION_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct SearchForm {
    job_title: String,
    location: String,
    results: Vec<Job>,
    error: Option<String>,
    title_rejected: bool,
    search_seq: RequestSeq,
    prefill_seq: RequestSeq,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            results: Vec::new(),
            error: None,
            title_rejected: false,
            search_seq: RequestSeq::new(),
            prefill_seq: RequestSeq::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直前の検索結果を引き継いで開く
    pub fn with_results(results: Vec<Job>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn set_job_title(&mut self, title: impl Into<String>) {
        self.job_title = title.into();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn results(&self) -> &[Job] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.search_seq.in_flight()
    }

    pub fn is_prefilling(&self) -> bool {
        self.prefill_seq.in_flight()
    }

    // =============================================
    // 職種の事前入力（/user-details）
    // =============================================

    /// 事前入力の取得を開始。セッションが無ければ何もしない
    pub fn begin_prefill(&mut self, session: Option<&Session>) -> Option<Ticket> {
        session?;
        Some(self.prefill_seq.issue())
    }

    /// 事前入力の反映
    ///
    /// 失敗しても画面エラーにはしない（空欄のまま）。反映したらtrue。
    pub fn finish_prefill(&mut self, ticket: Ticket, result: Result<UserDetails, ApiError>) -> bool {
        if !self.prefill_seq.accept(ticket) {
            return false;
        }
        let title = match result {
            Ok(details) => details.current_job_title,
            Err(_) => None,
        };
        match title {
            Some(title) if self.job_title.trim().is_empty() && !title.trim().is_empty() => {
                self.job_title = title.trim().to_string();
                true
            }
            _ => false,
        }
    }

    // =============================================
    // 検索
    // =============================================

    /// 検索ボタンの有効判定（空白のみの職種は不可）
    pub fn can_submit(&self, session: Option<&Session>) -> bool {
        session.is_some() && !self.job_title.trim().is_empty() && !self.is_searching()
    }

    pub fn begin(&mut self, session: Option<&Session>) -> Result<(Ticket, SearchRequest), ApiError> {
        let session = match session {
            Some(s) => s,
            None => return Err(self.reject(ApiError::validation(UPLOAD_FIRST))),
        };
        let job_title = self.job_title.trim();
        if job_title.is_empty() {
            self.title_rejected = true;
            return Err(self.reject(ApiError::validation(JOB_TITLE_REQUIRED)));
        }
        if self.is_searching() {
            return Err(ApiError::validation(SEARCH_IN_PROGRESS));
        }

        let location = match self.location.trim() {
            "" => DEFAULT_LOCATION.to_string(),
            loc => loc.to_string(),
        };
        let request = SearchRequest {
            user_id: session.user_id().to_string(),
            session_id: session.session_id().to_string(),
            job_title: job_title.to_string(),
            location,
            num_pages: NUM_PAGES,
        };

        self.error = None;
        self.title_rejected = false;
        Ok((self.search_seq.issue(), request))
    }

    fn reject(&mut self, err: ApiError) -> ApiError {
        self.error = Some(err.message.clone());
        err
    }

    /// 検索完了。成功時は結果を丸ごと置き換える。反映したらtrue
    pub fn finish(&mut self, ticket: Ticket, result: Result<Vec<Job>, ApiError>) -> bool {
        if !self.search_seq.accept(ticket) {
            return false;
        }
        match result {
            Ok(jobs) => {
                self.results = jobs;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.message);
            }
        }
        true
    }

    /// 画面破棄時
    pub fn cancel(&mut self) {
        self.search_seq.invalidate();
        self.prefill_seq.invalidate();
    }

    /// 職種欄の補足表示（空欄で、直前の操作がエラーだった場合）
    pub fn title_hint(&self) -> Option<&'static str> {
        let failed = self.title_rejected || self.error.is_some();
        if failed && self.job_title.trim().is_empty() {
            Some(JOB_TITLE_HINT)
        } else {
            None
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_searching() {
            "Searching..."
        } else {
            "Search Jobs"
        }
    }

    pub fn results_view(&self) -> JobResultsView {
        if self.is_searching() {
            JobResultsView::Loading
        } else if self.results.is_empty() {
            JobResultsView::NoJobs
        } else {
            JobResultsView::Table(self.results.iter().map(JobRow::from).collect())
        }
    }
}

/// 検索結果エリアの表示
///
/// 読み込み中と0件は必ず区別する。
#[derive(Debug, Clone, PartialEq)]
pub enum JobResultsView {
    Loading,
    NoJobs,
    Table(Vec<JobRow>),
}

/// 結果テーブルの1行
#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub qualifications: String,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub posted: Option<String>,
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.job_id.clone(),
            title: job.job_title.clone(),
            company: job.cmp_name.clone(),
            location: job_location(job),
            description: description_snippet(&job.description, DESCRIPTION_SNIPPET_CHARS),
            qualifications: job.qualification_required.clone(),
            skills: job.skills_required.clone(),
            salary: job
                .salary_offered
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
            posted: job
                .posted_date
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(format_posted_date),
        }
    }
}

/// テーブル見出し
pub const JOB_TABLE_HEADERS: [&str; 6] = [
    "Job Title",
    "Company",
    "Location",
    "Description",
    "Qualifications",
    "Skills",
];
