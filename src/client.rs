//! バックエンドHTTPクライアント
//!
//! 4つのエンドポイントを呼び出し、失敗はすべて ApiError に正規化する。
//! エラー形状の判定はこのファイルの `send` だけで行う。

use crate::config::Config;
use crate::error::{AppError, Result};
use jobsearch_common::messages::{
    ANALYSIS_ERROR, JOB_SEARCH_ERROR, UNEXPECTED_RESPONSE, UPLOAD_ERROR, USER_DETAILS_ERROR,
};
use jobsearch_common::{
    decode_analysis, decode_jobs, decode_upload, decode_user_details, AnalysisResult,
    AnalyzeRequest, ApiError, FileMeta, Job, SearchRequest, Session, UploadRequest,
    UploadResponse, UserDetails,
};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

const UPLOAD_ENDPOINT: &str = "/upload-resume";
const ANALYZE_ENDPOINT: &str = "/analyze-resume";
const USER_DETAILS_ENDPOINT: &str = "/user-details";
const SEARCH_ENDPOINT: &str = "/search-jobs";

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// アップロード対象のファイル
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub meta: FileMeta,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// ファイルを読み込み、名前・サイズ・MIMEタイプを取得
    pub async fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume".to_string());
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            meta: FileMeta::new(name, bytes.len() as u64, mime_type),
            bytes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.timeout_seconds)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /upload-resume（multipart: file, use_llm）
    pub async fn upload_resume(
        &self,
        request: &UploadRequest,
        bytes: Vec<u8>,
    ) -> ApiResult<UploadResponse> {
        let url = self.endpoint(UPLOAD_ENDPOINT);
        let file_part = Part::bytes(bytes).file_name(request.file.name.clone());
        let file_part = if request.file.mime_type.is_empty() {
            file_part
        } else {
            match file_part.mime_str(&request.file.mime_type) {
                Ok(part) => part,
                Err(e) => {
                    tracing::warn!("MIMEタイプを設定できません ({}): {}", request.file.mime_type, e);
                    return Err(ApiError::validation(UPLOAD_ERROR));
                }
            }
        };
        let form = Form::new()
            .part("file", file_part)
            .text("use_llm", request.use_llm_field());

        tracing::info!(file = %request.file.name, use_llm = request.use_llm, "アップロード: {}", url);
        let body = self
            .send(self.client.post(&url).multipart(form), UPLOAD_ERROR)
            .await?;

        decode_upload(&body).map_err(|e| {
            tracing::error!("アップロードレスポンスを解釈できません: {}", e);
            ApiError::decode(UNEXPECTED_RESPONSE)
        })
    }

    /// POST /analyze-resume
    pub async fn analyze_resume(&self, request: &AnalyzeRequest) -> ApiResult<AnalysisResult> {
        let url = self.endpoint(ANALYZE_ENDPOINT);
        tracing::info!(user_id = %request.user_id, "解析: {}", url);

        let body = self
            .send(self.client.post(&url).json(request), ANALYSIS_ERROR)
            .await?;

        decode_analysis(&body).map_err(|e| {
            tracing::error!("解析レスポンスを解釈できません: {}", e);
            ApiError::decode(ANALYSIS_ERROR)
        })
    }

    /// GET /user-details/:user_id?session_id=...
    pub async fn user_details(&self, session: &Session) -> ApiResult<UserDetails> {
        let mut url = reqwest::Url::parse(&self.endpoint(USER_DETAILS_ENDPOINT)).map_err(|e| {
            tracing::error!("URLが不正です: {}", e);
            ApiError::transport(USER_DETAILS_ERROR)
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::transport(USER_DETAILS_ERROR))?
            .push(session.user_id());
        url.query_pairs_mut()
            .append_pair("session_id", session.session_id());

        tracing::debug!("ユーザー詳細: {}", url);
        let body = self
            .send(self.client.get(url), USER_DETAILS_ERROR)
            .await?;

        decode_user_details(&body).map_err(|e| {
            tracing::error!("ユーザー詳細を解釈できません: {}", e);
            ApiError::decode(USER_DETAILS_ERROR)
        })
    }

    /// POST /search-jobs
    ///
    /// 配列以外のレスポンスは空リスト扱い。
    pub async fn search_jobs(&self, request: &SearchRequest) -> ApiResult<Vec<Job>> {
        let url = self.endpoint(SEARCH_ENDPOINT);
        tracing::info!(job_title = %request.job_title, location = %request.location, "求人検索: {}", url);

        let body = self
            .send(self.client.post(&url).json(request), JOB_SEARCH_ERROR)
            .await?;

        let jobs = decode_jobs(&body);
        tracing::debug!("{}件の求人を取得", jobs.len());
        Ok(jobs)
    }

    /// 送信してボディ文字列を返す
    ///
    /// - 通信失敗: fallback メッセージ
    /// - 2xx以外: ボディの `detail`、無ければ fallback
    async fn send(&self, builder: reqwest::RequestBuilder, fallback: &str) -> ApiResult<String> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("リクエスト失敗: {}", e);
            ApiError::transport(fallback)
        })?;

        let status = response.status();
        tracing::trace!("レスポンスステータス: {}", status);
        let body = response.text().await.map_err(|e| {
            tracing::error!("レスポンス読み込み失敗: {}", e);
            ApiError::transport(fallback)
        })?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!(status = status.as_u16(), "エラーレスポンス: {}", body);
            Err(ApiError::from_http(status.as_u16(), &body, fallback))
        }
    }
}
