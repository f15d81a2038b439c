//! バックエンド連携（fetch）
//!
//! 4つのエンドポイントを呼び出し、失敗はすべて ApiError に正規化する。
//! レスポンスの解釈は jobsearch_common の decode_* に任せる。

use jobsearch_common::messages::{
    ANALYSIS_ERROR, JOB_SEARCH_ERROR, UNEXPECTED_RESPONSE, UPLOAD_ERROR, USER_DETAILS_ERROR,
};
use jobsearch_common::{
    decode_analysis, decode_jobs, decode_upload, decode_user_details, AnalysisResult,
    AnalyzeRequest, ApiError, Job, SearchRequest, Session, UploadRequest, UploadResponse,
    UserDetails,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ビルド時に JOBSEARCH_API_URL で上書きできる
pub const API_URL: &str = match option_env!("JOBSEARCH_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

fn endpoint(path: &str) -> String {
    format!("{}{}", API_URL.trim_end_matches('/'), path)
}

/// POST /upload-resume（multipart: file, use_llm）
pub async fn upload_resume(request: &UploadRequest, file: &File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|e| transport_error("FormData", e, UPLOAD_ERROR))?;
    form.append_with_blob_and_filename("file", file, &request.file.name)
        .map_err(|e| transport_error("FormData", e, UPLOAD_ERROR))?;
    form.append_with_str("use_llm", request.use_llm_field())
        .map_err(|e| transport_error("FormData", e, UPLOAD_ERROR))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    // Content-Type はブラウザが boundary 付きで設定する
    let req = Request::new_with_str_and_init(&endpoint("/upload-resume"), &opts)
        .map_err(|e| transport_error("Request", e, UPLOAD_ERROR))?;

    let body = send(req, UPLOAD_ERROR).await?;
    decode_upload(&body).map_err(|e| {
        gloo::console::error!(format!("アップロードレスポンスを解釈できません: {}", e));
        ApiError::decode(UNEXPECTED_RESPONSE)
    })
}

/// POST /analyze-resume
pub async fn analyze_resume(request: &AnalyzeRequest) -> Result<AnalysisResult, ApiError> {
    let req = json_request("/analyze-resume", request, ANALYSIS_ERROR)?;
    let body = send(req, ANALYSIS_ERROR).await?;
    decode_analysis(&body).map_err(|e| {
        gloo::console::error!(format!("解析レスポンスを解釈できません: {}", e));
        ApiError::decode(ANALYSIS_ERROR)
    })
}

/// GET /user-details/:user_id?session_id=...
pub async fn user_details(session: &Session) -> Result<UserDetails, ApiError> {
    let url = endpoint(&format!(
        "/user-details/{}?session_id={}",
        String::from(js_sys::encode_uri_component(session.user_id())),
        String::from(js_sys::encode_uri_component(session.session_id())),
    ));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let req = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| transport_error("Request", e, USER_DETAILS_ERROR))?;

    let body = send(req, USER_DETAILS_ERROR).await?;
    decode_user_details(&body).map_err(|e| {
        gloo::console::error!(format!("ユーザー詳細を解釈できません: {}", e));
        ApiError::decode(USER_DETAILS_ERROR)
    })
}

/// POST /search-jobs。配列以外のレスポンスは空リスト
pub async fn search_jobs(request: &SearchRequest) -> Result<Vec<Job>, ApiError> {
    let req = json_request("/search-jobs", request, JOB_SEARCH_ERROR)?;
    let body = send(req, JOB_SEARCH_ERROR).await?;
    Ok(decode_jobs(&body))
}

fn json_request<T: Serialize>(path: &str, payload: &T, fallback: &str) -> Result<Request, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| {
        gloo::console::error!(format!("リクエストを作成できません: {}", e));
        ApiError::transport(fallback)
    })?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let req = Request::new_with_str_and_init(&endpoint(path), &opts)
        .map_err(|e| transport_error("Request", e, fallback))?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| transport_error("Headers", e, fallback))?;
    Ok(req)
}

/// fetchしてボディ文字列を返す。2xx以外は `detail` を取り出す
async fn send(request: Request, fallback: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::transport(fallback))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| transport_error("fetch", e, fallback))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| transport_error("Response", e, fallback))?;

    let text_promise = resp.text().map_err(|e| transport_error("text", e, fallback))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| transport_error("text", e, fallback))?
        .as_string()
        .unwrap_or_default();

    if resp.ok() {
        Ok(body)
    } else {
        gloo::console::warn!(format!("エラーレスポンス {}: {}", resp.status(), body));
        Err(ApiError::from_http(resp.status(), &body, fallback))
    }
}

fn transport_error(stage: &str, err: JsValue, fallback: &str) -> ApiError {
    gloo::console::error!(format!("{} 失敗: {:?}", stage, err));
    ApiError::transport(fallback)
}
