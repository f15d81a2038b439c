//! APIレスポンスパーサー
//!
//! バックエンドのJSONレスポンスを型に変換する。
//! 一覧系（求人・マッチ）は形が崩れていても画面を壊さないよう、
//! エラーにせず空リストや部分的な結果を返す。

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::messages::ANALYSIS_SUCCESS;
use crate::types::{AnalysisResult, Job, Match, UploadResponse, UserDetails};

/// 求人一覧をパース
///
/// 配列以外のボディは空リスト。配列内の壊れた要素はスキップする。
///
/// # Examples
/// ```
/// use jobsearch_common::decode_jobs;
///
/// assert!(decode_jobs("{}").is_empty());
/// assert_eq!(decode_jobs(r#"[{"job_id": "j1"}]"#).len(), 1);
/// ```
pub fn decode_jobs(body: &str) -> Vec<Job> {
    decode_list(body)
}

/// マッチ一覧をパース（decode_jobsと同じ方針）
pub fn decode_matches(body: &str) -> Vec<Match> {
    decode_list(body)
}

fn decode_list<T: DeserializeOwned>(body: &str) -> Vec<T> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// アップロードレスポンスをパース
///
/// 識別子が欠けたレスポンスはセッションを作れないためエラー。
pub fn decode_upload(body: &str) -> Result<UploadResponse> {
    let response: UploadResponse = serde_json::from_str(body)?;
    if response.user_id.trim().is_empty() || response.session_id.trim().is_empty() {
        return Err(Error::Parse(
            "upload response is missing user_id or session_id".into(),
        ));
    }
    Ok(response)
}

/// 解析レスポンスをパース
pub fn decode_analysis(body: &str) -> Result<AnalysisResult> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(Error::Parse("analysis response is not an object".into()));
    }

    let mut result: AnalysisResult = serde_json::from_value(value)?;
    if result.message.trim().is_empty() {
        result.message = ANALYSIS_SUCCESS.to_string();
    }
    Ok(result)
}

/// ユーザー詳細をパース
pub fn decode_user_details(body: &str) -> Result<UserDetails> {
    let details: UserDetails = serde_json::from_str(body)?;
    Ok(details)
}
