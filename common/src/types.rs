//! データモデル定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Session: アップロード成功時に発行される識別子ペア
//! - ResultPayload: 表示中の結果（ActiveSectionと必ず一致する）
//! - Job / Match / ExtractedInfo: バックエンドのレスポンス形状

use serde::{Deserialize, Deserializer, Serialize};

/// セッション（user_id と session_id の組）
///
/// 片方だけの状態は存在しない。生成は `Session::new` 経由のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct Session {
    user_id: String,
    session_id: String,
}

#[derive(Deserialize)]
struct RawSession {
    user_id: String,
    session_id: String,
}

impl TryFrom<RawSession> for Session {
    type Error = &'static str;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        Session::new(raw.user_id, raw.session_id).ok_or("user_id and session_id must both be set")
    }
}

impl Session {
    /// 両方の識別子が空でない場合のみ生成
    pub fn new(user_id: impl Into<String>, session_id: impl Into<String>) -> Option<Self> {
        let user_id = user_id.into();
        let session_id = session_id.into();
        if user_id.trim().is_empty() || session_id.trim().is_empty() {
            return None;
        }
        Some(Self { user_id, session_id })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

/// 表示中のセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSection {
    #[default]
    None,
    Upload,
    Analyze,
    Search,
    Match,
}

impl ActiveSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveSection::None => "none",
            ActiveSection::Upload => "upload",
            ActiveSection::Analyze => "analyze",
            ActiveSection::Search => "search",
            ActiveSection::Match => "match",
        }
    }
}

impl std::fmt::Display for ActiveSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 選択されたファイルの情報（ファイル本体は各フロントエンドが保持）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// POST /upload-resume のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub location: String,
    pub user_id: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// アップロード結果カードの表示内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub message: String,
    pub path: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub user_id: String,
    pub session_id: String,
}

/// 履歴書から抽出された項目
///
/// バックエンド（LLM/従来パーサー）ごとに形が揺れるため寛容にデコードする。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(alias = "phone_number", alias = "contact_no", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(alias = "work_experience", deserialize_with = "lenient_list")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub education: Vec<String>,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extracted_info: ExtractedInfo,
}

/// 求人
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "lenient_text")]
    pub job_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub cmp_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_text")]
    pub state: String,
    #[serde(deserialize_with = "lenient_text")]
    pub country: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub qualification_required: String,
    #[serde(deserialize_with = "lenient_list")]
    pub skills_required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub salary_offered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub posted_date: Option<String>,
}

/// 求人と履歴書のマッチ度（"85%" のような文字列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub job: String,
    #[serde(rename = "match", default)]
    pub score: String,
}

/// GET /user-details/:user_id のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub current_job_title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub years_of_exp: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub contact_no: Option<String>,
}

/// 表示中の結果
///
/// ActiveSectionと1対1に対応する。別の形として解釈されることはない。
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPayload {
    Upload(UploadResult),
    Analysis(AnalysisResult),
    Jobs(Vec<Job>),
    Matches(Vec<Match>),
}

impl ResultPayload {
    /// このペイロードを表示するセクション
    pub fn section(&self) -> ActiveSection {
        match self {
            ResultPayload::Upload(_) => ActiveSection::Upload,
            ResultPayload::Analysis(_) => ActiveSection::Analyze,
            ResultPayload::Jobs(_) => ActiveSection::Search,
            ResultPayload::Matches(_) => ActiveSection::Match,
        }
    }
}

/// POST /upload-resume の送信内容
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file: FileMeta,
    pub use_llm: bool,
}

impl UploadRequest {
    /// multipartの `use_llm` フィールド値
    pub fn use_llm_field(&self) -> &'static str {
        if self.use_llm {
            "true"
        } else {
            "false"
        }
    }
}

/// POST /analyze-resume のリクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: String,
    pub session_id: String,
}

impl From<&Session> for AnalyzeRequest {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            session_id: session.session_id().to_string(),
        }
    }
}

/// POST /search-jobs のリクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub user_id: String,
    pub session_id: String,
    pub job_title: String,
    pub location: String,
    pub num_pages: u32,
}

/// nullはデフォルト値として扱う
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 文字列以外（数値など）が来ても文字列として受け取る
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

/// nullや欠損は空文字
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// 配列の要素を文字列化。nullや配列以外は空リスト扱い
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let items = match value {
        Some(serde_json::Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items.into_iter().filter_map(value_to_text).collect())
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s)
            }
        }
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        // 職歴・学歴はオブジェクトで返ることがある。キーは受信順
        serde_json::Value::Object(map) => {
            let parts: Vec<String> = map
                .into_iter()
                .filter_map(|(_, v)| value_to_text(v))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(value_to_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Session テスト
    // =============================================

    #[test]
    fn test_session_requires_both_ids() {
        assert!(Session::new("u1", "s1").is_some());
        assert!(Session::new("", "s1").is_none());
        assert!(Session::new("u1", "").is_none());
        assert!(Session::new("  ", "s1").is_none());
    }

    #[test]
    fn test_session_deserialize_rejects_partial() {
        let ok: Session = serde_json::from_str(r#"{"user_id": "u1", "session_id": "s1"}"#)
            .expect("デシリアライズ失敗");
        assert_eq!(ok.user_id(), "u1");

        let partial = serde_json::from_str::<Session>(r#"{"user_id": "u1", "session_id": ""}"#);
        assert!(partial.is_err());
    }

    #[test]
    fn test_active_section_as_str() {
        assert_eq!(ActiveSection::default().as_str(), "none");
        assert_eq!(ActiveSection::Analyze.to_string(), "analyze");
    }

    // =============================================
    // ExtractedInfo テスト
    // =============================================

    #[test]
    fn test_extracted_info_missing_fields() {
        let json = r#"{"name": "Jane Doe", "skills": ["Go", "SQL"]}"#;
        let info: ExtractedInfo = serde_json::from_str(json).expect("デシリアライズ失敗");

        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.skills, vec!["Go", "SQL"]);
        assert!(info.email.is_none());
        assert!(info.phone.is_none());
        assert!(info.experience.is_empty());
    }

    #[test]
    fn test_extracted_info_lenient_shapes() {
        let json = r#"{
            "phone_number": 5551234,
            "skills": null,
            "work_experience": [{"company": "Acme", "position": "Engineer"}, null],
            "education": "not a list"
        }"#;
        let info: ExtractedInfo = serde_json::from_str(json).expect("デシリアライズ失敗");

        assert_eq!(info.phone.as_deref(), Some("5551234"));
        assert!(info.skills.is_empty());
        assert_eq!(info.experience, vec!["Acme, Engineer"]);
        assert!(info.education.is_empty());
    }

    #[test]
    fn test_extracted_info_experience_keeps_key_order() {
        let json = r#"{
            "work_experience": [
                {"title": "Engineer", "company": "Acme", "start_year": 2018, "end_year": 2022}
            ],
            "education": [{"degree": "BSc", "institution": "State University", "year": 2017}]
        }"#;
        let info: ExtractedInfo = serde_json::from_str(json).expect("デシリアライズ失敗");

        assert_eq!(info.experience, vec!["Engineer, Acme, 2018, 2022"]);
        assert_eq!(info.education, vec!["BSc, State University, 2017"]);
    }

    // =============================================
    // Job / Match テスト
    // =============================================

    #[test]
    fn test_job_deserialize_minimal() {
        let json = r#"{"job_id": "j1", "job_title": "Engineer"}"#;
        let job: Job = serde_json::from_str(json).expect("デシリアライズ失敗");

        assert_eq!(job.job_id, "j1");
        assert_eq!(job.cmp_name, "");
        assert!(job.skills_required.is_empty());
        assert!(job.salary_offered.is_none());
    }

    #[test]
    fn test_job_deserialize_nulls_and_numbers() {
        let json = r#"{"job_id": 17, "job_title": "Analyst", "state": null, "salary_offered": null}"#;
        let job: Job = serde_json::from_str(json).expect("デシリアライズ失敗");

        assert_eq!(job.job_id, "17");
        assert_eq!(job.state, "");
        assert!(job.salary_offered.is_none());
    }

    #[test]
    fn test_match_uses_match_key() {
        let m: Match = serde_json::from_str(r#"{"job": "Data Engineer", "match": "85%"}"#)
            .expect("デシリアライズ失敗");
        assert_eq!(m.score, "85%");

        let json = serde_json::to_string(&m).expect("シリアライズ失敗");
        assert!(json.contains("\"match\":\"85%\""));
    }

    #[test]
    fn test_upload_result_serializes_type_key() {
        let result = UploadResult {
            message: "ok".to_string(),
            path: Some("/files/resume.pdf".to_string()),
            size: Some("1.00 KB".to_string()),
            file_type: Some("application/pdf".to_string()),
            user_id: "u1".to_string(),
            session_id: "s1".to_string(),
        };
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"application/pdf\""));
    }

    #[test]
    fn test_payload_section_mapping() {
        assert_eq!(ResultPayload::Jobs(vec![]).section(), ActiveSection::Search);
        assert_eq!(ResultPayload::Matches(vec![]).section(), ActiveSection::Match);
        assert_eq!(
            ResultPayload::Analysis(AnalysisResult::default()).section(),
            ActiveSection::Analyze
        );
    }

    #[test]
    fn test_use_llm_field() {
        let mut request = UploadRequest {
            file: FileMeta::new("resume.pdf", 10, "application/pdf"),
            use_llm: true,
        };
        assert_eq!(request.use_llm_field(), "true");
        request.use_llm = false;
        assert_eq!(request.use_llm_field(), "false");
    }
}
