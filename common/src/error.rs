//! エラー型定義
//!
//! - Error: デコードなど内部処理のエラー
//! - ApiError: 画面に出すエラー。全HTTP呼び出しはこの形に正規化される

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// ApiErrorの発生源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 送信前の入力チェック（バックエンドには送らない）
    Validation,
    /// 2xx以外のレスポンス
    Http,
    /// 接続失敗など
    Transport,
    /// 成功レスポンスだが形が想定外
    Decode,
}

/// 正規化されたAPIエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            kind: ApiErrorKind::Validation,
        }
    }

    /// 通信エラー。詳細はログ側に残し、画面には汎用メッセージを出す
    pub fn transport(fallback: impl Into<String>) -> Self {
        Self {
            message: fallback.into(),
            status_code: None,
            kind: ApiErrorKind::Transport,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            kind: ApiErrorKind::Decode,
        }
    }

    /// 2xx以外のレスポンスから生成
    ///
    /// ボディの `detail` を優先し、無ければ `fallback` を使う。
    pub fn from_http(status: u16, body: &str, fallback: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| fallback.to_string());
        Self {
            message,
            status_code: Some(status),
            kind: ApiErrorKind::Http,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ApiErrorKind::Validation
    }
}

/// エラーボディから `detail` を取り出す
///
/// FastAPIの422は `detail` が配列（[{loc, msg, type}]）になるため、`msg` を連結する。
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    let text = match detail {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                item.get("msg")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .or_else(|| item.as_str().map(str::to_string))
            })
            .collect::<Vec<_>>()
            .join("; "),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_from_http_uses_detail() {
        let err = ApiError::from_http(409, r#"{"detail": "Resume Already Exists"}"#, "fallback");
        assert_eq!(err.message, "Resume Already Exists");
        assert_eq!(err.status_code, Some(409));
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.to_string(), "Resume Already Exists");
    }

    #[test]
    fn test_from_http_falls_back() {
        for body in ["", "<html>502</html>", "{}", r#"{"detail": ""}"#, r#"{"detail": null}"#] {
            let err = ApiError::from_http(500, body, "Failed to upload resume.");
            assert_eq!(err.message, "Failed to upload resume.", "body: {}", body);
        }
    }

    #[test]
    fn test_from_http_validation_array() {
        let body = r#"{"detail": [{"loc": ["body", "file"], "msg": "field required", "type": "value_error.missing"}]}"#;
        let err = ApiError::from_http(422, body, "fallback");
        assert_eq!(err.message, "field required");
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = ApiError::transport("Failed to search jobs.");
        assert_eq!(err.status_code, None);
        assert_eq!(err.kind, ApiErrorKind::Transport);
        assert!(!err.is_validation());
        assert!(ApiError::validation("x").is_validation());
    }
}
