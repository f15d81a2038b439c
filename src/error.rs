use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("セッションがありません。`jobsearch upload <FILE>` で履歴書をアップロードしてください")]
    NoSession,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Api(#[from] jobsearch_common::ApiError),

    #[error("{0}")]
    Request(String),

    #[error("操作を受け付けられません: {0}")]
    Rejected(#[from] jobsearch_common::Rejection),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] jobsearch_common::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
