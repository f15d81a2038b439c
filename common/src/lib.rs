//! Job Search Assistant Common Library
//!
//! CLIとWeb(WASM)で共有される型・画面状態・セッションコントローラー。
//! 通信と描画は各フロントエンドの担当。

pub mod controller;
pub mod error;
pub mod format;
pub mod messages;
pub mod parser;
pub mod persistence;
pub mod render;
pub mod sequence;
pub mod types;
pub mod views;

pub use controller::{NavAction, Rejection, SessionController};
pub use error::{ApiError, ApiErrorKind, Error, Result};
pub use parser::{decode_analysis, decode_jobs, decode_matches, decode_upload, decode_user_details};
pub use persistence::{MemorySessionStore, SessionPersistence};
pub use render::{render, ResultView, UploadCard};
pub use sequence::{RequestSeq, Ticket};
pub use types::{
    ActiveSection, AnalysisResult, AnalyzeRequest, ExtractedInfo, FileMeta, Job, Match,
    ResultPayload, SearchRequest, Session, UploadRequest, UploadResponse, UploadResult,
    UserDetails,
};
