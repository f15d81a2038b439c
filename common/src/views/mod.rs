//! 各画面の状態
//!
//! 画面ごとに自分のリクエストとエラーを持つ。通信は行わず、
//! begin でリクエスト内容とチケットを返し、finish で結果を受け取る。

pub mod analysis;
pub mod matches;
pub mod search;
pub mod upload;

pub use analysis::{AnalysisCard, AnalysisPanel};
pub use matches::{MatchList, MatchRow};
pub use search::{JobResultsView, JobRow, SearchForm, DEFAULT_LOCATION, JOB_TABLE_HEADERS, NUM_PAGES};
pub use upload::{UploadForm, UploadOutcome, ACCEPTED_EXTENSIONS};
