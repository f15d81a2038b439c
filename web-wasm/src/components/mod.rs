//! 画面コンポーネント

pub mod header;
pub mod job_match;
pub mod job_results;
pub mod job_search;
pub mod results_card;
pub mod resume_analysis;
pub mod upload_dialog;
