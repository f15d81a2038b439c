//! 画面表示用メッセージ
//!
//! Web/CLIで文言を揃えるためここに集約する。

pub const UPLOAD_FIRST: &str = "Please upload a resume first.";
pub const UPLOAD_ERROR: &str = "Failed to upload resume.";
pub const ANALYSIS_ERROR: &str = "Failed to analyze resume.";
pub const JOB_SEARCH_ERROR: &str = "Failed to search jobs.";
pub const JOB_MATCH_ERROR: &str = "Failed to match jobs.";
pub const USER_DETAILS_ERROR: &str = "Failed to fetch user details";
pub const INVALID_OR_EXPIRED_SESSION: &str = "Invalid or expired session";
pub const JOB_TITLE_REQUIRED: &str = "Please enter a job title to search";
pub const JOB_TITLE_HINT: &str = "Job title is required";
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from server";

pub const ANALYSIS_SUCCESS: &str = "Resume analyzed successfully!";
pub const JOB_SEARCH_SUCCESS: &str = "Jobs found successfully!";

pub const NO_JOBS_FOUND: &str = "No jobs found";
pub const NO_MATCHES: &str = "No matches to display";
pub const NOT_AVAILABLE: &str = "N/A";

pub const APP_TITLE: &str = "Job Search Platform";
pub const UPLOAD_LABEL: &str = "Upload Resume";
pub const ANALYZE_LABEL: &str = "Analyze Resume";
pub const JOB_SEARCH_LABEL: &str = "Job Search";
pub const MATCH_JOBS_LABEL: &str = "Match Jobs";
pub const SUPPORTED_FORMATS: &str = "Supported formats: PDF (.pdf), Word (.doc, .docx)";
pub const LLM_PARSER_CAPTION: &str = "Using OpenAI GPT for parsing";
pub const TRADITIONAL_PARSER_CAPTION: &str = "Using traditional parser";

/// アップロード成功メッセージ
pub fn upload_success(file_name: &str) -> String {
    format!("Resume {} uploaded successfully!", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_success_message() {
        assert_eq!(
            upload_success("resume.pdf"),
            "Resume resume.pdf uploaded successfully!"
        );
    }
}
