//! 端末表示
//!
//! 表示内容は jobsearch_common の ResultView 等で決まっており、
//! ここは文字列に整形するだけ。

use indicatif::{ProgressBar, ProgressStyle};
use jobsearch_common::format::display_or_na;
use jobsearch_common::messages::{ANALYZE_LABEL, NO_JOBS_FOUND, UPLOAD_FIRST};
use jobsearch_common::views::{AnalysisCard, JobResultsView, MatchList, JOB_TABLE_HEADERS};
use jobsearch_common::{ResultView, Session, UploadCard, UserDetails};
use std::fmt::Write;
use std::time::Duration;

/// 通信中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn format_view(view: &ResultView) -> String {
    match view {
        ResultView::Empty => String::new(),
        ResultView::UploadCard { card, analyze_with } => {
            let mut out = format_upload_card(card);
            if analyze_with.is_some() {
                let _ = writeln!(out, "\n→ {}: jobsearch analyze", ANALYZE_LABEL);
            }
            out
        }
        ResultView::AnalysisCard(card) => format_analysis_card(card),
        ResultView::Search { session, jobs } => {
            let mut out = format_session(session);
            let _ = writeln!(out, "保存済みの検索結果: {}件", jobs.len());
            out
        }
        ResultView::UploadFirst => format!("{}\n", UPLOAD_FIRST),
        ResultView::Matches(list) => format_matches(list),
    }
}

pub fn format_upload_card(card: &UploadCard) -> String {
    let mut out = format!("✔ {}\n", card.message);
    for (label, value) in &card.rows {
        let _ = writeln!(out, "  {}: {}", label, value);
    }
    out
}

pub fn format_analysis_card(card: &AnalysisCard) -> String {
    let mut out = format!("✔ {}\n", card.message);
    for (label, value) in card.contact_rows() {
        let _ = writeln!(out, "  {}: {}", label, value);
    }
    write_list(&mut out, "Skills", &card.skills);
    write_list(&mut out, "Experience", &card.experience);
    write_list(&mut out, "Education", &card.education);
    out
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}:", title);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

pub fn format_jobs(view: &JobResultsView) -> String {
    match view {
        JobResultsView::Loading => "検索中...\n".to_string(),
        JobResultsView::NoJobs => format!("{}\n", NO_JOBS_FOUND),
        JobResultsView::Table(rows) => {
            let mut out = String::new();
            for (i, row) in rows.iter().enumerate() {
                let _ = writeln!(out, "[{}] {}", i + 1, row.title);
                let values = [
                    row.company.as_str(),
                    row.location.as_str(),
                    row.description.as_str(),
                    row.qualifications.as_str(),
                ];
                // 先頭列（Job Title）は見出し行に出している
                for (header, value) in JOB_TABLE_HEADERS[1..5].iter().zip(values) {
                    if !value.is_empty() {
                        let _ = writeln!(out, "  {}: {}", header, value);
                    }
                }
                if !row.skills.is_empty() {
                    let _ = writeln!(out, "  {}: {}", JOB_TABLE_HEADERS[5], row.skills.join(", "));
                }
                if let Some(salary) = &row.salary {
                    let _ = writeln!(out, "  Salary: {}", salary);
                }
                if let Some(posted) = &row.posted {
                    let _ = writeln!(out, "  Posted: {}", posted);
                }
                out.push('\n');
            }
            out
        }
    }
}

pub fn format_matches(list: &MatchList) -> String {
    if let Some(placeholder) = list.placeholder() {
        return format!("{}\n", placeholder);
    }
    let mut out = String::new();
    for row in &list.rows {
        let _ = writeln!(out, "{}  {}", row.score, row.job);
    }
    out
}

pub fn format_user_details(details: &UserDetails) -> String {
    let mut out = String::new();
    let rows = [
        ("Name", details.name.as_deref()),
        ("Email", details.email.as_deref()),
        ("Phone", details.contact_no.as_deref()),
        ("Current Job Title", details.current_job_title.as_deref()),
        ("Years of Experience", details.years_of_exp.as_deref()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {}: {}", label, display_or_na(value));
    }
    if !details.skills.is_empty() {
        let _ = writeln!(out, "  Skills: {}", details.skills.join(", "));
    }
    out
}

pub fn format_session(session: &Session) -> String {
    format!(
        "  User ID: {}\n  Session ID: {}\n",
        session.user_id(),
        session.session_id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobsearch_common::{AnalysisResult, ExtractedInfo, Job, Match};

    #[test]
    fn test_format_empty_view() {
        assert_eq!(format_view(&ResultView::Empty), "");
        assert_eq!(format_view(&ResultView::UploadFirst), "Please upload a resume first.\n");
    }

    #[test]
    fn test_format_analysis_card_na_phone() {
        let result = AnalysisResult {
            message: "Resume analyzed successfully!".into(),
            extracted_info: ExtractedInfo {
                name: Some("Jane".into()),
                email: Some("jane@example.com".into()),
                skills: vec!["Rust".into()],
                ..Default::default()
            },
        };
        let out = format_analysis_card(&AnalysisCard::from(&result));
        assert!(out.contains("Jane"));
        assert!(out.contains("Phone: N/A"));
        assert!(out.contains("  - Rust"));
        assert!(!out.contains("Education"));
    }

    #[test]
    fn test_format_jobs_table() {
        let job = Job {
            job_title: "Backend Engineer".into(),
            cmp_name: "Acme".into(),
            city: "Austin".into(),
            state: "TX".into(),
            skills_required: vec!["Rust".into(), "SQL".into()],
            ..Default::default()
        };
        let view = JobResultsView::Table(vec![(&job).into()]);
        let out = format_jobs(&view);
        assert!(out.contains("[1] Backend Engineer"));
        assert!(out.contains("Company: Acme"));
        assert!(out.contains("Skills: Rust, SQL"));
    }

    #[test]
    fn test_format_jobs_empty() {
        assert_eq!(format_jobs(&JobResultsView::NoJobs), "No jobs found\n");
    }

    #[test]
    fn test_format_matches() {
        let list = MatchList::new(&[Match { job: "Dev".into(), score: "85%".into() }]);
        assert_eq!(format_matches(&list), "Match: 85%  Dev\n");
        assert_eq!(format_matches(&MatchList::new(&[])), "No matches to display\n");
    }
}
