//! 結果表示の振り分け
//!
//! (ActiveSection, ResultPayload) から表示内容を決める純粋関数。
//! ペイロードの形がセクションと合わない場合は別の形として解釈せず、空表示にする。

use crate::types::{ActiveSection, Job, ResultPayload, Session, UploadResult};
use crate::views::{AnalysisCard, MatchList};

/// アップロード結果カード
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCard {
    pub message: String,
    /// (ラベル, 値)。値が無い項目は含めない
    pub rows: Vec<(&'static str, String)>,
}

impl From<&UploadResult> for UploadCard {
    fn from(result: &UploadResult) -> Self {
        let mut rows = Vec::new();
        let optional = [
            ("Path", result.path.as_deref()),
            ("Size", result.size.as_deref()),
            ("Type", result.file_type.as_deref()),
            ("User ID", Some(result.user_id.as_str())),
            ("Session ID", Some(result.session_id.as_str())),
        ];
        for (label, value) in optional {
            if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
                rows.push((label, v.to_string()));
            }
        }
        Self {
            message: result.message.clone(),
            rows,
        }
    }
}

impl UploadCard {
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// 結果エリアに出すもの
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// 何も表示しない
    Empty,
    /// アップロード結果 + 解析ボタン（セッションがある場合のみ）
    UploadCard {
        card: UploadCard,
        analyze_with: Option<Session>,
    },
    AnalysisCard(AnalysisCard),
    /// 検索画面。直前の検索結果があれば引き継ぐ
    Search { session: Session, jobs: Vec<Job> },
    /// 「先に履歴書をアップロードしてください」
    UploadFirst,
    Matches(MatchList),
}

pub fn render(
    section: ActiveSection,
    payload: Option<&ResultPayload>,
    session: Option<&Session>,
) -> ResultView {
    match section {
        ActiveSection::None => ResultView::Empty,
        ActiveSection::Upload => match payload {
            Some(ResultPayload::Upload(result)) => ResultView::UploadCard {
                card: UploadCard::from(result),
                analyze_with: session.cloned(),
            },
            _ => ResultView::Empty,
        },
        ActiveSection::Analyze => match payload {
            Some(ResultPayload::Analysis(result)) => ResultView::AnalysisCard(AnalysisCard::from(result)),
            _ => ResultView::Empty,
        },
        ActiveSection::Search => match session {
            Some(session) => {
                let jobs = match payload {
                    Some(ResultPayload::Jobs(jobs)) => jobs.clone(),
                    _ => Vec::new(),
                };
                ResultView::Search {
                    session: session.clone(),
                    jobs,
                }
            }
            None => ResultView::UploadFirst,
        },
        ActiveSection::Match => match (session, payload) {
            (None, _) => ResultView::UploadFirst,
            (Some(_), Some(ResultPayload::Matches(matches))) => ResultView::Matches(MatchList::new(matches)),
            (Some(_), _) => ResultView::Matches(MatchList::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisResult, Match};

    fn session() -> Session {
        Session::new("u1", "s1").expect("セッション生成失敗")
    }

    fn upload_payload() -> ResultPayload {
        ResultPayload::Upload(UploadResult {
            message: "Resume resume.pdf uploaded successfully!".to_string(),
            path: Some("/files/resume.pdf".to_string()),
            size: Some("2.00 KB".to_string()),
            file_type: None,
            user_id: "u1".to_string(),
            session_id: "s1".to_string(),
        })
    }

    #[test]
    fn test_null_payload_renders_nothing() {
        for section in [ActiveSection::None, ActiveSection::Upload, ActiveSection::Analyze] {
            assert_eq!(render(section, None, Some(&session())), ResultView::Empty);
        }
    }

    #[test]
    fn test_upload_card_rows() {
        let view = render(ActiveSection::Upload, Some(&upload_payload()), Some(&session()));
        match view {
            ResultView::UploadCard { card, analyze_with } => {
                assert_eq!(card.row("Path"), Some("/files/resume.pdf"));
                assert_eq!(card.row("Size"), Some("2.00 KB"));
                assert_eq!(card.row("Type"), None);
                assert_eq!(analyze_with, Some(session()));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_payload_is_not_reinterpreted() {
        // 解析セクションにアップロード結果 → 空
        assert_eq!(
            render(ActiveSection::Analyze, Some(&upload_payload()), Some(&session())),
            ResultView::Empty
        );
        // アップロードセクションに求人一覧 → 空
        let jobs = ResultPayload::Jobs(vec![Job::default()]);
        assert_eq!(
            render(ActiveSection::Upload, Some(&jobs), Some(&session())),
            ResultView::Empty
        );
        // マッチセクションに求人一覧 → マッチ0件
        assert_eq!(
            render(ActiveSection::Match, Some(&jobs), Some(&session())),
            ResultView::Matches(MatchList::default())
        );
    }

    #[test]
    fn test_search_requires_session() {
        assert_eq!(render(ActiveSection::Search, None, None), ResultView::UploadFirst);
        assert_eq!(render(ActiveSection::Match, None, None), ResultView::UploadFirst);

        let view = render(ActiveSection::Search, Some(&upload_payload()), Some(&session()));
        assert_eq!(
            view,
            ResultView::Search {
                session: session(),
                jobs: vec![]
            }
        );
    }

    #[test]
    fn test_match_list() {
        let payload = ResultPayload::Matches(vec![Match {
            job: "Analyst".to_string(),
            score: "70%".to_string(),
        }]);
        match render(ActiveSection::Match, Some(&payload), Some(&session())) {
            ResultView::Matches(list) => assert_eq!(list.rows.len(), 1),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_analysis_card() {
        let payload = ResultPayload::Analysis(AnalysisResult::default());
        assert!(matches!(
            render(ActiveSection::Analyze, Some(&payload), None),
            ResultView::AnalysisCard(_)
        ));
    }
}
