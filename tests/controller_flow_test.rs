//! 画面遷移フローテスト
//!
//! コントローラーとビューを、バックエンドのレスポンス文字列で駆動する

use jobsearch_common::views::{
    AnalysisCard, AnalysisPanel, JobResultsView, SearchForm, UploadForm, UploadOutcome,
};
use jobsearch_common::{
    decode_analysis, decode_jobs, decode_upload, ActiveSection, ApiError, FileMeta,
    MemorySessionStore, NavAction, Rejection, ResultPayload, ResultView, Session,
    SessionController, UploadResponse,
};

const UPLOAD_BODY: &str = r#"{"location": "/files/resume.pdf", "user_id": "u1", "session_id": "s1"}"#;
const ANALYSIS_BODY: &str =
    r#"{"message": "ok", "extracted_info": {"name": "Jane Doe", "skills": ["Go", "SQL"]}}"#;

fn resume_pdf() -> FileMeta {
    FileMeta::new("resume.pdf", 3000, "application/pdf")
}

/// アップロードダイアログを開いて成功レスポンスまで流す
fn upload(controller: &mut SessionController, body: &str) -> Result<(), Rejection> {
    controller.select(NavAction::Upload);
    let mut form = UploadForm::new();
    form.select_file(resume_pdf());
    let (ticket, _request) = form.begin().expect("送信開始失敗");
    controller.upload_started();

    let response = decode_upload(body).map_err(|_| ApiError::decode("bad upload"));
    match form.finish(ticket, response) {
        Some(UploadOutcome::Uploaded { file, response }) => controller.upload_succeeded(&file, response),
        Some(UploadOutcome::Failed(err)) => controller.upload_failed(err),
        None => panic!("ticket should be current"),
    }
}

fn analyze(controller: &mut SessionController, body: &str) {
    let mut panel = AnalysisPanel::new();
    assert!(panel.can_trigger(controller.session()));
    let (ticket, request) = panel.begin(controller.session()).expect("解析開始失敗");
    assert_eq!(request.user_id, "u1");
    assert_eq!(request.session_id, "s1");

    let result = decode_analysis(body).map_err(|_| ApiError::decode("bad analysis"));
    let analysis = panel.finish(ticket, result).expect("解析結果なし");
    controller.analyze_succeeded(analysis).expect("反映失敗");
}

/// アップロード成功: セクションupload、パス・サイズ表示、ダイアログは閉じる
#[test]
fn test_upload_success_scenario() {
    let mut controller = SessionController::new();
    upload(&mut controller, UPLOAD_BODY).unwrap();

    assert_eq!(controller.section(), ActiveSection::Upload);
    assert!(!controller.dialog_open());
    assert_eq!(controller.session(), Session::new("u1", "s1").as_ref());

    match controller.view() {
        ResultView::UploadCard { card, analyze_with } => {
            assert_eq!(card.row("Path"), Some("/files/resume.pdf"));
            // 3000 / 1024 = 2.9296...
            assert_eq!(card.row("Size"), Some("2.93 KB"));
            assert_eq!(card.row("Type"), Some("application/pdf"));
            assert!(analyze_with.is_some());
        }
        other => panic!("upload card expected, got {:?}", other),
    }
}

/// アップロード→解析で、古いアップロード結果は表示されない
#[test]
fn test_upload_then_analyze_shows_analysis() {
    let mut controller = SessionController::new();
    upload(&mut controller, UPLOAD_BODY).unwrap();
    analyze(&mut controller, ANALYSIS_BODY);

    assert_eq!(controller.section(), ActiveSection::Analyze);
    assert!(matches!(controller.payload(), Some(ResultPayload::Analysis(_))));

    match controller.view() {
        ResultView::AnalysisCard(card) => {
            assert_eq!(card.name, "Jane Doe");
            assert_eq!(card.skills, vec!["Go".to_string(), "SQL".to_string()]);
            assert_eq!(card.email, "N/A");
            assert_eq!(card.phone, "N/A");
            assert!(!format!("{:?}", card).contains("undefined"));
        }
        other => panic!("analysis card expected, got {:?}", other),
    }
}

/// アップロード失敗はセッションを変えない
#[test]
fn test_upload_failure_keeps_session_state() {
    let mut controller = SessionController::new();
    controller.select(NavAction::Upload);
    let mut form = UploadForm::new();
    form.select_file(resume_pdf());
    let (ticket, _) = form.begin().unwrap();

    let failure = ApiError::from_http(400, r#"{"detail": "Unsupported file type"}"#, "Failed to upload resume.");
    match form.finish(ticket, Err(failure)) {
        Some(UploadOutcome::Failed(err)) => controller.upload_failed(err).unwrap(),
        other => panic!("failure expected, got {:?}", other),
    }

    assert!(controller.session().is_none());
    assert!(controller.dialog_open());
    assert_eq!(controller.upload_error(), Some("Unsupported file type"));
    assert_eq!(controller.section(), ActiveSection::None);
}

/// IDが欠けたレスポンスはセッションにしない
#[test]
fn test_upload_without_ids_rejected() {
    let mut controller = SessionController::new();
    upload(&mut controller, r#"{"location": "/files/resume.pdf", "user_id": "", "session_id": "s1"}"#)
        .unwrap();

    assert!(controller.session().is_none());
    assert!(controller.dialog_open());
    assert_eq!(controller.upload_error(), Some("bad upload"));
}

/// デコード済みでもIDが空ならコントローラーが拒否
#[test]
fn test_controller_rejects_blank_ids() {
    let mut controller = SessionController::new();
    controller.select(NavAction::Upload);
    let response = UploadResponse {
        location: "/files/resume.pdf".into(),
        user_id: "u1".into(),
        session_id: " ".into(),
        filename: None,
    };

    assert_eq!(
        controller.upload_succeeded(&resume_pdf(), response),
        Err(Rejection::InvalidUploadResponse)
    );
    assert!(controller.session().is_none());
    assert_eq!(controller.upload_error(), Some("Unexpected response from server"));
}

/// セッションが無ければ解析できない
#[test]
fn test_analyze_disabled_without_session() {
    let controller = SessionController::new();
    let mut panel = AnalysisPanel::new();

    assert!(!panel.can_trigger(controller.session()));
    assert!(panel.begin(controller.session()).is_err());
    assert_eq!(panel.error(), Some("Please upload a resume first."));
}

/// 空白だけの職種では検索できない
#[test]
fn test_search_blank_title_disabled() {
    let session = Session::new("u1", "s1").unwrap();
    let mut form = SearchForm::new();
    form.set_job_title("  ");

    assert!(!form.can_submit(Some(&session)));
    assert!(form.begin(Some(&session)).is_err());
    assert_eq!(form.title_hint(), Some("Job title is required"));
}

/// 配列以外の検索レスポンスは空一覧
#[test]
fn test_search_non_array_response() {
    let mut controller = SessionController::new();
    upload(&mut controller, UPLOAD_BODY).unwrap();
    controller.select(NavAction::Search);

    let mut form = SearchForm::new();
    form.set_job_title("Data Engineer");
    let (ticket, request) = form.begin(controller.session()).unwrap();
    assert_eq!(request.location, "United States");
    assert_eq!(request.num_pages, 3);

    assert!(form.finish(ticket, Ok(decode_jobs("{}"))));
    assert_eq!(form.results_view(), JobResultsView::NoJobs);

    controller.show_jobs(form.results().to_vec()).unwrap();
    match controller.view() {
        ResultView::Search { jobs, .. } => assert!(jobs.is_empty()),
        other => panic!("search view expected, got {:?}", other),
    }
}

/// 空配列は「No jobs found」で、読み込み中とは区別される
#[test]
fn test_search_empty_array_is_not_loading() {
    let session = Session::new("u1", "s1").unwrap();
    let mut form = SearchForm::new();
    form.set_job_title("Rust Engineer");
    let (ticket, _) = form.begin(Some(&session)).unwrap();
    assert_eq!(form.results_view(), JobResultsView::Loading);

    form.finish(ticket, Ok(decode_jobs("[]")));
    assert_eq!(form.results_view(), JobResultsView::NoJobs);
}

/// 後から届いた古い検索結果は捨てる
#[test]
fn test_stale_search_response_discarded() {
    let session = Session::new("u1", "s1").unwrap();
    let mut form = SearchForm::new();
    form.set_job_title("Rust Engineer");
    let (first, _) = form.begin(Some(&session)).unwrap();
    form.cancel();
    form.set_job_title("Go Engineer");
    let (second, _) = form.begin(Some(&session)).unwrap();

    let newer = decode_jobs(r#"[{"job_id": "2", "job_title": "Go Engineer"}]"#);
    let older = decode_jobs(r#"[{"job_id": "1", "job_title": "Rust Engineer"}]"#);
    assert!(form.finish(second, Ok(newer)));
    assert!(!form.finish(first, Ok(older)));

    assert_eq!(form.results().len(), 1);
    assert_eq!(form.results()[0].job_title, "Go Engineer");
}

/// ダイアログを閉じた後に届いたアップロード結果は反映しない
#[test]
fn test_upload_after_dialog_closed() {
    let mut controller = SessionController::new();
    controller.select(NavAction::Upload);
    controller.close_dialog();

    let response = decode_upload(UPLOAD_BODY).unwrap();
    assert_eq!(
        controller.upload_succeeded(&resume_pdf(), response),
        Err(Rejection::DialogClosed)
    );
    assert!(controller.session().is_none());
}

/// セッション無しの検索・マッチは「先にアップロード」
#[test]
fn test_navigation_without_session() {
    let mut controller = SessionController::new();
    controller.select(NavAction::Search);
    assert_eq!(controller.view(), ResultView::UploadFirst);

    controller.select(NavAction::Match);
    assert_eq!(controller.view(), ResultView::UploadFirst);
}

/// 永続化ストアとの同期
#[test]
fn test_persistence_follows_session() {
    let store = MemorySessionStore::new();
    let mut controller = SessionController::with_persistence(Box::new(store.clone()));

    upload(&mut controller, UPLOAD_BODY).unwrap();
    assert_eq!(store.current(), Session::new("u1", "s1"));

    controller.select(NavAction::Upload);
    assert!(store.current().is_none());
}

/// 解析カードの生成
#[test]
fn test_analysis_card_from_result() {
    let result = decode_analysis(ANALYSIS_BODY).unwrap();
    let card = AnalysisCard::from(&result);
    assert_eq!(card.message, "ok");
    assert!(card.experience.is_empty());
}
