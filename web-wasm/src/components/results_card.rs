//! 結果エリア
//!
//! コントローラーの view() をそのまま描画する。検索中の画面は
//! 検索結果の更新で作り直さない（入力中の職種が消えるため）。

use leptos::prelude::*;
use jobsearch_common::messages::UPLOAD_FIRST;
use jobsearch_common::{ActiveSection, ResultView, SessionController};
use crate::app::Controller;
use crate::components::job_match::JobMatch;
use crate::components::job_search::JobSearch;
use crate::components::resume_analysis::{AnalysisResultCard, ResumeAnalysis};

#[component]
pub fn ResultsCard(controller: Controller) -> impl IntoView {
    let view_key = Memo::new(move |_| {
        controller.with(|c| {
            let payload = match c.section() {
                ActiveSection::Search => None,
                _ => c.payload().cloned(),
            };
            (c.section(), c.session().cloned(), payload)
        })
    });

    move || {
        view_key.track();
        match controller.with_untracked(SessionController::view) {
            ResultView::Empty => ().into_any(),
            ResultView::UploadCard { card, analyze_with } => view! {
                <div class="card">
                    <div class="alert alert-success">{card.message.clone()}</div>
                    <dl>
                        {card
                            .rows
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                    <ResumeAnalysis controller=controller session=analyze_with />
                </div>
            }
            .into_any(),
            ResultView::AnalysisCard(card) => view! { <AnalysisResultCard card=card /> }.into_any(),
            ResultView::Search { session, jobs } => view! {
                <JobSearch controller=controller session=session jobs=jobs />
            }
            .into_any(),
            ResultView::UploadFirst => view! {
                <div class="alert alert-info">{UPLOAD_FIRST}</div>
            }
            .into_any(),
            ResultView::Matches(list) => view! { <JobMatch list=list /> }.into_any(),
        }
    }
}
