//! ヘッダーとナビゲーション

use leptos::prelude::*;
use jobsearch_common::messages::{APP_TITLE, JOB_SEARCH_LABEL, MATCH_JOBS_LABEL, UPLOAD_LABEL};
use jobsearch_common::{ActiveSection, NavAction};
use crate::app::Controller;

#[component]
pub fn Header(controller: Controller) -> impl IntoView {
    let nav = move |action: NavAction| move |_: leptos::ev::MouseEvent| controller.update(|c| c.select(action));
    let is_active = move |section: ActiveSection| move || controller.with(|c| c.section() == section);

    view! {
        <header class="header">
            <h1>{APP_TITLE}</h1>
            <nav class="nav">
                <button on:click=nav(NavAction::Upload)>{UPLOAD_LABEL}</button>
                <button
                    class:active=is_active(ActiveSection::Search)
                    on:click=nav(NavAction::Search)
                >
                    {JOB_SEARCH_LABEL}
                </button>
                <button
                    class:active=is_active(ActiveSection::Match)
                    on:click=nav(NavAction::Match)
                >
                    {MATCH_JOBS_LABEL}
                </button>
            </nav>
        </header>
    }
}
