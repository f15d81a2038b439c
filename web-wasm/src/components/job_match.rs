//! マッチ一覧

use leptos::prelude::*;
use jobsearch_common::views::MatchList;

#[component]
pub fn JobMatch(list: MatchList) -> impl IntoView {
    match list.placeholder() {
        Some(placeholder) => view! { <p class="text-muted">{placeholder}</p> }.into_any(),
        None => view! {
            <ul class="match-list">
                {list
                    .rows
                    .into_iter()
                    .map(|row| view! {
                        <li class="match-row">
                            <span class="match-job">{row.job}</span>
                            <span class="match-score">{row.score}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}
