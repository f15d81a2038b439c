//! 求人一覧テーブル

use leptos::prelude::*;
use jobsearch_common::messages::NO_JOBS_FOUND;
use jobsearch_common::views::{JobResultsView, SearchForm, JOB_TABLE_HEADERS};

#[component]
pub fn JobResults(form: RwSignal<SearchForm>) -> impl IntoView {
    move || match form.with(SearchForm::results_view) {
        JobResultsView::Loading => view! {
            <p class="text-muted">"Searching..."</p>
        }
        .into_any(),
        JobResultsView::NoJobs => view! {
            <p class="text-muted">{NO_JOBS_FOUND}</p>
        }
        .into_any(),
        JobResultsView::Table(rows) => view! {
            <table class="job-table">
                <thead>
                    <tr>
                        {JOB_TABLE_HEADERS
                            .iter()
                            .map(|header| view! { <th>{*header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let meta = [row.salary.clone(), row.posted.clone()]
                                .into_iter()
                                .flatten()
                                .collect::<Vec<_>>()
                                .join(" / ");
                            view! {
                                <tr>
                                    <td>
                                        <strong>{row.title}</strong>
                                        <div class="text-muted">{meta}</div>
                                    </td>
                                    <td>{row.company}</td>
                                    <td>{row.location}</td>
                                    <td>{row.description}</td>
                                    <td>{row.qualifications}</td>
                                    <td>
                                        {row
                                            .skills
                                            .into_iter()
                                            .map(|skill| view! { <span class="chip">{skill}</span> })
                                            .collect_view()}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
