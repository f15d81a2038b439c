//! 求人検索フォーム
//!
//! 表示時にプロフィールの現職で職種欄を補完する（失敗しても何も出さない）。

use leptos::prelude::*;
use leptos::task::spawn_local;
use jobsearch_common::views::SearchForm;
use jobsearch_common::{Job, Session};
use crate::api::backend;
use crate::app::Controller;
use crate::components::job_results::JobResults;

#[component]
pub fn JobSearch(controller: Controller, session: Session, jobs: Vec<Job>) -> impl IntoView {
    let form = RwSignal::new(SearchForm::with_results(jobs));
    on_cleanup(move || {
        form.try_update(|f| f.cancel());
    });

    // 職種の補完
    if let Some(Some(ticket)) = form.try_update(|f| f.begin_prefill(Some(&session))) {
        let session = session.clone();
        spawn_local(async move {
            let details = backend::user_details(&session).await;
            form.try_update(|f| f.finish_prefill(ticket, details));
        });
    }

    let can_submit = {
        let session = session.clone();
        move || form.with(|f| f.can_submit(Some(&session)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok((ticket, request))) = form.try_update(|f| f.begin(Some(&session))) else {
            return;
        };

        spawn_local(async move {
            let result = backend::search_jobs(&request).await;
            let applied = form.try_update(|f| f.finish(ticket, result)).unwrap_or(false);
            if !applied || form.with_untracked(|f| f.error().is_some()) {
                return;
            }
            let jobs = form.with_untracked(|f| f.results().to_vec());
            controller.update(|c| {
                if let Err(rejection) = c.show_jobs(jobs) {
                    gloo::console::warn!(format!("検索結果を反映できません: {}", rejection));
                }
            });
        });
    };

    view! {
        <div class="job-search">
            <form class="search-form" on:submit=on_submit>
                <label>
                    "Job Title"
                    <input
                        type="text"
                        placeholder="e.g. Software Engineer"
                        prop:value=move || form.with(|f| f.job_title().to_string())
                        on:input=move |ev| form.update(|f| f.set_job_title(event_target_value(&ev)))
                    />
                    {move || form.with(|f| f.title_hint()).map(|hint| view! {
                        <span class="field-hint">{hint}</span>
                    })}
                </label>
                <label>
                    "Location"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.location().to_string())
                        on:input=move |ev| form.update(|f| f.set_location(event_target_value(&ev)))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                    {move || form.with(|f| f.button_label())}
                </button>
            </form>

            {move || form.with(|f| f.error().map(str::to_string)).map(|err| view! {
                <div class="alert alert-error">{err}</div>
            })}

            <JobResults form=form />
        </div>
    }
}
