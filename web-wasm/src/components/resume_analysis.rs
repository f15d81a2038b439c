//! 履歴書解析ボタンと結果カード

use leptos::prelude::*;
use leptos::task::spawn_local;
use jobsearch_common::views::{AnalysisCard, AnalysisPanel};
use jobsearch_common::Session;
use crate::api::backend;
use crate::app::Controller;

/// アップロード結果カード内の「Analyze Resume」
#[component]
pub fn ResumeAnalysis(controller: Controller, session: Option<Session>) -> impl IntoView {
    let panel = RwSignal::new(AnalysisPanel::new());
    on_cleanup(move || {
        panel.try_update(|p| p.cancel());
    });

    let can_trigger = {
        let session = session.clone();
        move || panel.with(|p| p.can_trigger(session.as_ref()))
    };

    let on_click = move |_| {
        let started = panel.try_update(|p| p.begin(session.as_ref()));
        let Some(Ok((ticket, request))) = started else {
            return;
        };

        spawn_local(async move {
            let result = backend::analyze_resume(&request).await;
            if let Some(Some(analysis)) = panel.try_update(|p| p.finish(ticket, result)) {
                controller.update(|c| {
                    if let Err(rejection) = c.analyze_succeeded(analysis) {
                        gloo::console::warn!(format!("解析結果を反映できません: {}", rejection));
                    }
                });
            }
        });
    };

    view! {
        <div class="analysis-panel">
            <button
                class="btn btn-primary"
                disabled=move || !can_trigger()
                on:click=on_click
            >
                {move || panel.with(|p| p.button_label())}
            </button>
            {move || panel.with(|p| p.error().map(str::to_string)).map(|err| view! {
                <div class="alert alert-error">{err}</div>
            })}
        </div>
    }
}

/// 解析結果
#[component]
pub fn AnalysisResultCard(card: AnalysisCard) -> impl IntoView {
    let section = |title: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| view! {
            <h3>{title}</h3>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        })
    };

    view! {
        <div class="card">
            <div class="alert alert-success">{card.message.clone()}</div>
            <dl class="contact">
                {card
                    .contact_rows()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value.to_string()}</dd>
                    })
                    .collect_view()}
            </dl>
            <div class="skills">
                {card
                    .skills
                    .iter()
                    .map(|skill| view! { <span class="chip">{skill.clone()}</span> })
                    .collect_view()}
            </div>
            {section("Experience", card.experience.clone())}
            {section("Education", card.education.clone())}
        </div>
    }
}
