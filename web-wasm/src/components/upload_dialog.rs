//! 履歴書アップロードダイアログ

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement};
use jobsearch_common::messages::{SUPPORTED_FORMATS, UPLOAD_LABEL};
use jobsearch_common::views::{UploadForm, UploadOutcome, ACCEPTED_EXTENSIONS};
use jobsearch_common::FileMeta;
use crate::api::backend;
use crate::app::Controller;

fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.size() as u64, file.type_())
}

#[component]
pub fn UploadDialog(controller: Controller) -> impl IntoView {
    let form = RwSignal::new(UploadForm::new());
    // File は Send でないので別のローカルシグナルに置く
    let selected = RwSignal::new_local(None::<File>);
    let (is_dragover, set_is_dragover) = signal(false);

    let select_file = move |file: File| {
        form.update(|f| f.select_file(file_meta(&file)));
        selected.set(Some(file));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if form.with_untracked(|f| f.is_uploading()) {
            return;
        }
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            select_file(file);
        }
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select_file(file);
        }
    };

    let on_close = move |_| {
        form.update(|f| f.cancel());
        controller.update(|c| c.close_dialog());
    };

    let on_submit = move |_| {
        let Some(file) = selected.get_untracked() else {
            return;
        };
        let Some(Ok((ticket, request))) = form.try_update(|f| f.begin()) else {
            return;
        };
        controller.update(|c| c.upload_started());

        spawn_local(async move {
            let result = backend::upload_resume(&request, &file).await;
            let outcome = form.try_update(|f| f.finish(ticket, result)).flatten();
            // 成功するとダイアログが閉じて破棄されるので先に片付ける
            if matches!(outcome, Some(UploadOutcome::Uploaded { .. })) {
                selected.try_set(None);
            }
            controller.update(|c| {
                let applied = match outcome {
                    Some(UploadOutcome::Uploaded { file, response }) => c.upload_succeeded(&file, response),
                    Some(UploadOutcome::Failed(err)) => c.upload_failed(err),
                    None => Ok(()),
                };
                if let Err(rejection) = applied {
                    gloo::console::warn!(format!("アップロード結果を反映できません: {}", rejection));
                }
            });
        });
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <div class="dialog-header">
                    <h2>{UPLOAD_LABEL}</h2>
                    <button class="btn-close" on:click=on_close>"×"</button>
                </div>

                <label
                    class=move || if is_dragover.get() { "drop-zone dragover" } else { "drop-zone" }
                    on:drop=on_drop
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_is_dragover.set(true);
                    }
                    on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
                >
                    <input
                        type="file"
                        accept=ACCEPTED_EXTENSIONS
                        class="hidden"
                        disabled=move || form.with(|f| f.is_uploading())
                        on:change=on_pick
                    />
                    <p>{move || form.with(|f| f.drop_zone_label())}</p>
                    <p class="text-muted">{SUPPORTED_FORMATS}</p>
                    {move || form.with(|f| f.selected_file().map(|file| file.name.clone())).map(|name| view! {
                        <p class="selected-file">{name}</p>
                    })}
                </label>

                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.use_llm())
                        on:change=move |ev| form.update(|f| f.set_use_llm(event_target_checked(&ev)))
                    />
                    <span>{move || form.with(|f| f.parser_caption())}</span>
                </label>

                {move || controller.with(|c| c.upload_error().map(str::to_string)).map(|err| view! {
                    <div class="alert alert-error">{err}</div>
                })}

                <button
                    class="btn btn-primary"
                    disabled=move || !form.with(|f| f.can_submit())
                    on:click=on_submit
                >
                    {move || form.with(|f| f.submit_label())}
                </button>
            </div>
        </div>
    }
}
