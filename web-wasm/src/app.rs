//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use jobsearch_common::SessionController;
use crate::components::{header::Header, results_card::ResultsCard, upload_dialog::UploadDialog};
use crate::session_store::BrowserSessionStore;

/// 画面状態はすべてこのコントローラーが持つ
///
/// 永続化ストアが Send でないためローカルシグナル。
pub type Controller = RwSignal<SessionController, LocalStorage>;

#[component]
pub fn App() -> impl IntoView {
    let controller: Controller =
        RwSignal::new_local(SessionController::with_persistence(Box::new(BrowserSessionStore)));

    view! {
        <div class="container">
            <Header controller=controller />

            <Show when=move || controller.with(|c| c.dialog_open())>
                <UploadDialog controller=controller />
            </Show>

            <main class="results">
                <ResultsCard controller=controller />
            </main>
        </div>
    }
}
