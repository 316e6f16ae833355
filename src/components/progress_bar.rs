//! Progress Bar Component

use leptos::prelude::*;

use mission_sync::Progress;

#[component]
pub fn ProgressBar(progress: Progress) -> impl IntoView {
    let class = if progress.is_complete() { "progress-fill complete" } else { "progress-fill" };

    view! {
        <div class="progress">
            <div class=class style=format!("width: {}%;", progress.value())></div>
        </div>
    }
}
