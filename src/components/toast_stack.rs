//! Toast Stack Component
//!
//! Success and failure notices from the sync layer.

use leptos::prelude::*;

use crate::models::NoticeLevel;
use crate::store::{store_dismiss_toast, use_app_store, DashboardStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "toast",
                        NoticeLevel::Error => "toast destructive",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            <strong>{toast.notice.title.clone()}</strong>
                            <p>{toast.notice.description.clone()}</p>
                            {toast.notice.detail.clone().map(|detail| view! {
                                <p class="toast-detail">{detail}</p>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
