//! Tab Bar Component
//!
//! Switches between the overview, mission list and create form.

use leptos::prelude::*;

use crate::models::Tab;

#[component]
pub fn TabBar(current_tab: ReadSignal<Tab>, set_current_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .iter()
                .map(|&tab| {
                    let tab_class = move || {
                        if current_tab.get() == tab { "tab active" } else { "tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_current_tab.set(tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
