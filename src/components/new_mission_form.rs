//! New Mission Form Component
//!
//! Collects the fields for a new mission. Input is only cleared once the
//! remote store has accepted it, so a failed submission can be retried as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::form::MissionForm;
use crate::models::priority;

#[component]
pub fn NewMissionForm(#[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (form, set_form) = signal(MissionForm::default());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let today = chrono::Local::now().date_naive();
        let draft = match form.get_untracked().to_draft(today) {
            Ok(draft) => draft,
            Err(err) => {
                set_form_error.set(Some(err.to_string()));
                return;
            }
        };
        set_form_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            if ctx.create(draft).await.is_ok() {
                set_form.set(MissionForm::default());
                on_created.run(());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-mission-form" on:submit=submit>
            <h2>"Create New Mission"</h2>
            <div class="form-row">
                <label for="mission-name">"Mission Name *"</label>
                <input
                    id="mission-name"
                    type="text"
                    placeholder="Operation name"
                    prop:value=move || form.get().name
                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                />
                <label for="mission-priority">"Priority *"</label>
                <select
                    id="mission-priority"
                    prop:value=move || form.get().priority
                    on:change=move |ev| set_form.update(|f| f.priority = event_target_value(&ev))
                >
                    <option value="">"Select priority"</option>
                    {priority::ALL
                        .iter()
                        .map(|&value| view! { <option value=value>{value}</option> })
                        .collect_view()}
                </select>
            </div>
            <label for="mission-description">"Mission Description *"</label>
            <textarea
                id="mission-description"
                placeholder="Objectives and scope"
                prop:value=move || form.get().description
                on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
            <div class="form-row">
                <label for="mission-days">"Estimated Days"</label>
                <input
                    id="mission-days"
                    type="number"
                    min="0"
                    placeholder="30"
                    prop:value=move || form.get().estimated_days
                    on:input=move |ev| set_form.update(|f| f.estimated_days = event_target_value(&ev))
                />
                <label for="mission-team">"Team Size"</label>
                <input
                    id="mission-team"
                    type="number"
                    min="1"
                    placeholder="1"
                    prop:value=move || form.get().team_size
                    on:input=move |ev| set_form.update(|f| f.team_size = event_target_value(&ev))
                />
                <label for="mission-location">"Location"</label>
                <input
                    id="mission-location"
                    type="text"
                    placeholder="Mission Site"
                    prop:value=move || form.get().location
                    on:input=move |ev| set_form.update(|f| f.location = event_target_value(&ev))
                />
            </div>
            {move || form_error.get().map(|err| view! { <p class="form-error">{err}</p> })}
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Initializing..." } else { "Initialize Mission" }}
            </button>
        </form>
    }
}
