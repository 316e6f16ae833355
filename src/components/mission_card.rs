//! Mission Card Component
//!
//! One mission with its details, progress controls, status selector and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use mission_sync::MissionPatch;

use crate::components::{DeleteConfirmButton, ProgressBar};
use crate::context::use_app_context;
use crate::models::{priority_class, status_class, status_options, Mission};

/// Points added by the progress button
const PROGRESS_STEP: i32 = 10;

#[component]
pub fn MissionCard(mission: Mission) -> impl IntoView {
    let ctx = use_app_context();
    let Mission { id, details } = mission;
    let current_status = details.status.clone();
    let complete = details.progress.is_complete();

    let advance = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let id = id.clone();
            spawn_local(async move {
                let _ = ctx.advance_progress(id, PROGRESS_STEP).await;
            });
        }
    };

    let change_status = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            let patch = MissionPatch::status(event_target_value(&ev));
            let id = id.clone();
            spawn_local(async move {
                let _ = ctx.update(id, patch).await;
            });
        }
    };

    let delete = move |_: ()| {
        let id = id.clone();
        spawn_local(async move {
            let _ = ctx.delete(id).await;
        });
    };

    view! {
        <div class="mission-card">
            <div class="mission-card-header">
                <h3>{details.name.clone()}</h3>
                <span class=status_class(&details.status)>{details.status.clone()}</span>
                <span class=priority_class(&details.priority)>{details.priority.clone()}</span>
            </div>
            <p class="mission-description">{details.description.clone()}</p>
            <dl class="mission-facts">
                <dt>"Location"</dt>
                <dd>{details.location.clone()}</dd>
                <dt>"Team"</dt>
                <dd>{format!("{} members", details.team_members)}</dd>
                <dt>"Started"</dt>
                <dd>{details.start_date.format("%Y-%m-%d").to_string()}</dd>
                <dt>"Est. completion"</dt>
                <dd>{details.estimated_completion.format("%Y-%m-%d").to_string()}</dd>
            </dl>
            <div class="mission-progress">
                <ProgressBar progress=details.progress />
                <span class="progress-label">{details.progress.to_string()}</span>
                <button class="advance-btn" disabled=complete on:click=advance>
                    {format!("+{}%", PROGRESS_STEP)}
                </button>
            </div>
            <div class="mission-actions">
                <select class="status-select" on:change=change_status>
                    {status_options(&current_status)
                        .into_iter()
                        .map(|value| {
                            let selected = current_status == value;
                            view! { <option value=value.clone() selected=selected>{value.clone()}</option> }
                        })
                        .collect_view()}
                </select>
                <DeleteConfirmButton on_confirm=delete />
            </div>
        </div>
    }
}
