//! The shared `#message` status area.

use leptos::prelude::*;

use crate::state::panel::PanelState;

/// Status slot under the signup form. Hidden until an operation reports.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    let class = move || panel.with(|s| s.status.class_name());
    let text = move || panel.with(|s| s.status.text().to_owned());

    view! {
        <div id="message" class=class>
            {text}
        </div>
    }
}
