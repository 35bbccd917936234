//! Activity list plus signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the page contract (`activities-list`, `signup-form`, `email`,
//! `activity`, `message`) to `PanelState` and routes user events to the
//! controller. The initial catalog fetch starts when the panel mounts.

#[cfg(test)]
#[path = "activity_panel_test.rs"]
mod activity_panel_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCard;
use crate::components::status_message::StatusMessage;
use crate::controller;
use crate::host::BrowserHost;
use crate::state::catalog::{ActivityCardView, ParticipantEntry, SelectOption};
use crate::state::panel::PanelState;

/// Catalog slices of the panel state. Each memo only notifies when its own
/// value changes, so form edits leave the list and the select alone.
#[derive(Clone, Copy)]
pub(crate) struct CatalogView {
    pub notice: Memo<Option<&'static str>>,
    pub cards: Memo<Vec<ActivityCardView>>,
    pub options: Memo<Vec<SelectOption>>,
}

impl CatalogView {
    pub fn new(panel: RwSignal<PanelState>) -> Self {
        Self {
            notice: Memo::new(move |_| panel.with(|s| s.catalog.notice())),
            cards: Memo::new(move |_| panel.with(|s| s.catalog.cards.clone())),
            options: Memo::new(move |_| panel.with(|s| s.catalog.options.clone())),
        }
    }
}

#[component]
pub fn ActivityPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let host = BrowserHost::new(panel);

    leptos::task::spawn_local(async move { controller::refresh_activities(&host).await });

    let on_remove = Callback::new(move |entry: ParticipantEntry| {
        leptos::task::spawn_local(async move { controller::unregister_participant(&host, entry).await });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move { controller::submit_signup(&host).await });
    };

    let catalog = CatalogView::new(panel);

    let activity_list = move || match catalog.notice.get() {
        Some(notice) => view! { <p>{notice}</p> }.into_any(),
        None => catalog
            .cards
            .get()
            .into_iter()
            .map(|card| view! { <ActivityCard card=card on_remove=on_remove/> })
            .collect::<Vec<_>>()
            .into_any(),
    };

    let options = move || {
        catalog
            .options
            .get()
            .into_iter()
            .map(|option| view! { <option value=option.value>{option.label}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <section id="activities-container">
            <h3>"Available Activities"</h3>
            <div id="activities-list">{activity_list}</div>
        </section>

        <section id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        placeholder="your-email@mergington.edu"
                        prop:value=move || panel.with(|s| s.form.email.clone())
                        on:input=move |ev| panel.update(|s| s.form.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        required
                        prop:value=move || panel.with(|s| s.form.activity.clone())
                        on:change=move |ev| panel.update(|s| s.form.activity = event_target_value(&ev))
                    >
                        {options}
                    </select>
                </div>
                <button type="submit">"Sign Up"</button>
            </form>
            <StatusMessage/>
        </section>
    }
}
