//! One activity card with its participant roster.
//!
//! Participant identifiers are rendered as text nodes so markup inside an
//! email is displayed literally.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::catalog::{ActivityCardView, NO_PARTICIPANTS_TEXT, ParticipantEntry};

#[component]
pub fn ActivityCard(card: ActivityCardView, on_remove: Callback<ParticipantEntry>) -> impl IntoView {
    let availability = card.availability_text();
    let participants = if card.participants.is_empty() {
        view! { <p class="no-participants">{NO_PARTICIPANTS_TEXT}</p> }.into_any()
    } else {
        view! {
            <ul class="participants-list">
                {card
                    .participants
                    .into_iter()
                    .map(|entry| view! { <ParticipantItem entry=entry on_remove=on_remove/> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-section">
                <h5 class="participants-title">"Participants"</h5>
                <div class="participants-container">{participants}</div>
            </div>
        </div>
    }
}

/// Roster line with an immediate (unconfirmed) remove button.
#[component]
fn ParticipantItem(entry: ParticipantEntry, on_remove: Callback<ParticipantEntry>) -> impl IntoView {
    let label = entry.email.clone();
    let on_click = move |_| on_remove.run(entry.clone());

    view! {
        <li>
            {label}
            <button class="delete-participant" title="Unregister participant" on:click=on_click>
                "×"
            </button>
        </li>
    }
}
