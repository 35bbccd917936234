//! Activity-list state: rendered cards and signup select options.
//!
//! DESIGN
//! ======
//! The list is rebuilt wholesale from each catalog fetch; nothing is patched
//! incrementally. Every fetch takes a `FetchTicket` from a monotonically
//! increasing sequence, and a response is applied only when its ticket is
//! newer than the last one applied. A slow early response can therefore
//! never overwrite a faster later one.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use roster::ActivityCatalog;

use crate::net::api::ApiError;

pub const PLACEHOLDER_LABEL: &str = "-- Select an activity --";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// What the `#activities-list` area currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// Cards from the most recent applied catalog.
    Ready,
    /// The most recent applied fetch failed; a single notice replaces the cards.
    Failed,
}

/// Sequence number handed out when a fetch starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Binding between a remove control and the roster entry it removes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub activity: String,
    pub email: String,
}

/// Render model for one activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantEntry>,
}

impl ActivityCardView {
    #[must_use]
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One `<option>` of the signup select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn placeholder() -> Self {
        Self { value: String::new(), label: PLACEHOLDER_LABEL.to_owned() }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// State behind the activity list and the signup select.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub status: ListStatus,
    pub cards: Vec<ActivityCardView>,
    pub options: Vec<SelectOption>,
    last_issued: u64,
    last_applied: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            status: ListStatus::Loading,
            cards: Vec::new(),
            options: vec![SelectOption::placeholder()],
            last_issued: 0,
            last_applied: 0,
        }
    }
}

impl CatalogState {
    /// Start a fetch and return its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_issued += 1;
        FetchTicket(self.last_issued)
    }

    /// Apply a fetch outcome. Returns `false` when a newer fetch has already
    /// been applied and this one was dropped.
    ///
    /// On failure the cards give way to the failure notice while the select
    /// options keep whatever they held before.
    pub fn apply(&mut self, ticket: FetchTicket, outcome: Result<ActivityCatalog, ApiError>) -> bool {
        if ticket.0 <= self.last_applied {
            return false;
        }
        self.last_applied = ticket.0;
        match outcome {
            Ok(catalog) => {
                self.cards = build_cards(&catalog);
                self.options = build_options(&catalog);
                self.status = ListStatus::Ready;
            }
            Err(_) => {
                self.cards.clear();
                self.status = ListStatus::Failed;
            }
        }
        true
    }

    /// Notice shown instead of cards, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            ListStatus::Loading => Some(LOADING_TEXT),
            ListStatus::Failed => Some(LOAD_FAILED_TEXT),
            ListStatus::Ready => None,
        }
    }
}

/// Build one card per activity, in catalog order.
#[must_use]
pub fn build_cards(catalog: &ActivityCatalog) -> Vec<ActivityCardView> {
    catalog
        .iter()
        .map(|(name, activity)| ActivityCardView {
            name: name.to_owned(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantEntry { activity: name.to_owned(), email: email.clone() })
                .collect(),
        })
        .collect()
}

/// Placeholder first, then one option per activity.
#[must_use]
pub fn build_options(catalog: &ActivityCatalog) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder())
        .chain(catalog.names().map(|name| SelectOption { value: name.to_owned(), label: name.to_owned() }))
        .collect()
}
