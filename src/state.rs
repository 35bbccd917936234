//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! whole catalog lives in memory behind one `RwLock`; it is seeded at startup
//! and nothing is persisted, so a restart restores the seed rosters.

use std::sync::Arc;

use roster::{Activity, ActivityCatalog};
use tokio::sync::RwLock;

/// Shared application state, injected into Axum handlers via State extractor.
/// Cheap to clone; the catalog is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<RwLock<ActivityCatalog>>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self { activities: Arc::new(RwLock::new(catalog)) }
    }

    /// State holding the school's standing activity list.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }
}

fn activity(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants,
        participants: participants.iter().map(|p| format!("{p}@mergington.edu")).collect(),
    }
}

/// Activities available at startup, in display order.
#[must_use]
pub fn seed_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert(
        "Chess Club",
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael", "daniel"],
        ),
    );
    catalog.insert(
        "Programming Class",
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma", "sophia"],
        ),
    );
    catalog.insert(
        "Gym Class",
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john", "olivia"],
        ),
    );
    catalog.insert(
        "Soccer Team",
        activity(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam", "noah"],
        ),
    );
    catalog.insert(
        "Basketball Team",
        activity(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava", "mia"],
        ),
    );
    catalog.insert(
        "Art Club",
        activity(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia", "harper"],
        ),
    );
    catalog.insert(
        "Drama Club",
        activity(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella", "scarlett"],
        ),
    );
    catalog.insert(
        "Math Club",
        activity(
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james", "benjamin"],
        ),
    );
    catalog.insert(
        "Debate Team",
        activity(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte", "henry"],
        ),
    );
    catalog
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
