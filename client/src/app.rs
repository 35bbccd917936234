//! Root application component and context provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::activity_panel::ActivityPanel;
use crate::state::panel::PanelState;

/// Root application component.
///
/// Provides the shared panel state to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let panel = RwSignal::new(PanelState::default());
    provide_context(panel);

    view! {
        <Title text="Mergington High School Activities"/>

        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <ActivityPanel/>
        </main>

        <footer>
            <p>"© 2023 Mergington High School"</p>
        </footer>
    }
}
