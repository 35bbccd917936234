//! Aggregate state for the activity panel.
//!
//! DESIGN
//! ======
//! One owned value holds everything the panel renders. The UI keeps it in a
//! single reactive signal; controller operations mutate it through
//! `PanelHost::update` and never hold a borrow across an await.

use super::catalog::CatalogState;
use super::signup::SignupForm;
use super::status::StatusState;

#[derive(Clone, Debug, Default)]
pub struct PanelState {
    pub catalog: CatalogState,
    pub status: StatusState,
    pub form: SignupForm,
}
