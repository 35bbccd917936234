//! Signup form fields (`#email`, `#activity`).

/// Current values of the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected option value; empty while the placeholder is selected.
    pub activity: String,
}

impl SignupForm {
    /// Clear both fields back to their initial values.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}
