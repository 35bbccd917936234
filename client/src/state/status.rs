//! The single transient status-message slot (`#message`).
//!
//! DESIGN
//! ======
//! Every `show` overwrites the slot and issues a fresh token; the matching
//! `HideTicket` is what the auto-hide timer hands back. A timer whose ticket
//! is no longer current does nothing, so an older operation's timer cannot
//! hide a newer operation's message.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Delay before a shown message hides itself.
pub const AUTO_HIDE_MS: u32 = 5000;

/// Styling of the status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Text and styling currently held by the slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Token identifying one `show`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct StatusState {
    message: Option<StatusMessage>,
    visible: bool,
    token: u64,
}

impl StatusState {
    /// Overwrite the slot and make it visible.
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) -> HideTicket {
        self.token += 1;
        self.message = Some(StatusMessage { text: text.into(), kind });
        self.visible = true;
        HideTicket(self.token)
    }

    /// Hide the slot if `ticket` belongs to the message still on display.
    /// Returns whether anything was hidden.
    pub fn hide(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.token || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }

    /// Class attribute for the `#message` element.
    #[must_use]
    pub fn class_name(&self) -> String {
        match (&self.message, self.visible) {
            (Some(m), true) => m.kind.css_class().to_owned(),
            (Some(m), false) => format!("{} hidden", m.kind.css_class()),
            (None, _) => "hidden".to_owned(),
        }
    }
}
