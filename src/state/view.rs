//! View-level state machine: chat vs. ticket list.

/// The two mutually exclusive top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Chat,
    Tickets,
}

/// Tracks the active view. Entering [`View::Tickets`] signals that the
/// ticket list should be refreshed; there are no other transition guards.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewState {
    active: View,
}

impl ViewState {
    #[must_use]
    pub fn active(&self) -> View {
        self.active
    }

    /// Switch views. Returns `true` when the caller should refresh the
    /// ticket list (a transition into the tickets view).
    pub fn switch(&mut self, view: View) -> bool {
        let refresh = view == View::Tickets && self.active != View::Tickets;
        self.active = view;
        refresh
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
