//! Open/closed state of the mobile navigation menu.
//!
//! The menu is a two-state machine driven by three events: the toggle control, a pointer
//! interaction outside the menu and its toggle, and activation of a link inside the menu.


/// Whether the mobile menu panel is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move the menu between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The toggle control was pressed
    Toggle,
    /// A pointer-down or touch-start landed outside the panel and the toggle control
    OutsidePointer,
    /// A navigation link inside the panel was activated
    LinkActivated,
}

impl MenuState {
    /// Apply an event, returning the next state
    ///
    /// Outside interactions and link activations only ever close the menu, so they leave a
    /// closed menu untouched.
    pub fn transition(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) => Self::Closed,
            (Self::Open, MenuEvent::OutsidePointer | MenuEvent::LinkActivated) => Self::Closed,
            (Self::Closed, MenuEvent::OutsidePointer | MenuEvent::LinkActivated) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
