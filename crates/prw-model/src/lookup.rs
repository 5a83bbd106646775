//! Lookup state of a cascading field.

use crate::option::SelectOption;

/// Exactly one of these holds per cascading field at a time.
///
/// `Idle` is the only initial state. A field re-enters `Loading` on every new
/// parent selection and returns to `Idle` only through an explicit reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    /// Fetch in flight for the given parent key.
    Loading(String),
    Loaded(Vec<SelectOption>),
    Empty,
}

impl LookupState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Options available for selection; empty unless `Loaded`.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Loaded(options) => options,
            _ => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Loaded(_) => "loaded",
            Self::Empty => "empty",
        }
    }
}
