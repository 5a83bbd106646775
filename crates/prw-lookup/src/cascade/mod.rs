//! Cascading (dependent) option loading.
//!
//! A cascading field loads its options from the current value of a parent
//! field. The loader is a plain state machine; the fetch itself is a future the
//! host awaits and feeds back through [`CascadingOptionLoader::apply`].

mod loader;
mod noun;

pub use loader::{Applied, CascadingOptionLoader, FetchResolution, FetchTicket, fetch};
pub use noun::FieldNoun;
