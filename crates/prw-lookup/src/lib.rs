//! Remote option resolution for the provider registration wizard.
//!
//! This crate turns user input into option lists without ever blocking the
//! event loop:
//!
//! - **Debounced search** - keystrokes are coalesced so only the last query of a
//!   burst reaches the remote source
//! - **Cascading loaders** - dependent selects (institution -> course -> unit)
//!   load from their parent's value, last request wins
//! - **Collaborator traits** - the HTTP client is injected through
//!   [`OptionSearch`] and [`CascadeFetch`], never configured globally
//!
//! # Example
//!
//! ```ignore
//! let mut courses = CascadingOptionLoader::new(FieldNoun::new("Course"), ValueShape::EntityId);
//! if let Some(ticket) = courses.on_parent_change(&institution) {
//!     let resolution = fetch(&api, ticket).await;
//!     courses.apply(resolution);
//! }
//! ```

mod cascade;
mod debounce;
mod error;
mod settings;
mod source;

pub use cascade::{
    Applied, CascadingOptionLoader, FetchResolution, FetchTicket, FieldNoun, fetch,
};
pub use debounce::{DebounceWindow, DebouncedLookup, Dispatch};
pub use error::{LookupError, Result};
pub use settings::LookupSettings;
pub use source::{CascadeFetch, OptionSearch, StaticCatalogue};
