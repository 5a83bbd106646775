//! Debounced remote lookups.
//!
//! Provides:
//! - `DebounceWindow` - pure coalescing state, usable from a polling tick
//! - `DebouncedLookup` - tokio-driven wrapper around an `OptionSearch`

mod driver;
mod window;

pub use driver::DebouncedLookup;
pub use window::{DebounceWindow, Dispatch};
