//! Cascading option loader state machine.

use prw_model::{LookupState, SelectOption, ValueShape, dedup_by_id};
use tracing::{debug, trace, warn};

use super::noun::FieldNoun;
use crate::error::Result;
use crate::source::CascadeFetch;

/// Identity of one issued fetch: a request number and the parent key it was
/// issued for. Only the ticket of the latest request is accepted back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    request_id: u64,
    parent_key: String,
}

impl FetchTicket {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn parent_key(&self) -> &str {
        &self.parent_key
    }
}

/// Outcome of a fetch, tagged with the ticket that issued it.
#[derive(Debug)]
pub struct FetchResolution {
    pub ticket: FetchTicket,
    pub outcome: Result<Vec<SelectOption>>,
}

/// What applying a resolution did to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Options are available; carries how many.
    Loaded(usize),
    /// The fetch returned no options.
    Empty,
    /// The fetch failed and was treated as no options.
    Failed,
    /// The resolution belonged to an outdated request and was dropped.
    Stale,
}

/// Drives one dependent select from its parent's selection.
///
/// ```text
/// Idle --parent--> Loading --options--> Loaded
///   ^                 |  ^                 |
///   |                 |  +-----parent------+
///   |                 +--none/failure--> Empty
///   +------------------reset------------------
/// ```
///
/// The field stays disabled until the loader reaches `Loaded`.
#[derive(Debug, Clone)]
pub struct CascadingOptionLoader {
    noun: FieldNoun,
    shape: ValueShape,
    state: LookupState,
    placeholder: String,
    disabled: bool,
    last_request: u64,
    current: Option<FetchTicket>,
}

impl CascadingOptionLoader {
    /// Create an idle loader whose parent values must have `shape`.
    pub fn new(noun: FieldNoun, shape: ValueShape) -> Self {
        let placeholder = noun.searching();
        Self {
            noun,
            shape,
            state: LookupState::Idle,
            placeholder,
            disabled: true,
            last_request: 0,
            current: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &LookupState {
        &self.state
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn options(&self) -> &[SelectOption] {
        self.state.options()
    }

    pub fn noun(&self) -> &FieldNoun {
        &self.noun
    }

    pub fn shape(&self) -> ValueShape {
        self.shape
    }

    /// Ticket of the fetch currently awaited, if any.
    pub fn pending(&self) -> Option<&FetchTicket> {
        self.current.as_ref()
    }

    /// React to a new parent selection.
    ///
    /// Returns the ticket of the fetch to issue, or `None` when the parent
    /// value does not have the required shape. In that case the loader goes
    /// back to `Idle` and any fetch still in flight is invalidated.
    pub fn on_parent_change(&mut self, parent: &SelectOption) -> Option<FetchTicket> {
        let parent_key = match self.shape.narrow(&parent.value) {
            Ok(key) => key,
            Err(err) => {
                debug!(
                    field = self.noun.singular(),
                    parent = %parent.label,
                    error = %err,
                    "parent value cannot drive lookup"
                );
                self.reset();
                return None;
            }
        };

        self.last_request += 1;
        let ticket = FetchTicket {
            request_id: self.last_request,
            parent_key: parent_key.clone(),
        };

        debug!(
            field = self.noun.singular(),
            parent_key = %parent_key,
            request_id = ticket.request_id,
            "loading dependent options"
        );
        self.state = LookupState::Loading(parent_key);
        self.placeholder = self.noun.finding();
        self.disabled = true;
        self.current = Some(ticket.clone());
        Some(ticket)
    }

    /// Return to `Idle`, invalidating any fetch in flight.
    pub fn reset(&mut self) {
        self.state = LookupState::Idle;
        self.placeholder = self.noun.searching();
        self.disabled = true;
        self.current = None;
    }

    /// Apply the outcome of a fetch issued by [`Self::on_parent_change`].
    pub fn apply(&mut self, resolution: FetchResolution) -> Applied {
        let FetchResolution { ticket, outcome } = resolution;
        if self.current.as_ref() != Some(&ticket) {
            trace!(
                field = self.noun.singular(),
                parent_key = %ticket.parent_key,
                request_id = ticket.request_id,
                "dropping stale lookup response"
            );
            return Applied::Stale;
        }
        self.current = None;

        let options = match outcome {
            Ok(options) => options,
            Err(err) => {
                warn!(
                    field = self.noun.singular(),
                    parent_key = %ticket.parent_key,
                    error = %err,
                    "dependent lookup failed"
                );
                self.set_empty();
                return Applied::Failed;
            }
        };

        let (options, dropped) = dedup_by_id(options);
        if dropped > 0 {
            warn!(field = self.noun.singular(), dropped, "lookup returned duplicate option ids");
        }

        if options.is_empty() {
            debug!(
                field = self.noun.singular(),
                parent_key = %ticket.parent_key,
                "no dependent options"
            );
            self.set_empty();
            return Applied::Empty;
        }

        let count = options.len();
        debug!(
            field = self.noun.singular(),
            parent_key = %ticket.parent_key,
            count,
            "dependent options loaded"
        );
        self.state = LookupState::Loaded(options);
        self.placeholder = self.noun.searching();
        self.disabled = false;
        Applied::Loaded(count)
    }

    fn set_empty(&mut self) {
        self.state = LookupState::Empty;
        self.placeholder = self.noun.none_found();
        self.disabled = true;
    }
}

/// Await the fetch for `ticket` and tag the outcome with it.
pub async fn fetch<F: CascadeFetch>(fetcher: &F, ticket: FetchTicket) -> FetchResolution {
    let outcome = fetcher.fetch(&ticket.parent_key).await;
    FetchResolution { ticket, outcome }
}
