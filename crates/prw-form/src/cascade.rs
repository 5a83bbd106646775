//! Cascading selects wired through a [`FieldGraph`].

use std::collections::BTreeMap;
use std::fmt::Debug;

use prw_lookup::{Applied, CascadingOptionLoader, FetchResolution, FetchTicket};
use prw_model::SelectOption;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::FieldGraph;
use crate::record::{FieldValue, FormRecord};
use crate::state::GenericFormState;

/// Keeps dependent selects in step with their parents.
///
/// Selecting a value writes it to the form, clears every field that depends
/// on it (directly or transitively), resets their loaders and arms the
/// loaders of the direct children. The caller runs the returned fetches and
/// feeds each outcome back through [`CascadeController::apply`].
#[derive(Debug, Clone)]
pub struct CascadeController<F> {
    graph: FieldGraph<F>,
    loaders: BTreeMap<F, CascadingOptionLoader>,
}

impl<F: Copy + Ord + Debug> CascadeController<F> {
    pub fn new(graph: FieldGraph<F>) -> Self {
        Self {
            graph,
            loaders: BTreeMap::new(),
        }
    }

    /// Attach the loader that fills `field` from its parent.
    #[must_use]
    pub fn with_loader(mut self, field: F, loader: CascadingOptionLoader) -> Self {
        self.loaders.insert(field, loader);
        self
    }

    pub fn graph(&self) -> &FieldGraph<F> {
        &self.graph
    }

    pub fn loader(&self, field: F) -> Option<&CascadingOptionLoader> {
        self.loaders.get(&field)
    }

    /// Options currently offered for `field`; empty unless its loader is loaded.
    pub fn options(&self, field: F) -> &[SelectOption] {
        self.loader(field).map(CascadingOptionLoader::options).unwrap_or_default()
    }

    /// Record a selection (or its removal) on `field`.
    ///
    /// Returns one ticket per direct child whose loader accepted the new
    /// value. Fails, leaving form and loaders unchanged, when `field` does
    /// not hold a choice.
    pub fn select<T>(
        &mut self,
        form: &mut GenericFormState<T>,
        field: F,
        option: Option<&SelectOption>,
    ) -> Result<Vec<(F, FetchTicket)>>
    where
        T: FormRecord<Field = F>,
    {
        form.set_field(field, option.map(|o| o.value.clone()))?;

        for dependent in self.graph.dependents(field) {
            form.set_field(dependent, FieldValue::Empty)?;
            if let Some(loader) = self.loaders.get_mut(&dependent) {
                loader.reset();
            }
        }

        let Some(option) = option else {
            debug!(field = T::field_name(field), "selection cleared");
            return Ok(Vec::new());
        };

        let mut tickets = Vec::new();
        for &child in self.graph.children(field) {
            let Some(loader) = self.loaders.get_mut(&child) else {
                continue;
            };
            if let Some(ticket) = loader.on_parent_change(option) {
                tickets.push((child, ticket));
            }
        }
        debug!(field = T::field_name(field), armed = tickets.len(), "selection recorded");
        Ok(tickets)
    }

    /// Route a fetch outcome to the loader of `field`.
    pub fn apply(&mut self, field: F, resolution: FetchResolution) -> Applied {
        match self.loaders.get_mut(&field) {
            Some(loader) => loader.apply(resolution),
            None => {
                trace!(field = ?field, "no loader for resolved field");
                Applied::Stale
            }
        }
    }
}
