//! Collaborator contracts for remote option sources.
//!
//! The lookup machinery never talks to the network itself. Callers construct
//! their API client explicitly and hand it in through these traits, either by
//! implementing them or by passing a closure:
//!
//! ```ignore
//! let client = ApiClient::new(base_url, session_key);
//! let search = move |query: String| {
//!     let client = client.clone();
//!     async move { client.search_units(&query).await.map_err(LookupError::remote) }
//! };
//! ```

use std::collections::HashMap;
use std::future::{self, Future};

use prw_model::{SelectOption, filter_options};

use crate::error::Result;

/// Free-text option search, driven by keystrokes through a debounced lookup.
pub trait OptionSearch: Send + Sync + 'static {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SelectOption>>> + Send;
}

/// Child options of a parent selection. An empty list means "no results".
pub trait CascadeFetch: Send + Sync {
    fn fetch(&self, parent_key: &str) -> impl Future<Output = Result<Vec<SelectOption>>> + Send;
}

impl<F, Fut> OptionSearch for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<SelectOption>>> + Send,
{
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SelectOption>>> + Send {
        self(query.to_string())
    }
}

impl<F, Fut> CascadeFetch for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<SelectOption>>> + Send,
{
    fn fetch(&self, parent_key: &str) -> impl Future<Output = Result<Vec<SelectOption>>> + Send {
        self(parent_key.to_string())
    }
}

/// In-memory option source: searchable root options plus children per parent key.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    roots: Vec<SelectOption>,
    children: HashMap<String, Vec<SelectOption>>,
}

impl StaticCatalogue {
    pub fn new(roots: Vec<SelectOption>) -> Self {
        Self {
            roots,
            children: HashMap::new(),
        }
    }

    /// Register the children returned for `parent_key`.
    pub fn with_children(
        mut self,
        parent_key: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        self.children.insert(parent_key.into(), options);
        self
    }

    pub fn roots(&self) -> &[SelectOption] {
        &self.roots
    }

    pub fn children_of(&self, parent_key: &str) -> &[SelectOption] {
        self.children.get(parent_key).map(Vec::as_slice).unwrap_or_default()
    }
}

impl OptionSearch for StaticCatalogue {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SelectOption>>> + Send {
        future::ready(Ok(filter_options(&self.roots, query)))
    }
}

impl CascadeFetch for StaticCatalogue {
    fn fetch(&self, parent_key: &str) -> impl Future<Output = Result<Vec<SelectOption>>> + Send {
        future::ready(Ok(self.children_of(parent_key).to_vec()))
    }
}
