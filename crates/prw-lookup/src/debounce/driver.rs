//! Timer-driven debounced lookup.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use prw_model::SelectOption;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, trace, warn};

use super::window::DebounceWindow;
use crate::error::{LookupError, Result};
use crate::settings::LookupSettings;
use crate::source::OptionSearch;

type SettledCallback = Arc<dyn Fn(Vec<SelectOption>) + Send + Sync>;

/// Debounced wrapper around a remote option search.
///
/// `schedule` returns immediately. The query is sent once the quiet interval
/// passes without another `schedule`; the callback then receives the options
/// exactly once. A failed search delivers an empty list. A result whose query
/// was superseded while in flight is dropped.
pub struct DebouncedLookup<S> {
    source: Arc<S>,
    settings: LookupSettings,
    window: Arc<Mutex<DebounceWindow>>,
    on_settled: SettledCallback,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl<S: OptionSearch> DebouncedLookup<S> {
    /// Create a lookup bound to the current tokio runtime.
    pub fn new(
        source: S,
        settings: LookupSettings,
        on_settled: impl Fn(Vec<SelectOption>) + Send + Sync + 'static,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| LookupError::NoRuntime)?;
        Ok(Self {
            source: Arc::new(source),
            window: Arc::new(Mutex::new(DebounceWindow::new(settings.debounce()))),
            settings,
            on_settled: Arc::new(on_settled),
            runtime,
            task: None,
        })
    }

    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// Queue `query`, replacing any query still waiting for its quiet interval.
    pub fn schedule(&mut self, query: impl Into<String>) {
        let query = query.into();
        let generation = lock(&self.window).arm(query, Instant::now().into_std());

        // Whatever the previous task was doing, its result can no longer be delivered.
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let source = Arc::clone(&self.source);
        let window = Arc::clone(&self.window);
        let on_settled = Arc::clone(&self.on_settled);
        let settings = self.settings.clone();

        self.task = Some(self.runtime.spawn(async move {
            time::sleep(settings.debounce()).await;

            let released = lock(&window).take_if_current(generation);
            let Some(dispatch) = released else {
                return;
            };

            let options = if settings.accepts_query(&dispatch.query) {
                debug!(query = %dispatch.query, generation, "dispatching option search");
                match source.search(&dispatch.query).await {
                    Ok(options) => options,
                    Err(err) => {
                        warn!(query = %dispatch.query, error = %err, "option search failed");
                        Vec::new()
                    }
                }
            } else {
                debug!(query = %dispatch.query, "query shorter than minimum, not dispatched");
                Vec::new()
            };

            let accepted = lock(&window).settle(dispatch.generation);
            if !accepted {
                trace!(query = %dispatch.query, generation, "discarding superseded search result");
                return;
            }

            on_settled(options);
        }));
    }

    /// Drop the pending query and any result still in flight.
    pub fn cancel(&mut self) {
        lock(&self.window).cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether a query is waiting for its quiet interval or its result.
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl<S> Drop for DebouncedLookup<S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn lock(window: &Mutex<DebounceWindow>) -> MutexGuard<'_, DebounceWindow> {
    window.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_runtime() {
        let result = DebouncedLookup::new(
            |_: String| async { Ok::<_, LookupError>(Vec::<SelectOption>::new()) },
            LookupSettings::default(),
            |_| {},
        );
        assert!(matches!(result, Err(LookupError::NoRuntime)));
    }
}
