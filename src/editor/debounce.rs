use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::model::WaybarConfig;
use crate::validate::validate_config;

use super::StoreEvent;

/// Delay between the last mutation and the automatic validation pass.
pub const DEFAULT_VALIDATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs full-document validation a fixed delay after the last mutation.
///
/// A single pending timer is kept: every new mutation aborts it and starts a
/// fresh one, so a rapid burst of edits triggers exactly one validation pass.
/// The pending task is aborted when the last store handle drops.
#[derive(Clone)]
pub(super) struct DebouncedValidator {
    delay: Duration,
    pending: Arc<PendingTask>,
    events: broadcast::Sender<StoreEvent>,
}

/// Holder whose drop cancels the outstanding timer.
struct PendingTask(Mutex<Option<JoinHandle<()>>>);

impl Drop for PendingTask {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.0.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl DebouncedValidator {
    pub(super) fn new(delay: Duration, events: broadcast::Sender<StoreEvent>) -> Self {
        Self {
            delay,
            pending: Arc::new(PendingTask(Mutex::new(None))),
            events,
        }
    }

    /// Resets the pending timer; only the last call in a burst survives.
    ///
    /// Outside a Tokio runtime this is a no-op; validation remains available
    /// on demand through the store.
    pub(super) fn schedule(&self, state: Arc<RwLock<WaybarConfig>>) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let mut pending = match self.pending.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let delay = self.delay;
        let events = self.events.clone();
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let snapshot = match state.read() {
                Ok(guard) => guard.clone(),
                Err(poisoned) => poisoned.into_inner().clone(),
            };

            let report = validate_config(&snapshot);
            debug!(errors = report.message_count(), "debounced validation pass");
            let _ = events.send(StoreEvent::Validated { report });
        }));
    }

    /// Aborts any outstanding timer.
    pub(super) fn cancel(&self) {
        let mut pending = match self.pending.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
