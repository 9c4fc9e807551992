use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::time::Duration;

use futures::Stream;
use tokio::sync::broadcast;
use tracing::debug;

use crate::gateway::Gateway;
use crate::history::{DEFAULT_HISTORY_LIMIT, History};
use crate::model::WaybarConfig;
use crate::validate::{ValidationReport, validate_config};

use super::debounce::{DEFAULT_VALIDATION_DEBOUNCE, DebouncedValidator};
use super::{EditorError, StoreEvent};

/// Tunables for a store instance.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Maximum number of undo snapshots retained.
    pub history_limit: usize,
    /// Delay between the last mutation and automatic validation.
    pub validation_debounce: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            validation_debounce: DEFAULT_VALIDATION_DEBOUNCE,
        }
    }
}

/// Thread-safe store owning the live document and its collaborators.
///
/// Cloning is cheap and every clone addresses the same document. Mutations
/// are synchronous; only gateway-facing operations (load, save) suspend.
#[derive(Clone)]
pub struct EditorStore {
    pub(super) state: Arc<RwLock<WaybarConfig>>,
    pub(super) history: Arc<Mutex<History>>,
    pub(super) gateway: Arc<dyn Gateway>,
    pub(super) events: broadcast::Sender<StoreEvent>,
    pub(super) validator: DebouncedValidator,
}

impl EditorStore {
    /// Creates a store with an empty document and default options.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self::with_options(gateway, StoreOptions::default())
    }

    /// Creates a store with an empty document and explicit options.
    pub fn with_options(gateway: Arc<dyn Gateway>, options: StoreOptions) -> Self {
        let (events, _) = broadcast::channel(256);
        let validator = DebouncedValidator::new(options.validation_debounce, events.clone());

        Self {
            state: Arc::new(RwLock::new(WaybarConfig::default())),
            history: Arc::new(Mutex::new(History::with_limit(options.history_limit))),
            gateway,
            events,
            validator,
        }
    }

    /// Returns a clone of the current document, recovering poisoned locks.
    pub fn current(&self) -> WaybarConfig {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Validates the current document immediately.
    pub fn validate(&self) -> ValidationReport {
        validate_config(&self.current())
    }

    /// Subscribes to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Store events as an async stream, skipping over lag gaps.
    pub fn events(&self) -> impl Stream<Item = StoreEvent> + use<> {
        let receiver = self.events.subscribe();

        futures::stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => return Some((event, receiver)),
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
    }

    /// Steps the document back one mutation.
    ///
    /// Returns whether a step was taken; undo with empty history is a no-op.
    ///
    /// # Errors
    /// Returns [`EditorError::Lock`] if the state lock is unavailable.
    pub fn undo(&self) -> Result<bool, EditorError> {
        let mut state = self.write_state()?;
        let mut history = self.lock_history();

        let Some(snapshot) = history.undo(&state) else {
            return Ok(false);
        };
        *state = snapshot;
        drop(state);
        drop(history);

        let _ = self.events.send(StoreEvent::Mutated { operation: "undo" });
        self.validator.schedule(Arc::clone(&self.state));
        Ok(true)
    }

    /// Steps the document forward again after an undo.
    ///
    /// # Errors
    /// Returns [`EditorError::Lock`] if the state lock is unavailable.
    pub fn redo(&self) -> Result<bool, EditorError> {
        let mut state = self.write_state()?;
        let mut history = self.lock_history();

        let Some(snapshot) = history.redo(&state) else {
            return Ok(false);
        };
        *state = snapshot;
        drop(state);
        drop(history);

        let _ = self.events.send(StoreEvent::Mutated { operation: "redo" });
        self.validator.schedule(Arc::clone(&self.state));
        Ok(true)
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.lock_history().can_undo()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.lock_history().can_redo()
    }

    /// Current (undo, redo) stack depths.
    pub fn history_depths(&self) -> (usize, usize) {
        self.lock_history().depths()
    }

    /// Suspends history capture so a bulk operation reads as one mutation.
    pub fn pause_history(&self) {
        self.lock_history().pause();
    }

    /// Resumes history capture.
    pub fn resume_history(&self) {
        self.lock_history().resume();
    }

    /// Cancels the pending validation timer, if any.
    pub fn shutdown(&self) {
        self.validator.cancel();
    }

    /// Applies one mutation: snapshot, apply to a draft, commit, notify.
    ///
    /// The closure works on a draft clone, so a failing operation leaves the
    /// live document and the history stacks untouched.
    pub(super) fn mutate<T>(
        &self,
        operation: &'static str,
        apply: impl FnOnce(&mut WaybarConfig) -> Result<T, EditorError>,
    ) -> Result<T, EditorError> {
        let mut state = self.write_state()?;

        let mut draft = state.clone();
        let value = apply(&mut draft)?;

        self.lock_history().record(&state);
        draft.touch();
        *state = draft;
        drop(state);

        debug!(operation, "applied mutation");
        let _ = self.events.send(StoreEvent::Mutated { operation });
        self.validator.schedule(Arc::clone(&self.state));
        Ok(value)
    }

    /// Replaces the document wholesale and clears history, as on load,
    /// reset, and session restore.
    pub(super) fn replace(&self, new_state: WaybarConfig) -> Result<(), EditorError> {
        let mut state = self.write_state()?;
        *state = new_state;
        drop(state);

        let mut history = self.lock_history();
        history.clear();
        drop(history);

        let _ = self.events.send(StoreEvent::Replaced);
        self.validator.schedule(Arc::clone(&self.state));
        Ok(())
    }

    pub(super) fn write_state(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, WaybarConfig>, EditorError> {
        self.state
            .write()
            .map_err(|_| EditorError::Lock { lock_type: "write" })
    }

    pub(super) fn lock_history(&self) -> MutexGuard<'_, History> {
        match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
