use crate::error::{HistoryError, Result};
use crate::formatter::{DEFAULT_MARKER, HistoryRow, format_history};
use crate::history::{HistoryStore, Location, Plan, Transition};
use crate::navigator::{ClipboardSink, Navigator};
use crate::resolver;
use tracing::{debug, info, warn};

/// What the user asked the shell to do with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Go to a path. `literal` disables expansion of the path.
    Path { path: String, literal: bool },
    Backward,
    Forward,
    ById(usize),
    /// No destination given.
    Empty,
}

/// Result of a handled intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The location changed and the history was updated.
    Moved {
        from: Location,
        to: Location,
        /// False when a copy was requested and the clipboard refused it.
        copied: bool,
    },
    /// The target was the current location, nothing changed.
    Unchanged,
    Listed(Vec<HistoryRow>),
    Copied(Location),
}

/// Changes the shell location and keeps the history in step with it.
///
/// The history is only mutated after the navigator has actually moved the
/// shell somewhere else. Every rejected attempt leaves it untouched.
pub struct NavigationController<N, C> {
    navigator: N,
    clipboard: C,
    marker: String,
}

impl<N: Navigator, C: ClipboardSink> NavigationController<N, C> {
    pub fn new(navigator: N, clipboard: C) -> Self {
        Self {
            navigator,
            clipboard,
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Sets the marker used for the current row of listings.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Direct access to the navigator, bypassing the history. Used to pick
    /// the starting location before anything is recorded.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn current_location(&self) -> Location {
        self.navigator.current_location()
    }

    /// Lists the history around the current location.
    pub fn rows(&self, store: &HistoryStore) -> Vec<HistoryRow> {
        format_history(store, &self.current_location(), &self.marker)
    }

    /// Handles `intent`, copying the new location to the clipboard after a
    /// successful move when `copy` is set.
    pub fn execute(
        &mut self,
        store: &mut HistoryStore,
        intent: Intent,
        copy: bool,
    ) -> Result<Outcome> {
        let old = self.navigator.current_location();

        // Entries taken from history are exact locations.
        let literal = match &intent {
            Intent::Path { literal, .. } => *literal,
            _ => true,
        };

        let plan = match intent {
            Intent::Empty => return self.list_or_copy(store, old, copy),
            Intent::Backward => store.plan_backward(),
            Intent::Forward => store.plan_forward(),
            Intent::ById(id) => match store.plan_to_id(id) {
                Ok(Some(plan)) => Ok(plan),
                Ok(None) => {
                    debug!("id {} is the current location", id);
                    return Ok(Outcome::Unchanged);
                }
                Err(e) => Err(e),
            },
            Intent::Path { path, literal } => Ok(Plan {
                transition: Transition::Record,
                target: resolver::resolve(&path, literal),
            }),
        }
        .inspect_err(|e| warn!("{}", e))?;

        self.navigate(store, plan, old, literal, copy)
    }

    /// Removes the entry with `id` from the history.
    pub fn remove(&self, store: &mut HistoryStore, id: usize) -> Result<Location> {
        store.remove_at(id).inspect_err(|e| warn!("{}", e))
    }

    /// Forgets the whole history.
    pub fn clear(&self, store: &mut HistoryStore) {
        info!("Clearing {} history entries", store.len() - 1);
        store.clear();
    }

    fn navigate(
        &mut self,
        store: &mut HistoryStore,
        plan: Plan,
        old: Location,
        literal: bool,
        copy: bool,
    ) -> Result<Outcome> {
        let attempt = self.navigator.attempt_change(&plan.target, literal);
        let new = self.navigator.current_location();

        if let Err(source) = attempt {
            if !self.navigator.same_location(&old, &new) {
                warn!(
                    "navigation to {} failed but moved the shell to {}",
                    plan.target, new
                );
            }
            let error = HistoryError::NavigationFailed {
                target: plan.target,
                source,
            };
            warn!("{}", error);
            return Err(error);
        }

        if self.navigator.same_location(&old, &new) {
            debug!("location unchanged after moving to {}", plan.target);
            return Ok(Outcome::Unchanged);
        }

        store
            .commit(plan.transition, old.clone())
            .inspect_err(|e| warn!("{}", e))?;
        debug!("moved {} -> {} ({:?})", old, new, plan.transition);

        let copied = copy && self.copy(&new);
        Ok(Outcome::Moved {
            from: old,
            to: new,
            copied,
        })
    }

    fn list_or_copy(
        &mut self,
        store: &HistoryStore,
        current: Location,
        copy: bool,
    ) -> Result<Outcome> {
        if !copy {
            return Ok(Outcome::Listed(format_history(store, &current, &self.marker)));
        }

        self.clipboard
            .set_text(&current)
            .map_err(|e| HistoryError::Clipboard(e.to_string()))
            .inspect_err(|e| warn!("{}", e))?;
        Ok(Outcome::Copied(current))
    }

    fn copy(&mut self, location: &str) -> bool {
        match self.clipboard.set_text(location) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", HistoryError::Clipboard(e.to_string()));
                false
            }
        }
    }
}
