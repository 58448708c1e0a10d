use crate::error::{Direction, HistoryError, Result};
use tracing::debug;

/// A remembered location: an absolute path as reported by the navigator.
pub type Location = String;

/// Upper bound on remembered entries, the current location included.
pub const MAX_HISTORY_SIZE: usize = 100;

/// A history mutation waiting for the navigation it describes to take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A fresh navigation to a location not taken from history.
    Record,
    Backward,
    Forward,
    /// A jump to the entry with this id, which is not the current one.
    ToId(usize),
}

/// A validated transition together with the location it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub transition: Transition,
    pub target: Location,
}

/// Backward and forward directory history for one shell session.
///
/// Ids form a single numbering over the backward stack (oldest first), the
/// current location, and the forward stack (nearest first). The current
/// location always has id `backward.len()`. Ids are never stored, they are
/// recomputed from the stack lengths on every query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    /// Visited before the current location, most recently left at the tail.
    backward: Vec<Location>,
    /// Left through backward moves, the next location at the head.
    forward: Vec<Location>,
}

impl HistoryStore {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from existing stacks, evicting the oldest entries
    /// when they do not fit.
    pub fn from_stacks(backward: Vec<Location>, forward: Vec<Location>) -> Self {
        let mut store = Self { backward, forward };
        store.evict_overflow();
        store.forward.truncate(MAX_HISTORY_SIZE - 1);
        store
    }

    pub fn backward(&self) -> &[Location] {
        &self.backward
    }

    pub fn forward(&self) -> &[Location] {
        &self.forward
    }

    /// Number of entries including the current location.
    pub fn len(&self) -> usize {
        self.backward.len() + self.forward.len() + 1
    }

    /// True when nothing but the current location is known.
    pub fn is_empty(&self) -> bool {
        self.backward.is_empty() && self.forward.is_empty()
    }

    /// Id of the current location.
    pub fn current_id(&self) -> usize {
        self.backward.len()
    }

    /// Returns the stored entry for `id`, or `None` for the current
    /// location and ids past the end.
    pub fn entry(&self, id: usize) -> Option<&Location> {
        let current = self.current_id();
        if id < current {
            self.backward.get(id)
        } else if id > current {
            self.forward.get(id - current - 1)
        } else {
            None
        }
    }

    /// Plans a move to the most recently left location.
    pub fn plan_backward(&self) -> Result<Plan> {
        self.backward
            .last()
            .map(|target| Plan {
                transition: Transition::Backward,
                target: target.clone(),
            })
            .ok_or(HistoryError::empty(Direction::Backward))
    }

    /// Plans a move to the next location in the forward stack.
    pub fn plan_forward(&self) -> Result<Plan> {
        self.forward
            .first()
            .map(|target| Plan {
                transition: Transition::Forward,
                target: target.clone(),
            })
            .ok_or(HistoryError::empty(Direction::Forward))
    }

    /// Plans a jump to `id`. Returns `Ok(None)` when `id` is the current
    /// location, which needs neither navigation nor mutation.
    pub fn plan_to_id(&self, id: usize) -> Result<Option<Plan>> {
        if id > MAX_HISTORY_SIZE - 1 {
            return Err(HistoryError::invalid(id));
        }
        if id == self.current_id() {
            return Ok(None);
        }

        match self.entry(id) {
            Some(target) => Ok(Some(Plan {
                transition: Transition::ToId(id),
                target: target.clone(),
            })),
            None => Err(HistoryError::invalid(id)),
        }
    }

    /// Applies `transition` now that the shell has left `old` behind.
    ///
    /// Validation is repeated here, so a transition that no longer fits the
    /// stacks fails without touching them.
    pub fn commit(&mut self, transition: Transition, old: Location) -> Result<()> {
        match transition {
            Transition::Record => self.record(old),
            Transition::Backward => {
                let target = self
                    .backward
                    .pop()
                    .ok_or(HistoryError::empty(Direction::Backward))?;
                self.forward.insert(0, old);
                debug!("history backward: {} -> {}", self.forward[0], target);
            }
            Transition::Forward => {
                if self.forward.is_empty() {
                    return Err(HistoryError::empty(Direction::Forward));
                }
                let target = self.forward.remove(0);
                debug!("history forward: {} -> {}", old, target);
                self.backward.push(old);
            }
            Transition::ToId(id) => self.jump(id, old)?,
        }
        Ok(())
    }

    /// Records a plain navigation away from `old`.
    ///
    /// Forward history is folded onto the tail of the backward stack, so a
    /// manual navigation never loses locations. The oldest entries are
    /// evicted when the history would exceed [`MAX_HISTORY_SIZE`].
    pub fn record_forward_move(&mut self, old: Location) {
        self.record(old);
    }

    /// Moves backward, leaving `old` at the head of the forward stack.
    pub fn go_backward(&mut self, old: Location) -> Result<Location> {
        let plan = self.plan_backward()?;
        self.commit(plan.transition, old)?;
        Ok(plan.target)
    }

    /// Moves forward, leaving `old` at the tail of the backward stack.
    pub fn go_forward(&mut self, old: Location) -> Result<Location> {
        let plan = self.plan_forward()?;
        self.commit(plan.transition, old)?;
        Ok(plan.target)
    }

    /// Jumps to `id`. Entries between the target and `old` end up in the
    /// stack on the far side of the target, nearest first.
    pub fn go_to_id(&mut self, id: usize, old: Location) -> Result<Location> {
        match self.plan_to_id(id)? {
            Some(plan) => {
                self.commit(plan.transition, old)?;
                Ok(plan.target)
            }
            None => Ok(old),
        }
    }

    /// Removes the single entry with `id`. The current location cannot be
    /// removed.
    pub fn remove_at(&mut self, id: usize) -> Result<Location> {
        if id > MAX_HISTORY_SIZE - 1 {
            return Err(HistoryError::invalid(id));
        }

        let current = self.current_id();
        let removed = if id == current {
            return Err(HistoryError::CurrentLocationProtected { id });
        } else if id < current {
            self.backward.remove(id)
        } else {
            let ndx = id - current - 1;
            if ndx >= self.forward.len() {
                return Err(HistoryError::invalid(id));
            }
            self.forward.remove(ndx)
        };

        debug!("history removed {}: {}", id, removed);
        Ok(removed)
    }

    /// Forgets every entry in both directions.
    pub fn clear(&mut self) {
        self.backward.clear();
        self.forward.clear();
        debug!("history cleared");
    }

    fn record(&mut self, old: Location) {
        debug!(
            "history record: {} (folding {} forward entries)",
            old,
            self.forward.len()
        );
        self.backward.push(old);
        self.backward.append(&mut self.forward);
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        let overflow = self.len().saturating_sub(MAX_HISTORY_SIZE);
        if overflow > 0 {
            let overflow = overflow.min(self.backward.len());
            let evicted: Vec<Location> = self.backward.drain(..overflow).collect();
            debug!("history evicted {:?}", evicted);
        }
    }

    fn jump(&mut self, id: usize, old: Location) -> Result<()> {
        let current = self.current_id();

        if id < current {
            // Everything after the target becomes forward history, followed
            // by the location being left.
            let mut between = self.backward.split_off(id);
            let target = between.remove(0);
            between.push(old);
            between.append(&mut self.forward);
            self.forward = between;
            debug!("history jump back to {}: {}", id, target);
        } else if id > current {
            let ndx = id - (current + 1);
            if ndx >= self.forward.len() {
                return Err(HistoryError::invalid(id));
            }
            let mut skipped: Vec<Location> = self.forward.drain(..=ndx).collect();
            let target = skipped.pop();
            self.backward.push(old);
            self.backward.append(&mut skipped);
            debug!("history jump ahead to {}: {:?}", id, target);
        } else {
            return Err(HistoryError::invalid(id));
        }

        Ok(())
    }
}
