//! The pending-action queue.
//!
//! The host's turn engine owns exactly one of these per combat and drains
//! it from the front. Cards interact with it two ways only: insert at the
//! front (resolves next) or at the back (resolves after everything already
//! queued).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::action::GameAction;

/// Where an action is inserted into the pending queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueuePosition {
    /// Front of the queue; resolves before everything already pending.
    Top,
    /// Back of the queue; resolves in arrival order.
    #[default]
    Bottom,
}

/// Ordered queue of actions awaiting execution.
///
/// ## Example
///
/// ```
/// use cardsmith::actions::{ActionQueue, GameAction};
///
/// let mut queue = ActionQueue::new();
/// queue.add_to_bottom(GameAction::ExhaustAllEthereal);
/// assert_eq!(queue.len(), 1);
/// assert_eq!(queue.pop_next(), Some(GameAction::ExhaustAllEthereal));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: VecDeque<GameAction>,
}

impl ActionQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an action at the front of the queue.
    pub fn add_to_top(&mut self, action: GameAction) {
        self.pending.push_front(action);
    }

    /// Insert an action at the back of the queue.
    pub fn add_to_bottom(&mut self, action: GameAction) {
        self.pending.push_back(action);
    }

    /// Insert an action at the given position.
    pub fn insert(&mut self, position: QueuePosition, action: GameAction) {
        match position {
            QueuePosition::Top => self.add_to_top(action),
            QueuePosition::Bottom => self.add_to_bottom(action),
        }
    }

    /// Take the next action to execute, front first.
    pub fn pop_next(&mut self) -> Option<GameAction> {
        self.pending.pop_front()
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate pending actions in execution order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &GameAction> {
        self.pending.iter()
    }

    /// Drop all pending actions.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
