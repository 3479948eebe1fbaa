//! Actions and the pending-action queue.
//!
//! ## Key Types
//!
//! - `GameAction`: closed union of every action this crate materializes
//! - `DamageInfo` / `DamageKind`: damage packets for the host pipeline
//! - `StrikeEffect`: cosmetic attack visual
//! - `ActionQueue` / `QueuePosition`: the pending sequence the host drains
//!
//! Cards never execute anything themselves - `play` only pushes actions
//! here, and the host runs them in queue order on its main thread.

pub mod action;
pub mod queue;

pub use action::{DamageInfo, DamageKind, GameAction, StrikeEffect};
pub use queue::{ActionQueue, QueuePosition};
