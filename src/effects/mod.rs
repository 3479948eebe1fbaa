//! Status effects and pluggable effect-action specs.
//!
//! ## Key Types
//!
//! - `StatusEffect` / `Power`: the five named effects and their
//!   materialized form
//! - `ActionSpec`: capability to build one action at play time
//! - `ApplyEffectSpec` / `Magnitude`: the stock spec applying a status
//!   effect with a fixed or magic-number stack count
//!
//! ## Design Philosophy
//!
//! The effect categories are a closed set, so `Power` is a tagged union
//! with exhaustiveness-checked dispatch. The spec seam is the opposite:
//! content packs attach behavior this crate has never heard of, so
//! `ActionSpec` is a trait rather than an enum.

pub mod power;
pub mod spec;

pub use power::{Power, StatusEffect};
pub use spec::{ActionSpec, ApplyEffectSpec, Magnitude};
