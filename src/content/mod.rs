//! Sample card content built on the descriptor toolkit.
//!
//! Not part of the toolkit proper - this is the reference content pack
//! used by the integration tests and by anyone learning the builder.

pub mod starter;
