//! Placement of bubbles around the central portrait.
//!
//! The [`engines`] module holds the two strategies, concentric rings and an
//! outward spiral, behind the common [`PlacementEngine`] trait, plus the
//! [`EngineBuilder`] that configures them.

pub mod engines;

pub use engines::{EngineBuilder, PlacementEngine};
