//! Layout engine factory module
//!
//! This module provides the [`PlacementEngine`] trait implemented by each
//! placement strategy and the [`EngineBuilder`] that hands out a configured
//! engine for a [`LayoutStrategy`].

pub mod rings;
pub mod spiral;

use rand::RngCore;

use aureole_core::{
    plan::{Placement, PlacementRequest},
    strategy::LayoutStrategy,
};

use crate::config::{LayoutConfig, RingConfig, SpiralConfig};

/// Trait defining the interface for placement engines
pub trait PlacementEngine {
    /// Calculate a placement for the request.
    ///
    /// Engines never fail: degenerate requests still produce a structurally
    /// valid placement. `rng` is the only source of randomness an engine may
    /// draw from, so a seeded generator makes the result reproducible.
    fn place(&self, request: &PlacementRequest, rng: &mut dyn RngCore) -> Placement;
}

/// Builder for creating and configuring placement engines.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    rings: RingConfig,
    spiral: SpiralConfig,
}

impl EngineBuilder {
    /// Create a new engine builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder carrying the tuning of both strategies from `config`
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            rings: config.rings().clone(),
            spiral: config.spiral().clone(),
        }
    }

    /// Set the tuning of the ring engine
    pub fn with_ring_config(mut self, config: RingConfig) -> Self {
        self.rings = config;
        self
    }

    /// Set the tuning of the spiral engine
    pub fn with_spiral_config(mut self, config: SpiralConfig) -> Self {
        self.spiral = config;
        self
    }

    /// Build the engine for the given strategy
    pub fn build(&self, strategy: LayoutStrategy) -> Box<dyn PlacementEngine> {
        match strategy {
            LayoutStrategy::Rings => Box::new(rings::Engine::new(self.rings.clone())),
            LayoutStrategy::Spiral => Box::new(spiral::Engine::new(self.spiral.clone())),
        }
    }
}
