//! Spiral placement engine
//!
//! Items are placed one after another along an outward spiral. The angle
//! advances by a fixed step per item while the radius grows by a nominal step
//! scaled with a random jitter factor, which gives the arrangement an uneven,
//! organic look. Unlike the ring engine there is no size search and no bounds
//! check: large item counts spill past the container.

use log::debug;
use rand::{Rng, RngCore};

use aureole_core::plan::{Placement, PlacementRequest, SpiralPlacement, SpiralPoint};

use crate::{config::SpiralConfig, layout::engines::PlacementEngine};

/// Spiral layout engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: SpiralConfig,
}

impl Engine {
    /// Create a new spiral layout engine
    pub fn new(config: SpiralConfig) -> Self {
        Self { config }
    }

    /// Place `item_count` items along the spiral, drawing jitter from `rng`.
    pub fn spiral(&self, item_count: usize, rng: &mut dyn RngCore) -> SpiralPlacement {
        let config = &self.config;
        let radius_step = config.radius_step.max(0.0);

        let mut radius = config.start_radius;
        let points = (0..item_count)
            .map(|index| {
                let point = SpiralPoint::new(config.angle_step * index as f32, radius);
                radius += radius_step * self.jitter(rng);
                point
            })
            .collect();

        SpiralPlacement::new(config.bubble_size, points)
    }

    /// Draw a jitter factor from `[jitter_min, jitter_max)`.
    ///
    /// An empty range yields `jitter_min`; the factor is never negative.
    fn jitter(&self, rng: &mut dyn RngCore) -> f32 {
        let (min, max) = (self.config.jitter_min, self.config.jitter_max);
        let factor = if min < max {
            rng.random_range(min..max)
        } else {
            min
        };
        factor.max(0.0)
    }
}

impl PlacementEngine for Engine {
    fn place(&self, request: &PlacementRequest, rng: &mut dyn RngCore) -> Placement {
        let spiral = self.spiral(request.item_count(), rng);
        debug!(
            item_count = spiral.points().len(),
            outer_radius = spiral.points().last().map_or(0.0, SpiralPoint::radius);
            "Placed items along spiral"
        );
        Placement::Spiral(spiral)
    }
}
