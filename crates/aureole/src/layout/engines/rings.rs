//! Concentric ring placement engine
//!
//! Bubbles are arranged on rings around the center exclusion zone. The
//! engine searches for the largest bubble size that still lets every item
//! find a slot inside the container:
//!
//! 1. [`ring_capacity`] decides how many bubbles fit on one ring.
//! 2. [`Engine::build_rings`] stacks rings outward for a candidate size and
//!    reports whether all items were placed before the edge was reached.
//! 3. [`Engine::search`] binary-searches the candidate size using
//!    `build_rings` as the fit predicate.
//!
//! When no candidate fits, the plan built from the configured fallback size
//! is returned anyway, so callers always have something to render.

use std::f32::consts::TAU;

use log::{debug, trace, warn};
use rand::RngCore;

use aureole_core::plan::{LayoutPlan, Placement, PlacementRequest, PlanOrigin, RingDescriptor};

use crate::{config::RingConfig, layout::engines::PlacementEngine};

/// Smallest number of slots a ring is given once it exists.
pub const MIN_RING_CAPACITY: usize = 4;

/// Number of bubbles of `bubble_size` that fit around a ring of `radius`.
///
/// Each bubble reserves `bubble_size * angular_spacing` of arc length. The
/// result never drops below [`MIN_RING_CAPACITY`], even when that makes the
/// bubbles of a very small ring overlap.
///
/// # Examples
///
/// ```
/// # use aureole::layout::engines::rings::ring_capacity;
/// // 2π·100 / (40·1.2) ≈ 13.09
/// assert_eq!(ring_capacity(100.0, 40.0, 1.2), 13);
/// // Too small for four bubbles, but a ring always holds four
/// assert_eq!(ring_capacity(10.0, 40.0, 1.2), 4);
/// ```
pub fn ring_capacity(radius: f32, bubble_size: f32, angular_spacing: f32) -> usize {
    let circumference = TAU * radius;
    let pitch = bubble_size * angular_spacing;

    if !circumference.is_finite() || !pitch.is_finite() || circumference <= 0.0 || pitch <= 0.0 {
        return MIN_RING_CAPACITY;
    }

    ((circumference / pitch).floor() as usize).max(MIN_RING_CAPACITY)
}

/// Rings stacked for one candidate bubble size.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSet {
    /// Whether every item was placed before the maximum radius was exceeded.
    pub feasible: bool,
    /// The rings that were built, innermost first.
    pub rings: Vec<RingDescriptor>,
}

/// Ring layout engine
///
/// Holds the constants of the capacity function, ring builder and size search.
/// The engine is stateless between calls; every placement depends only on
/// the request.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: RingConfig,
}

impl Engine {
    /// Create a new ring layout engine
    pub fn new(config: RingConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Largest radius a ring may sit at for the given request.
    pub fn max_radius(&self, request: &PlacementRequest) -> f32 {
        request.container().min_dimension() / 2.0 - self.config.edge_padding
    }

    /// Signed spin rate for the ring at `index`.
    ///
    /// Even rings spin clockwise, odd rings counter-clockwise. The magnitude
    /// drops by `spin_step` per ring but never below `min_spin`.
    pub fn spin_rate(&self, index: usize) -> f32 {
        let magnitude =
            (self.config.base_spin - self.config.spin_step * index as f32).max(self.config.min_spin);
        if index % 2 == 0 { magnitude } else { -magnitude }
    }

    /// Stack rings outward for a candidate bubble size.
    ///
    /// The first ring clears the center exclusion zone by `inner_gap`. Each
    /// subsequent ring uses a slightly smaller bubble and sits further out by
    /// at least `min_ring_gap`. Rings are added until all items are assigned
    /// or the next ring would lie beyond [`Self::max_radius`].
    pub fn build_rings(&self, request: &PlacementRequest, bubble_size: f32) -> RingSet {
        let config = &self.config;
        let max_radius = self.max_radius(request);

        let mut rings = Vec::new();
        let mut remaining = request.item_count();
        let mut radius = request.center_radius() + bubble_size / 2.0 + config.inner_gap;

        while remaining > 0 && radius <= max_radius {
            let index = rings.len();
            let ring_size = (bubble_size * (1.0 - config.shrink_per_ring * index as f32))
                .max(config.min_bubble_size);
            let capacity = ring_capacity(radius, ring_size, config.angular_spacing);
            let count = capacity.min(remaining);

            trace!(index, radius, ring_size, capacity, count; "Built ring");

            rings.push(RingDescriptor::new(
                index,
                radius,
                capacity,
                count,
                ring_size,
                self.spin_rate(index),
            ));

            remaining -= count;
            radius += (ring_size * config.ring_spacing).max(config.min_ring_gap);
        }

        RingSet {
            feasible: remaining == 0,
            rings,
        }
    }

    /// Find the largest bubble size for which every item fits.
    ///
    /// Binary search over integer sizes between `min_size` and
    /// `max(min_upper_size, min(width, height) / size_divisor)`, evaluating at
    /// most `max_iterations` candidates. Bounds move `search_step` past the
    /// tested size so plateaus in the predicate cannot stall the search.
    pub fn search(&self, request: &PlacementRequest) -> LayoutPlan {
        let config = &self.config;
        let step = i64::from(config.search_step);
        let scaled_upper = (request.container().min_dimension() / config.size_divisor).floor();

        let mut low = i64::from(config.min_size);
        let mut high = i64::from(config.min_upper_size.max(scaled_upper as u32));
        let mut best: Option<(u32, Vec<RingDescriptor>)> = None;
        let mut evaluations = 0;

        while evaluations < config.max_iterations && low <= high {
            let mid = (low + high) / 2;
            let attempt = self.build_rings(request, mid as f32);
            evaluations += 1;

            debug!(
                size = mid,
                feasible = attempt.feasible,
                rings = attempt.rings.len();
                "Evaluated bubble size"
            );

            if attempt.feasible {
                best = Some((mid as u32, attempt.rings));
                low = mid + step;
            } else {
                high = mid - step;
            }
        }

        match best {
            Some((bubble_size, rings)) => {
                LayoutPlan::new(bubble_size, rings, PlanOrigin::Searched, evaluations)
            }
            None => {
                warn!(
                    item_count = request.item_count(),
                    fallback_size = config.fallback_size;
                    "No bubble size fits, using fallback size"
                );
                let fallback = self.build_rings(request, config.fallback_size as f32);
                LayoutPlan::new(
                    config.fallback_size,
                    fallback.rings,
                    PlanOrigin::Fallback,
                    evaluations,
                )
            }
        }
    }
}

impl PlacementEngine for Engine {
    fn place(&self, request: &PlacementRequest, _rng: &mut dyn RngCore) -> Placement {
        Placement::Rings(self.search(request))
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use aureole_core::geometry::Size;

    use super::*;

    fn request_strategy() -> impl Strategy<Value = PlacementRequest> {
        (200.0f32..2000.0, 200.0f32..2000.0, 0usize..400, 0.0f32..150.0).prop_map(
            |(width, height, items, center)| {
                PlacementRequest::new(Size::new(width, height), items, center)
            },
        )
    }

    /// A plan either holds every item or came from the fallback, which the
    /// fit predicate rejects.
    fn check_plan_covers_items(request: PlacementRequest) -> Result<(), TestCaseError> {
        let engine = Engine::default();
        let plan = engine.search(&request);

        match plan.origin() {
            PlanOrigin::Searched => {
                prop_assert!(plan.total_capacity() >= request.item_count());
                prop_assert_eq!(plan.placed(), request.item_count());
            }
            PlanOrigin::Fallback => {
                let set = engine.build_rings(&request, plan.bubble_size() as f32);
                prop_assert!(!set.feasible);
            }
        }
        Ok(())
    }

    /// Ring radii increase strictly from the inside out.
    fn check_radii_strictly_increase(request: PlacementRequest) -> Result<(), TestCaseError> {
        let plan = Engine::default().search(&request);
        for pair in plan.rings().windows(2) {
            prop_assert!(pair[0].radius() < pair[1].radius());
        }
        Ok(())
    }

    /// The search stays within its evaluation budget.
    fn check_search_budget(request: PlacementRequest) -> Result<(), TestCaseError> {
        let plan = Engine::default().search(&request);
        prop_assert!(plan.evaluations() <= 18);
        prop_assert!(plan.evaluations() >= 1);
        Ok(())
    }

    /// Every ring has at least one item and never more than its capacity.
    fn check_ring_counts(request: PlacementRequest) -> Result<(), TestCaseError> {
        let plan = Engine::default().search(&request);
        for ring in plan.rings() {
            prop_assert!(ring.count() >= 1);
            prop_assert!(ring.count() <= ring.capacity());
            prop_assert!(ring.capacity() >= MIN_RING_CAPACITY);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn ring_capacity_is_pure_and_floored(
            radius in 0.0f32..3000.0,
            size in 1.0f32..300.0,
        ) {
            let first = ring_capacity(radius, size, 1.2);
            prop_assert_eq!(first, ring_capacity(radius, size, 1.2));
            prop_assert!(first >= MIN_RING_CAPACITY);
        }

        #[test]
        fn plan_covers_items(request in request_strategy()) {
            check_plan_covers_items(request)?;
        }

        #[test]
        fn radii_strictly_increase(request in request_strategy()) {
            check_radii_strictly_increase(request)?;
        }

        #[test]
        fn search_budget(request in request_strategy()) {
            check_search_budget(request)?;
        }

        #[test]
        fn ring_counts(request in request_strategy()) {
            check_ring_counts(request)?;
        }
    }
}
