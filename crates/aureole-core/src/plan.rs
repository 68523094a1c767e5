//! Placement requests and the plans computed for them.
//!
//! A [`PlacementRequest`] describes the container, the number of items to
//! place and the radius of the central exclusion zone. Layout engines answer
//! with a [`Placement`]: either a [`LayoutPlan`] of concentric rings or a
//! [`SpiralPlacement`]. All offsets are relative to the container center.

use std::f32::consts::TAU;

use crate::geometry::{Point, Size};

/// Input to a placement computation.
///
/// Dimensions that are negative or not finite are treated as zero, so the
/// engines always operate on well-formed numbers.
///
/// # Examples
///
/// ```
/// # use aureole_core::{geometry::Size, plan::PlacementRequest};
/// let request = PlacementRequest::new(Size::new(400.0, 300.0), 12, 80.0);
/// assert_eq!(request.item_count(), 12);
///
/// let degenerate = PlacementRequest::new(Size::new(f32::NAN, -5.0), 3, -1.0);
/// assert_eq!(degenerate.container(), Size::new(0.0, 0.0));
/// assert_eq!(degenerate.center_radius(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    container: Size,
    item_count: usize,
    center_radius: f32,
}

impl PlacementRequest {
    /// Creates a new request.
    ///
    /// # Arguments
    ///
    /// * `container` - Size of the element the bubbles are drawn in.
    /// * `item_count` - Number of bubbles to place.
    /// * `center_radius` - Radius of the central portrait the rings must clear.
    pub fn new(container: Size, item_count: usize, center_radius: f32) -> Self {
        Self {
            container: Size::new(sanitize(container.width()), sanitize(container.height())),
            item_count,
            center_radius: sanitize(center_radius),
        }
    }

    /// Returns the container size
    pub fn container(&self) -> Size {
        self.container
    }

    /// Returns the number of items to place
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the radius of the center exclusion zone
    pub fn center_radius(&self) -> f32 {
        self.center_radius
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// One concentric ring of bubbles.
///
/// `capacity` is how many bubbles of `bubble_size` fit on the ring, `count` is
/// how many were actually assigned to it. Only the outermost ring of a plan
/// may have `count < capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct RingDescriptor {
    index: usize,
    radius: f32,
    capacity: usize,
    count: usize,
    bubble_size: f32,
    angular_velocity: f32,
}

impl RingDescriptor {
    /// Creates a new ring descriptor.
    ///
    /// `angular_velocity` is in degrees per second; a positive value spins
    /// clockwise on screen, a negative one counter-clockwise.
    pub fn new(
        index: usize,
        radius: f32,
        capacity: usize,
        count: usize,
        bubble_size: f32,
        angular_velocity: f32,
    ) -> Self {
        Self {
            index,
            radius,
            capacity,
            count,
            bubble_size,
            angular_velocity,
        }
    }

    /// Position of the ring in its plan, innermost is 0
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items assigned to this ring
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn bubble_size(&self) -> f32 {
        self.bubble_size
    }

    /// Signed spin rate in degrees per second
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Returns `true` if the ring spins clockwise
    pub fn is_clockwise(&self) -> bool {
        self.angular_velocity >= 0.0
    }

    /// Offsets of the assigned slots, evenly spaced around the ring starting at angle zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use aureole_core::plan::RingDescriptor;
    /// let ring = RingDescriptor::new(0, 100.0, 8, 4, 40.0, 80.0);
    /// let slots = ring.slot_offsets();
    /// assert_eq!(slots.len(), 4);
    /// assert_eq!(slots[0].x(), 100.0);
    /// ```
    pub fn slot_offsets(&self) -> Vec<Point> {
        if self.count == 0 {
            return Vec::new();
        }

        let step = TAU / self.count as f32;
        (0..self.count)
            .map(|slot| Point::from_polar(self.radius, step * slot as f32))
            .collect()
    }
}

/// How the bubble size of a [`LayoutPlan`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOrigin {
    /// The size search found a size for which every item fits.
    Searched,
    /// No searched size fit; the plan was built from the fallback size and may
    /// overflow the container or leave items without a slot.
    Fallback,
}

/// A complete ring layout: rings ordered innermost first plus the chosen bubble size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    bubble_size: u32,
    rings: Vec<RingDescriptor>,
    origin: PlanOrigin,
    evaluations: usize,
}

impl LayoutPlan {
    /// Creates a plan.
    ///
    /// # Arguments
    ///
    /// * `bubble_size` - Base bubble size the rings were built from.
    /// * `rings` - Rings ordered innermost first.
    /// * `origin` - Whether the size came from the search or the fallback.
    /// * `evaluations` - Number of candidate sizes the search evaluated.
    pub fn new(
        bubble_size: u32,
        rings: Vec<RingDescriptor>,
        origin: PlanOrigin,
        evaluations: usize,
    ) -> Self {
        Self {
            bubble_size,
            rings,
            origin,
            evaluations,
        }
    }

    pub fn bubble_size(&self) -> u32 {
        self.bubble_size
    }

    pub fn rings(&self) -> &[RingDescriptor] {
        &self.rings
    }

    pub fn origin(&self) -> PlanOrigin {
        self.origin
    }

    /// Number of candidate sizes evaluated by the search, excluding the fallback
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Returns `true` if the bubble size was found by the search
    pub fn fits(&self) -> bool {
        self.origin == PlanOrigin::Searched
    }

    /// Sum of all ring capacities
    pub fn total_capacity(&self) -> usize {
        self.rings.iter().map(RingDescriptor::capacity).sum()
    }

    /// Number of items assigned to a ring
    pub fn placed(&self) -> usize {
        self.rings.iter().map(RingDescriptor::count).sum()
    }
}

/// A single item position along a spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPoint {
    angle: f32,
    radius: f32,
}

impl SpiralPoint {
    pub fn new(angle: f32, radius: f32) -> Self {
        Self { angle, radius }
    }

    /// Accumulated angle in radians; not wrapped
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Offset from the center
    pub fn offset(&self) -> Point {
        Point::from_polar(self.radius, self.angle)
    }
}

/// Items placed one after another along an outward spiral.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPlacement {
    bubble_size: f32,
    points: Vec<SpiralPoint>,
}

impl SpiralPlacement {
    pub fn new(bubble_size: f32, points: Vec<SpiralPoint>) -> Self {
        Self {
            bubble_size,
            points,
        }
    }

    pub fn bubble_size(&self) -> f32 {
        self.bubble_size
    }

    pub fn points(&self) -> &[SpiralPoint] {
        &self.points
    }
}

/// Result of a placement computation, one variant per strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Rings(LayoutPlan),
    Spiral(SpiralPlacement),
}

impl Placement {
    /// Number of items that received a position
    pub fn item_count(&self) -> usize {
        match self {
            Self::Rings(plan) => plan.placed(),
            Self::Spiral(spiral) => spiral.points().len(),
        }
    }

    /// Base bubble size of the placement
    pub fn bubble_size(&self) -> f32 {
        match self {
            Self::Rings(plan) => plan.bubble_size() as f32,
            Self::Spiral(spiral) => spiral.bubble_size(),
        }
    }

    /// Every occupied slot as `(offset, bubble size)`, in item order.
    pub fn slots(&self) -> Vec<(Point, f32)> {
        match self {
            Self::Rings(plan) => plan
                .rings()
                .iter()
                .flat_map(|ring| {
                    let size = ring.bubble_size();
                    ring.slot_offsets().into_iter().map(move |p| (p, size))
                })
                .collect(),
            Self::Spiral(spiral) => spiral
                .points()
                .iter()
                .map(|point| (point.offset(), spiral.bubble_size()))
                .collect(),
        }
    }
}
