//! Geometric primitives for bubble placement.
//!
//! # Overview
//!
//! - [`Point`] - A 2D offset or coordinate
//! - [`Size`] - Width and height dimensions of a container
//!
//! # Coordinate System
//!
//! Placements are expressed as offsets from the center of the container,
//! using the SVG convention for axis directions:
//!
//! ```text
//!          -Y
//!           ▲
//!           │
//!  -X ◄──(0,0)──► +X
//!           │
//!           ▼
//!          +Y
//! ```
//!
//! Angles are measured in radians from the +X axis, increasing clockwise on
//! screen (towards +Y).

/// A 2D point or offset in placement space.
///
/// # Examples
///
/// ```
/// # use aureole_core::geometry::Point;
/// let p = Point::new(10.0, 20.0).scale(0.5);
/// assert_eq!(p.x(), 5.0);
/// assert_eq!(p.y(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point at `radius` from the origin in the direction of `angle` (radians).
    ///
    /// # Examples
    ///
    /// ```
    /// # use aureole_core::geometry::Point;
    /// let p = Point::from_polar(10.0, 0.0);
    /// assert_eq!(p.x(), 10.0);
    /// assert_eq!(p.y(), 0.0);
    /// ```
    pub fn from_polar(radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: radius * cos,
            y: radius * sin,
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of a container with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the smaller of the two dimensions
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns the center point of a container of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn test_point_from_polar() {
        let right = Point::from_polar(5.0, 0.0);
        assert_eq!(right.x(), 5.0);
        assert_eq!(right.y(), 0.0);

        let down = Point::from_polar(5.0, FRAC_PI_2);
        assert!(down.x().abs() < 1e-5);
        assert!((down.y() - 5.0).abs() < 1e-5);

        let left = Point::from_polar(2.0, PI);
        assert!((left.x() + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_scale() {
        let p = Point::new(4.0, 6.0);
        assert_eq!(p.scale(0.5), Point::new(2.0, 3.0));
        assert_eq!(p.scale(0.0), Point::default());
    }

    #[test]
    fn test_size_min_dimension() {
        assert_eq!(Size::new(800.0, 600.0).min_dimension(), 600.0);
        assert_eq!(Size::new(300.0, 900.0).min_dimension(), 300.0);
    }

    #[test]
    fn test_size_center() {
        let center = Size::new(400.0, 200.0).center();
        assert_eq!(center, Point::new(200.0, 100.0));
    }
}
