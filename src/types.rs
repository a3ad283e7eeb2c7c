//! Core types for planar Voronoi computation.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A point in the plane.
///
/// This type provides a small `#[repr(C)]` representation with a stable layout.
/// It doubles as an input site (cell seed) and as a diagram vertex.
/// Coordinates are expected to be finite; [`compute`](crate::compute) rejects
/// NaN and infinity on input.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create from any type implementing `PositionLike`.
    #[inline]
    pub fn from_like<P: PositionLike>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }

    /// Convert to a glam vector.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Create from a glam vector.
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Euclidean distance to another position.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }
}

impl From<[f64; 2]> for Position {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for [f64; 2] {
    #[inline]
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl From<DVec2> for Position {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::from_dvec2(v)
    }
}

impl From<Position> for DVec2 {
    #[inline]
    fn from(p: Position) -> DVec2 {
        p.to_dvec2()
    }
}

/// Trait for types that can be used as input sites.
///
/// This allows zero-copy input from various math libraries.
pub trait PositionLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl PositionLike for Position {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl PositionLike for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl PositionLike for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl PositionLike for DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

/// An axis-aligned bounding rectangle.
///
/// The sweep itself does not need a bound; this is used to seed random site
/// generation and by callers that clip the unbounded outer cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Bottom-left corner.
    pub min: Position,
    /// Top-right corner.
    pub max: Position,
}

impl Bounds {
    /// Create a bounding rectangle from its corners.
    #[inline]
    pub const fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Returns true if `p` lies inside the rectangle (inclusive).
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
