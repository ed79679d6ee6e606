use std::collections::HashSet;

/// One decoded coordinate pair.
///
/// The dump calls the first component the row and the second the column, but every
/// renderer draws the first component on the horizontal axis. The fields are named
/// after where they end up on screen.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    pub x: i128,
    pub y: i128,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i128, y: i128) -> Self {
        Self { x, y }
    }
}

impl From<(i128, i128)> for Point {
    fn from((x, y): (i128, i128)) -> Self {
        Self { x, y }
    }
}

/// Points in decode order. Duplicates are kept.
pub type PointSet = Vec<Point>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub min_x: i128,
    pub min_y: i128,
    pub max_x: i128,
    pub max_y: i128,
}

impl BoundingBox {
    /// Bounds of `points`, or `None` when there is nothing to bound.
    pub fn of(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in rest {
            bb.min_x = bb.min_x.min(p.x);
            bb.min_y = bb.min_y.min(p.y);
            bb.max_x = bb.max_x.max(p.x);
            bb.max_y = bb.max_y.max(p.y);
        }
        Some(bb)
    }

    pub fn min(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn max(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Midpoint of the box; halves are kept, so `(-1, 0)..(0, 0)` centers on `-0.5`.
    pub fn center(self) -> (f64, f64) {
        (
            (self.min_x as f64 + self.max_x as f64) / 2.0,
            (self.min_y as f64 + self.max_y as f64) / 2.0,
        )
    }

    /// Cell counts along each axis (inclusive bounds).
    ///
    /// Saturates at `u128::MAX` when the box spans the whole `i128` range.
    pub fn extent(self) -> (u128, u128) {
        (
            self.max_x.abs_diff(self.min_x).saturating_add(1),
            self.max_y.abs_diff(self.min_y).saturating_add(1),
        )
    }
}

/// A point set translated so its bounding box starts at the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedPoints {
    pub points: PointSet,
    pub width: u32,
    pub height: u32,
    /// Bounds of the input before translation.
    pub source_bounds: BoundingBox,
}

impl NormalizedPoints {
    /// Set view used by the renderers; duplicate points collapse here.
    pub fn occupied(&self) -> HashSet<Point> {
        self.points.iter().copied().collect()
    }

    pub fn distinct_len(&self) -> usize {
        self.occupied().len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
