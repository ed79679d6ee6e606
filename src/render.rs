pub mod bitmap;
pub mod text;

use crate::foundation::{core::NormalizedPoints, error::PlotResult};

/// A consumer of a normalized point set.
///
/// Point `(x, y)` lands in column `x`, row `y` of whatever the renderer produces.
pub trait Renderer {
    type Output;

    fn render(&self, points: &NormalizedPoints) -> PlotResult<Self::Output>;
}
