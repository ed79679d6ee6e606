use crate::foundation::{
    core::{BoundingBox, NormalizedPoints, Point},
    error::{PlotError, PlotResult},
};

/// Translate `points` so the bounding box's minimum corner sits at the origin.
///
/// `width` counts cells along `x`, `height` along `y`. Normalizing an already
/// normalized set returns it unchanged.
#[tracing::instrument(level = "debug", skip(points), fields(points = points.len()))]
pub fn normalize(points: &[Point]) -> PlotResult<NormalizedPoints> {
    let bounds = BoundingBox::of(points).ok_or(PlotError::EmptyInput)?;
    let (w, h) = bounds.extent();
    let width = u32::try_from(w)
        .map_err(|_| PlotError::extent(format!("width {w} does not fit in a raster")))?;
    let height = u32::try_from(h)
        .map_err(|_| PlotError::extent(format!("height {h} does not fit in a raster")))?;

    // Offsets are bounded by the u32 extent checked above.
    let shifted = points
        .iter()
        .map(|p| Point::new(p.x - bounds.min_x, p.y - bounds.min_y))
        .collect();

    tracing::debug!(
        min_x = bounds.min_x,
        min_y = bounds.min_y,
        width,
        height,
        "normalized point set"
    );
    Ok(NormalizedPoints {
        points: shifted,
        width,
        height,
        source_bounds: bounds,
    })
}

#[cfg(test)]
#[path = "../tests/unit/normalize.rs"]
mod tests;
