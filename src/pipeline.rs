use std::path::Path;

use image::RgbImage;

use crate::{
    decode::decode,
    foundation::{
        core::{BoundingBox, NormalizedPoints},
        error::PlotResult,
    },
    normalize::normalize,
    output::save_bitmap,
    render::{Renderer, bitmap::BitmapRenderer, text::TextRenderer},
    settings::PlotSettings,
};

/// What a dump contains, independent of how it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlotSummary {
    pub points: usize,
    pub distinct_points: usize,
    pub bounds: BoundingBox,
    pub center: (f64, f64),
    pub width: u32,
    pub height: u32,
}

impl PlotSummary {
    fn of(n: &NormalizedPoints) -> Self {
        Self {
            points: n.points.len(),
            distinct_points: n.distinct_len(),
            bounds: n.source_bounds,
            center: n.source_bounds.center(),
            width: n.width,
            height: n.height,
        }
    }
}

fn decode_normalized(raw: &str) -> PlotResult<NormalizedPoints> {
    let points = decode(raw)?;
    normalize(&points)
}

/// Decode + normalize + render a dump as text rows.
pub fn plot_text(raw: &str, settings: &PlotSettings) -> PlotResult<Vec<String>> {
    let n = decode_normalized(raw)?;
    TextRenderer::new(settings).render(&n)
}

/// Decode + normalize + render a dump as an in-memory raster.
pub fn plot_bitmap(raw: &str, settings: &PlotSettings) -> PlotResult<RgbImage> {
    let n = decode_normalized(raw)?;
    BitmapRenderer::new(settings).render(&n)
}

/// Render a dump and save it to `out`. Nothing is written unless every stage succeeds.
#[tracing::instrument(skip(raw, settings), fields(out = %out.display()))]
pub fn plot_to_file(raw: &str, out: &Path, settings: &PlotSettings) -> PlotResult<PlotSummary> {
    let n = decode_normalized(raw)?;
    let img = BitmapRenderer::new(settings).render(&n)?;
    save_bitmap(&img, out)?;
    tracing::info!(width = n.width, height = n.height, "plot written");
    Ok(PlotSummary::of(&n))
}

/// Bounds, center and counts of a dump without rendering it.
pub fn summarize(raw: &str) -> PlotResult<PlotSummary> {
    decode_normalized(raw).map(|n| PlotSummary::of(&n))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
