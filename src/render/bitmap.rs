use image::{Rgb, RgbImage};

use crate::{
    foundation::{
        core::NormalizedPoints,
        error::{PlotError, PlotResult},
    },
    render::Renderer,
    settings::PlotSettings,
};

/// Raster renderer: a `width x height` RGB8 image with one pixel per point.
#[derive(Clone, Debug)]
pub struct BitmapRenderer {
    settings: PlotSettings,
}

impl BitmapRenderer {
    pub fn new(settings: &PlotSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

impl Renderer for BitmapRenderer {
    type Output = RgbImage;

    fn render(&self, points: &NormalizedPoints) -> PlotResult<RgbImage> {
        self.settings.check_extent(points.width, points.height)?;

        let mut img =
            RgbImage::from_pixel(points.width, points.height, Rgb(self.settings.background));
        let fg = Rgb(self.settings.foreground);
        for p in &points.points {
            let (x, y) = match (u32::try_from(p.x), u32::try_from(p.y)) {
                (Ok(x), Ok(y)) if x < points.width && y < points.height => (x, y),
                _ => {
                    return Err(PlotError::extent(format!(
                        "point ({}, {}) lies outside the {}x{} raster",
                        p.x, p.y, points.width, points.height
                    )));
                }
            };
            img.put_pixel(x, y, fg);
        }
        Ok(img)
    }
}

/// Render `points` into a fresh raster using `settings`' colors.
pub fn render_bitmap(points: &NormalizedPoints, settings: &PlotSettings) -> PlotResult<RgbImage> {
    BitmapRenderer::new(settings).render(points)
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
