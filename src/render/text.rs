use crate::{
    foundation::{
        core::{NormalizedPoints, Point},
        error::PlotResult,
    },
    render::Renderer,
    settings::PlotSettings,
};

/// Character-grid renderer: one glyph per cell, one string per row.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    settings: PlotSettings,
}

impl TextRenderer {
    pub fn new(settings: &PlotSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

impl Renderer for TextRenderer {
    type Output = Vec<String>;

    fn render(&self, points: &NormalizedPoints) -> PlotResult<Vec<String>> {
        self.settings.check_extent(points.width, points.height)?;

        let occupied = points.occupied();
        let rows: Vec<String> = (0..points.height)
            .map(|row| {
                (0..points.width)
                    .map(|col| {
                        if occupied.contains(&Point::new(i128::from(col), i128::from(row))) {
                            self.settings.filled_glyph
                        } else {
                            self.settings.blank_glyph
                        }
                    })
                    .collect::<String>()
            })
            .collect();
        Ok(rows)
    }
}

/// Render `points` as text rows with `settings`' glyphs.
pub fn render_text(points: &NormalizedPoints, settings: &PlotSettings) -> PlotResult<Vec<String>> {
    TextRenderer::new(settings).render(points)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
