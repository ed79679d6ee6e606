use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{PlotError, PlotResult};

/// Rendering knobs shared by the text and bitmap renderers.
///
/// Loaded from JSON with every field optional; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotSettings {
    /// Glyph for occupied cells in the text grid.
    pub filled_glyph: char,
    /// Glyph for empty cells. Full-width so cells stay roughly square.
    pub blank_glyph: char,
    /// RGB of plotted pixels.
    pub foreground: [u8; 3],
    /// RGB the raster is cleared to.
    pub background: [u8; 3],
    /// Largest width or height either renderer will allocate. Unlimited when unset.
    pub max_extent: Option<u32>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            filled_glyph: '\u{25A0}',
            blank_glyph: '\u{3000}',
            foreground: [255, 255, 255],
            background: [0, 0, 0],
            max_extent: None,
        }
    }
}

impl PlotSettings {
    pub fn from_json_file(path: &Path) -> PlotResult<Self> {
        let f = File::open(path).map_err(|e| PlotError::io(path, e))?;
        let settings: PlotSettings = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse settings JSON '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.max_extent == Some(0) {
            return Err(PlotError::validation("max_extent must be > 0"));
        }
        if self.filled_glyph == self.blank_glyph {
            return Err(PlotError::validation(
                "filled_glyph and blank_glyph must differ",
            ));
        }
        Ok(())
    }

    /// Reject extents larger than `max_extent`, if one is set, before anything is allocated.
    pub fn check_extent(&self, width: u32, height: u32) -> PlotResult<()> {
        match self.max_extent {
            Some(max) if width > max || height > max => Err(PlotError::extent(format!(
                "{width}x{height} exceeds max_extent {max}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
