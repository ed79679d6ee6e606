//! galaxy-plot turns an interpreter state dump into a picture.
//!
//! The dump is a nested pair/list value printed as text, e.g.
//! `(0, ((1, nil), ((((0, -3), ((-1, -3), nil)), nil), nil)))`. Its nesting is
//! discarded; what remains is a flat stream of integers read two at a time as points.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `&str -> PointSet` ([`decode`])
//! 2. **Normalize**: `PointSet -> NormalizedPoints`, minimum corner at the origin ([`normalize`])
//! 3. **Render**: either [`TextRenderer`] (glyph rows) or [`BitmapRenderer`] (RGB8 raster)
//! 4. **Save** (bitmap only): [`save_bitmap`] picks a lossless codec from the extension
//!
//! [`plot_text`], [`plot_bitmap`] and [`plot_to_file`] run the whole chain in one call.
#![forbid(unsafe_code)]

mod decode;
mod foundation;
mod normalize;
mod output;
mod pipeline;
mod render;
mod settings;

pub use decode::{decode, tokenize};
pub use foundation::core::{BoundingBox, NormalizedPoints, Point, PointSet};
pub use foundation::error::{PlotError, PlotResult};
pub use normalize::normalize;
pub use output::{encode_bitmap, format_for_path, save_bitmap};
pub use pipeline::{PlotSummary, plot_bitmap, plot_text, plot_to_file, summarize};
pub use render::Renderer;
pub use render::bitmap::{BitmapRenderer, render_bitmap};
pub use render::text::{TextRenderer, render_text};
pub use settings::PlotSettings;
