use std::{
    ffi::{OsStr, OsString},
    fs::File,
    io::{Cursor, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{ImageFormat, RgbImage};

use crate::foundation::error::{PlotError, PlotResult};

/// Lossless formats a plot may be saved as.
const LOSSLESS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Pnm,
    ImageFormat::Tiff,
    ImageFormat::Tga,
    ImageFormat::Qoi,
];

/// Pick the output format from `path`'s extension. No extension means PNG.
pub fn format_for_path(path: &Path) -> PlotResult<ImageFormat> {
    let Some(ext) = path.extension() else {
        return Ok(ImageFormat::Png);
    };
    let fmt = ImageFormat::from_extension(ext);
    let ext = ext.to_string_lossy();
    match fmt {
        Some(f) if LOSSLESS.contains(&f) => Ok(f),
        Some(f) => Err(PlotError::unsupported_format(format!(
            "'{ext}' ({f:?}) is not a lossless format"
        ))),
        None => Err(PlotError::unsupported_format(format!(
            "unknown extension '{ext}'"
        ))),
    }
}

pub fn encode_bitmap(img: &RgbImage, format: ImageFormat) -> PlotResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format)
        .with_context(|| format!("encode {format:?}"))?;
    Ok(buf)
}

/// Encode `img` and write it to `path`.
///
/// The whole file is encoded in memory, written to a hidden sibling and renamed into
/// place, so `path` either holds a complete image or is left untouched.
#[tracing::instrument(level = "debug", skip(img), fields(w = img.width(), h = img.height()))]
pub fn save_bitmap(img: &RgbImage, path: &Path) -> PlotResult<()> {
    let format = format_for_path(path)?;
    let bytes = encode_bitmap(img, format)?;

    let tmp = temp_sibling(path);
    if let Err(e) = write_all_synced(&tmp, &bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(PlotError::io(path, e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(PlotError::io(path, e));
    }

    tracing::debug!(bytes = bytes.len(), ?format, path = %path.display(), "wrote bitmap");
    Ok(())
}

fn write_all_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new("plot")));
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
