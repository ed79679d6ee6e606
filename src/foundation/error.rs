use std::path::{Path, PathBuf};

/// Convenience result type used across galaxy-plot.
pub type PlotResult<T> = Result<T, PlotError>;

/// Top-level error taxonomy used by the decode/normalize/render APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// The dump could not be turned into coordinate pairs.
    #[error("decode error: {0}")]
    Decode(String),

    /// Decoding succeeded but produced no points to bound.
    #[error("empty input: no points to plot")]
    EmptyInput,

    /// The normalized extent cannot be rasterized.
    #[error("extent error: {0}")]
    Extent(String),

    /// Output path names a format without a lossless encoder.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Invalid user-provided settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reading or writing a file failed.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        /// File the operation was targeting.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotError {
    /// Build a [`PlotError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PlotError::Extent`] value.
    pub fn extent(msg: impl Into<String>) -> Self {
        Self::Extent(msg.into())
    }

    /// Build a [`PlotError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`PlotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotError::Io`] value for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
