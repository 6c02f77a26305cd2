//! Rendering backends for entity graphs.
//!
//! The [`Renderer`] trait is the seam between the entity graph and a
//! concrete rendering engine: a backend receives a finished
//! [`EntityGraph`](crate::structure::EntityGraph) plus [`RenderOptions`]
//! and produces one image file on disk. [`graphviz::GraphvizRenderer`] is
//! the shipped implementation.

pub mod graphviz;

use std::{
    fmt, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

use crate::structure::EntityGraph;

/// A rendering backend producing one image file from an entity graph.
pub trait Renderer {
    /// Renders the graph to the output path named in `options`.
    ///
    /// Returns the path of the written image file.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the rendering engine is unavailable or the
    /// output cannot be written.
    fn render(&self, graph: &EntityGraph, options: &RenderOptions) -> Result<PathBuf, Error>;
}

/// Rendering errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Supported output image formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(format!("unsupported image format '{other}'")),
        }
    }
}

/// Options for a single render operation.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    output: PathBuf,
    format: ImageFormat,
    keep_source: bool,
}

impl RenderOptions {
    /// Creates render options for the given output path with defaults:
    /// PNG format, intermediate source removed.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            format: ImageFormat::default(),
            keep_source: false,
        }
    }

    /// Sets the output image format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Keeps the intermediate DOT source file next to the output instead
    /// of discarding it.
    pub fn with_keep_source(mut self, keep_source: bool) -> Self {
        self.keep_source = keep_source;
        self
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the output image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns whether the intermediate source file is kept.
    pub fn keep_source(&self) -> bool {
        self.keep_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_format_from_str() {
        assert_eq!("png".parse::<ImageFormat>(), Ok(ImageFormat::Png));
        assert_eq!("SVG".parse::<ImageFormat>(), Ok(ImageFormat::Svg));
        assert!("gif".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_image_format_display() {
        assert_eq!(ImageFormat::Png.to_string(), "png");
        assert_eq!(ImageFormat::Svg.to_string(), "svg");
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::new("diagram.png");

        assert_eq!(options.output(), Path::new("diagram.png"));
        assert_eq!(options.format(), ImageFormat::Png);
        assert!(!options.keep_source());
    }

    #[test]
    fn test_render_options_builders() {
        let options = RenderOptions::new("diagram.svg")
            .with_format(ImageFormat::Svg)
            .with_keep_source(true);

        assert_eq!(options.format(), ImageFormat::Svg);
        assert!(options.keep_source());
    }
}
