//! Configuration types for Armillary diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and style settings.
//! - [`RenderConfig`] - Controls the output [`ImageFormat`] and intermediate-file handling.
//! - [`StyleConfig`] - Graph-level visual attributes passed through to the rendering engine.
//!
//! # Example
//!
//! ```
//! # use armillary::config::AppConfig;
//! # use armillary::export::ImageFormat;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().format(), ImageFormat::Png);
//! ```

use serde::Deserialize;

use crate::export::ImageFormat;

/// Top-level application configuration combining render and style settings.
///
/// Groups [`RenderConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style configurations.
    ///
    /// # Arguments
    ///
    /// * `render` - Output format and intermediate-file settings.
    /// * `style` - Graph-level visual attributes.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Output format and intermediate-file configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderConfig {
    /// Output [`ImageFormat`] for rendered diagrams.
    #[serde(default)]
    format: ImageFormat,

    /// Whether to keep the intermediate DOT source file next to the output.
    ///
    /// When `false` (the default) no intermediate file remains after a
    /// render.
    #[serde(default)]
    keep_source: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(format: ImageFormat, keep_source: bool) -> Self {
        Self {
            format,
            keep_source,
        }
    }

    /// Returns the output image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns whether the intermediate DOT source is kept.
    pub fn keep_source(&self) -> bool {
        self.keep_source
    }
}

/// Graph-level visual attributes for rendered diagrams.
///
/// Values are forwarded verbatim to the rendering engine as graph
/// attributes. Fields that are not set fall back to engine defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Layout direction (`TB`, `LR`, `BT`, `RL`).
    #[serde(default)]
    rankdir: Option<String>,

    /// Font family used for node, edge, and cluster labels.
    #[serde(default)]
    font_name: Option<String>,

    /// Background color for the whole diagram, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    pub fn new(
        rankdir: Option<String>,
        font_name: Option<String>,
        background_color: Option<String>,
    ) -> Self {
        Self {
            rankdir,
            font_name,
            background_color,
        }
    }

    /// Returns the configured layout direction, if any.
    pub fn rankdir(&self) -> Option<&str> {
        self.rankdir.as_deref()
    }

    /// Returns the configured font family, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Returns the configured background color, if any.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}
