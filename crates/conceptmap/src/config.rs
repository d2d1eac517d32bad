//! Configuration types for concept map generation.
//!
//! All types implement [`serde::Deserialize`] and default every missing
//! field, so a configuration file only needs the settings it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`LayoutConfig`] - Ring policy, canvas size and link curvature.
//! - [`ExtractConfig`] - Topic extraction switches.
//! - [`StyleConfig`] - Colors used by the SVG exporter.
//!
//! # Example
//!
//! ```
//! # use conceptmap::config::AppConfig;
//! # use conceptmap::layout::LayoutPolicy;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     policy = "single_ring"
//!
//!     [style]
//!     core_color = "crimson"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().policy(), LayoutPolicy::SingleRing);
//! assert_eq!(config.layout().canvas().width(), 900.0);
//! assert!(config.style().core_color().is_ok());
//! ```

use serde::Deserialize;

use conceptmap_core::{color::Color, geometry::Size};
use conceptmap_extract::ExtractOptions;

use crate::{
    error::ConceptMapError,
    layout::{DEFAULT_CURVATURE, LayoutPolicy},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Extraction configuration section.
    #[serde(default)]
    extract: ExtractConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, extract: ExtractConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            extract,
            style,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks the numeric layout settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConceptMapError::Config`] if a canvas side is not a positive
    /// finite number or the curvature is not finite.
    pub fn validate(&self) -> Result<(), ConceptMapError> {
        let canvas = self.layout.canvas;
        for (name, value) in [("width", canvas.width), ("height", canvas.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConceptMapError::Config(format!(
                    "canvas {name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.layout.curvature.is_finite() {
            return Err(ConceptMapError::Config(
                "curvature must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Placement settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Ring placement strategy.
    #[serde(default)]
    policy: LayoutPolicy,

    /// Drawing surface size.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Offset of the curve control point from the link midpoint.
    #[serde(default = "default_curvature")]
    curvature: f32,
}

fn default_curvature() -> f32 {
    DEFAULT_CURVATURE
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            policy: LayoutPolicy::default(),
            canvas: CanvasConfig::default(),
            curvature: DEFAULT_CURVATURE,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `policy` - Ring placement strategy.
    /// * `canvas` - Canvas dimensions.
    /// * `curvature` - Control point offset for curved links.
    pub fn new(policy: LayoutPolicy, canvas: CanvasConfig, curvature: f32) -> Self {
        Self {
            policy,
            canvas,
            curvature,
        }
    }

    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn curvature(&self) -> f32 {
        self.curvature
    }
}

/// Canvas dimensions in SVG user units.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    width: f32,

    #[serde(default = "default_canvas_height")]
    height: f32,
}

fn default_canvas_width() -> f32 {
    900.0
}

fn default_canvas_height() -> f32 {
    640.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the canvas as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Extraction switches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractConfig {
    /// Flag the first extracted topic as the core topic.
    #[serde(default)]
    mark_core: bool,
}

impl ExtractConfig {
    pub fn new(mark_core: bool) -> Self {
        Self { mark_core }
    }

    pub fn mark_core(&self) -> bool {
        self.mark_core
    }

    /// Converts the section into extractor options.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            mark_core: self.mark_core,
        }
    }
}

/// Visual styling configuration for rendered maps.
///
/// Colors are kept as strings and validated when read, so an invalid color
/// is reported at render time together with the setting it came from.
/// Unset colors fall back to the built-in palette; the background is
/// transparent unless configured.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    node_color: Option<String>,

    #[serde(default)]
    core_color: Option<String>,

    #[serde(default)]
    link_color: Option<String>,

    #[serde(default)]
    label_color: Option<String>,
}

const DEFAULT_NODE_COLOR: &str = "#06b6d4";
const DEFAULT_CORE_COLOR: &str = "#6366f1";
const DEFAULT_LINK_COLOR: &str = "#334155";
const DEFAULT_LABEL_COLOR: &str = "#e2e8f0";

fn parse_color(setting: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {setting} in config: {err}"))
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background color", color))
            .transpose()
    }

    /// Fill color of regular topic nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color is invalid.
    pub fn node_color(&self) -> Result<Color, String> {
        parse_color(
            "node color",
            self.node_color.as_deref().unwrap_or(DEFAULT_NODE_COLOR),
        )
    }

    /// Fill color of the core node.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color is invalid.
    pub fn core_color(&self) -> Result<Color, String> {
        parse_color(
            "core color",
            self.core_color.as_deref().unwrap_or(DEFAULT_CORE_COLOR),
        )
    }

    /// Stroke color of links and arrow heads.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color is invalid.
    pub fn link_color(&self) -> Result<Color, String> {
        parse_color(
            "link color",
            self.link_color.as_deref().unwrap_or(DEFAULT_LINK_COLOR),
        )
    }

    /// Text color of node labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color is invalid.
    pub fn label_color(&self) -> Result<Color, String> {
        parse_color(
            "label color",
            self.label_color.as_deref().unwrap_or(DEFAULT_LABEL_COLOR),
        )
    }
}
