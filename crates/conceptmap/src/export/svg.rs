//! SVG export backend.
//!
//! [`Svg`] renders a [`Layout`] into an SVG document and writes it to any
//! [`io::Write`] sink. Colors are resolved once into a [`Palette`] before
//! rendering starts.

use std::io::{self, Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use conceptmap_core::{color::Color, geometry::Bounds};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
    layout::{CurvedLink, Layout, PlacedNode},
};

/// Radius of a node circle
const NODE_RADIUS: f32 = 18.0;
/// Vertical offset of a label below its node center
const LABEL_OFFSET: f32 = 36.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const LINK_WIDTH: f32 = 1.6;
const LINK_OPACITY: f32 = 0.9;
const OUTLINE_COLOR: &str = "#0f172a";

/// Colors used while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    background: Option<Color>,
    node: Color,
    core: Color,
    link: Color,
    label: Color,
    outline: Color,
}

impl Palette {
    /// Resolves every color of `style`.
    ///
    /// # Errors
    ///
    /// Returns the message of the first invalid color setting.
    pub fn from_style(style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            background: style.background_color()?,
            node: style.node_color()?,
            core: style.core_color()?,
            link: style.link_color()?,
            label: style.label_color()?,
            outline: Color::new(OUTLINE_COLOR)?,
        })
    }

    /// Fill color for `node`, accenting the core topic.
    fn fill_for(&self, node: &PlacedNode) -> Color {
        if node.topic().is_core() {
            self.core
        } else {
            self.node
        }
    }
}

/// Builder for [`Svg`] exporters.
pub struct SvgBuilder<W> {
    writer: W,
    palette: Option<Palette>,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            palette: None,
        }
    }

    /// Sets the colors to render with.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the default palette cannot be
    /// resolved and none was given.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let palette = match self.palette {
            Some(palette) => palette,
            None => Palette::from_style(&StyleConfig::default()).map_err(export::Error::Render)?,
        };
        Ok(Svg {
            writer: self.writer,
            palette,
        })
    }
}

/// SVG exporter
pub struct Svg<W> {
    writer: W,
    palette: Palette,
}

impl<W: Write> Svg<W> {
    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn marker_id(&self) -> String {
        format!("arrow-{}", self.palette.link.to_id_safe_string())
    }

    /// Renders `layout` into a document sized to its canvas.
    pub fn render_layout(&self, layout: &Layout) -> Document {
        let bounds = layout.bounds();
        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        doc = doc.add(self.render_marker_definitions());
        if let Some(background) = self.render_background(bounds) {
            doc = doc.add(background);
        }

        let links = layout
            .links()
            .iter()
            .fold(svg_element::Group::new().set("class", "links"), |group, link| {
                group.add(self.render_link(link))
            });
        let nodes = layout
            .nodes()
            .iter()
            .fold(svg_element::Group::new().set("class", "nodes"), |group, node| {
                group.add(self.render_node(node))
            });

        debug!(links = layout.links().len(), nodes = layout.nodes().len(); "SVG document rendered");
        doc.add(links).add(nodes)
    }

    fn render_marker_definitions(&self) -> svg_element::Definitions {
        let link = self.palette.link;
        let arrow = svg_element::Marker::new()
            .set("id", self.marker_id())
            .set("markerWidth", 12)
            .set("markerHeight", 12)
            .set("refX", 11)
            .set("refY", 6)
            .set("orient", "auto")
            .set("markerUnits", "userSpaceOnUse")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 12 6 L 0 12 L 3 6 Z")
                    .set("fill", link.to_string())
                    .set("fill-opacity", link.alpha()),
            );

        svg_element::Definitions::new().add(arrow)
    }

    fn render_background(&self, bounds: Bounds) -> Option<svg_element::Rectangle> {
        let color = self.palette.background?;
        Some(
            svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
        )
    }

    fn render_link(&self, link: &CurvedLink) -> svg_element::Path {
        svg_element::Path::new()
            .set("d", link.path_data())
            .set("stroke", self.palette.link.to_string())
            .set("stroke-width", LINK_WIDTH)
            .set("fill", "none")
            .set("opacity", LINK_OPACITY)
            .set("marker-end", format!("url(#{})", self.marker_id()))
    }

    fn render_node(&self, node: &PlacedNode) -> svg_element::Group {
        let position = node.position();
        let fill = self.palette.fill_for(node);
        let label = node.topic().label();

        let circle = svg_element::Circle::new()
            .set("r", NODE_RADIUS)
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha())
            .set("stroke", fill.to_string())
            .set("stroke-opacity", 0.25);

        // The first tspan draws a thick outline under the second one.
        let outline = svg_element::TSpan::new("")
            .set("fill", self.palette.outline.to_string())
            .set("stroke", self.palette.outline.to_string())
            .set("stroke-width", 3)
            .set("paint-order", "stroke")
            .add(SvgText::new(label));
        let text = svg_element::TSpan::new("")
            .set("fill", self.palette.label.to_string())
            .add(SvgText::new(label));

        let caption = svg_element::Text::new("")
            .set("x", 0)
            .set("y", LABEL_OFFSET)
            .set("text-anchor", "middle")
            .set("font-size", LABEL_FONT_SIZE)
            .set("font-weight", 600)
            .add(outline)
            .add(text);

        svg_element::Group::new()
            .set("class", node.topic().kind().to_string())
            .set(
                "transform",
                format!("translate({}, {})", position.x(), position.y()),
            )
            .add(circle)
            .add(caption)
    }

    fn write_document(&mut self, doc: &Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        self.writer.flush().map_err(export::Error::Io)
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_layout(&mut self, layout: &Layout) -> Result<(), export::Error> {
        info!(nodes = layout.nodes().len(); "Exporting SVG");
        let doc = self.render_layout(layout);
        self.write_document(&doc)
    }
}

/// Renders `layout` to an SVG string with `palette`.
///
/// # Errors
///
/// Returns an error if writing to the in-memory buffer fails.
pub fn render_to_string(layout: &Layout, palette: Palette) -> Result<String, export::Error> {
    let mut exporter = SvgBuilder::new(Vec::new()).with_palette(palette).build()?;
    exporter.export_layout(layout)?;
    String::from_utf8(exporter.into_inner())
        .map_err(|err| export::Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
