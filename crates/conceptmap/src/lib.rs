//! Concept map generation.
//!
//! Turns a free-text description of what someone is studying into a topic
//! graph, a radial layout of that graph, a suggested learning path and an
//! SVG rendering. Topic detail and study resources are available for any
//! topic label.
//!
//! The pipeline is deterministic and total: every input, including the
//! empty string, produces a (possibly empty) map. Only configuration,
//! knowledge-base loading and output can fail.

pub mod config;
pub mod export;
pub mod layout;
pub mod path;
pub mod resources;

mod error;
mod structure;

pub use conceptmap_core::{builder, color, geometry, identifier, topic};
pub use conceptmap_extract::{KnowledgeBase, KnowledgeBaseError};

pub use error::ConceptMapError;

use log::{debug, info, trace};

use conceptmap_extract::Extractor;

use config::AppConfig;
use layout::{EngineBuilder, Layout};
use path::LearningPath;
use resources::TopicDetail;
use topic::Graph;

/// Everything produced by one [`ConceptMapBuilder::generate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptMap {
    graph: Graph,
    layout: Layout,
    path: LearningPath,
}

impl ConceptMap {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn learning_path(&self) -> &LearningPath {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Builder for generating and rendering concept maps.
///
/// Holds the configuration and the knowledge base used for extraction.
/// Nothing is cached between calls; every call recomputes from its input.
///
/// # Examples
///
/// ```rust
/// use conceptmap::{ConceptMapBuilder, config::AppConfig};
///
/// let builder = ConceptMapBuilder::new(AppConfig::default());
///
/// let map = builder.generate("Operating Systems, Computer Networks");
/// assert_eq!(map.graph().node_count(), 12);
/// assert_eq!(map.layout().nodes().len(), 12);
///
/// let svg = builder
///     .render_svg(map.layout())
///     .expect("Failed to render");
/// assert!(svg.contains("Sockets"));
///
/// // Or use the default config
/// let builder = ConceptMapBuilder::default();
/// assert!(builder.generate("").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConceptMapBuilder {
    config: AppConfig,
    knowledge_base: KnowledgeBase,
}

impl Default for ConceptMapBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ConceptMapBuilder {
    /// Create a new builder with the given configuration and the built-in
    /// knowledge base.
    ///
    /// # Arguments
    ///
    /// * `config` - Layout, extraction and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            knowledge_base: KnowledgeBase::builtin(),
        }
    }

    /// Replace the knowledge base used for extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conceptmap::{ConceptMapBuilder, KnowledgeBase};
    ///
    /// let kb = KnowledgeBase::from_toml_str(
    ///     r#"
    ///     [subjects."compilers"]
    ///     topics = ["Lexing", "Parsing"]
    ///     edges = [["Lexing", "Parsing"]]
    ///     "#,
    /// )
    /// .expect("valid knowledge base");
    ///
    /// let builder = ConceptMapBuilder::default().with_knowledge_base(kb);
    /// let graph = builder.extract("Compilers course");
    /// assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["Lexing", "Parsing"]);
    /// ```
    pub fn with_knowledge_base(mut self, knowledge_base: KnowledgeBase) -> Self {
        self.knowledge_base = knowledge_base;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Extract the topic graph of `text`.
    pub fn extract(&self, text: &str) -> Graph {
        info!(chars = text.chars().count(); "Extracting topics");
        Extractor::new(&self.knowledge_base)
            .with_options(self.config.extract().options())
            .extract(text)
    }

    /// Place `graph` on the configured canvas with the configured policy.
    pub fn layout(&self, graph: &Graph) -> Layout {
        let layout_config = self.config.layout();
        EngineBuilder::new()
            .with_curvature(layout_config.curvature())
            .build(layout_config.policy(), graph, layout_config.canvas().size())
    }

    /// Suggested study order for `graph`.
    pub fn learning_path(&self, graph: &Graph) -> LearningPath {
        path::order(graph)
    }

    /// Run extraction, layout and ordering for `text`.
    pub fn generate(&self, text: &str) -> ConceptMap {
        let graph = self.extract(text);
        let layout = self.layout(&graph);
        let path = self.learning_path(&graph);

        info!(
            topics = graph.node_count(),
            links = layout.links().len();
            "Concept map generated"
        );
        trace!(path:% = path; "Learning path");

        ConceptMap {
            graph,
            layout,
            path,
        }
    }

    /// Render a layout to an SVG string using the configured style.
    ///
    /// # Errors
    ///
    /// Returns [`ConceptMapError::Style`] for an invalid configured color and
    /// [`ConceptMapError::Export`] if rendering fails.
    pub fn render_svg(&self, layout: &Layout) -> Result<String, ConceptMapError> {
        let palette =
            export::svg::Palette::from_style(self.config.style()).map_err(ConceptMapError::Style)?;
        debug!("Style resolved");

        let svg = export::svg::render_to_string(layout, palette)?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Detail view and study resources for the topic labelled `label`.
    pub fn describe(&self, label: &str) -> TopicDetail {
        resources::describe(label)
    }
}
