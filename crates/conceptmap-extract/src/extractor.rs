//! Topic extraction from free text.
//!
//! The [`Extractor`] matches subject keys of a [`KnowledgeBase`] against the
//! input, falls back to capitalized phrases when nothing matches, adds
//! cross-domain links and hands the result to the graph builder.

use indexmap::IndexSet;
use log::{debug, info, trace};

use conceptmap_core::{
    builder,
    identifier::normalize_label,
    topic::{Edge, Graph, Topic, TopicKind},
};

use crate::{knowledge_base::KnowledgeBase, scan};

/// Maximum number of topics taken from capitalized runs.
pub const MAX_FALLBACK_TOPICS: usize = 10;

/// Topics used when neither the knowledge base nor the capitalized-run
/// scan yields anything for a non-blank input.
pub const DEFAULT_TOPICS: [&str; 6] = [
    "Data Structures",
    "Algorithms",
    "Graphs",
    "Trees",
    "Dynamic Programming",
    "Sorting",
];

/// Options that change how extracted topics become graph nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Flag the first extracted topic as [`TopicKind::Core`].
    pub mark_core: bool,
}

/// Where the topics of an extraction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSource {
    /// The input was blank.
    Empty,
    /// At least one knowledge-base subject matched.
    KnowledgeBase,
    /// Capitalized runs of the raw input.
    Capitalized,
    /// The fixed default topic set.
    Default,
}

/// Turns free text into a topic [`Graph`] using an injected knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'kb> {
    knowledge_base: &'kb KnowledgeBase,
    options: ExtractOptions,
}

impl<'kb> Extractor<'kb> {
    /// Creates an extractor with default options.
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self {
            knowledge_base,
            options: ExtractOptions::default(),
        }
    }

    /// Sets the extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Extracts the topic graph of `raw`.
    ///
    /// Never fails: blank input gives an empty graph, any other input gives
    /// at least one topic.
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptmap_extract::{Extractor, KnowledgeBase};
    ///
    /// let kb = KnowledgeBase::builtin();
    /// let graph = Extractor::new(&kb).extract("Operating Systems, Computer Networks");
    /// assert_eq!(graph.node_count(), 12);
    ///
    /// assert!(Extractor::new(&kb).extract("  \n ").is_empty());
    /// ```
    pub fn extract(&self, raw: &str) -> Graph {
        self.extract_with_source(raw).0
    }

    /// Same as [`Extractor::extract`], also reporting where topics came from.
    pub fn extract_with_source(&self, raw: &str) -> (Graph, TopicSource) {
        if raw.trim().is_empty() {
            debug!("Blank input, returning empty graph");
            return (Graph::empty(), TopicSource::Empty);
        }

        let (mut topics, mut edges) = self.match_subjects(raw);
        let mut source = TopicSource::KnowledgeBase;

        if topics.is_empty() {
            topics = fallback_topics(raw);
            source = TopicSource::Capitalized;
        }
        if topics.is_empty() {
            topics = DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect();
            source = TopicSource::Default;
        }

        for (from, to) in self.knowledge_base.cross_links() {
            let (from, to) = (normalize_label(from), normalize_label(to));
            if topics.contains(&from) && topics.contains(&to) {
                trace!(from:% = from, to:% = to; "Adding cross-domain link");
                edges.push(Edge::between(&from, &to));
            }
        }

        let nodes = topics.iter().enumerate().map(|(idx, label)| {
            let topic = Topic::new(label);
            if self.options.mark_core && idx == 0 {
                topic.with_kind(TopicKind::Core)
            } else {
                topic
            }
        });

        let graph = builder::build(nodes, edges);
        info!(
            source:? = source,
            topics = graph.node_count(),
            edges = graph.edges().len();
            "Topics extracted"
        );

        (graph, source)
    }

    /// Matches every subject key against the lowered text and its phrases.
    fn match_subjects(&self, raw: &str) -> (IndexSet<String>, Vec<Edge>) {
        let lowered = raw.to_lowercase();
        let phrases = scan::split_phrases(&lowered);

        let mut topics = IndexSet::new();
        let mut edges = Vec::new();

        for (key, subject) in self.knowledge_base.subjects() {
            let matched =
                lowered.contains(key) || phrases.iter().any(|phrase| phrase.contains(key));
            if !matched {
                continue;
            }

            debug!(subject:% = key; "Subject matched");
            topics.extend(subject.topics().iter().map(|t| normalize_label(t)));
            edges.extend(
                subject
                    .edges()
                    .iter()
                    .map(|(from, to)| Edge::between(from, to)),
            );
        }

        (topics, edges)
    }
}

/// Collects up to [`MAX_FALLBACK_TOPICS`] distinct capitalized runs.
fn fallback_topics(raw: &str) -> IndexSet<String> {
    let mut topics = IndexSet::new();
    for run in scan::capitalized_runs(raw) {
        if topics.len() == MAX_FALLBACK_TOPICS {
            break;
        }
        let label = normalize_label(run);
        if !label.is_empty() {
            topics.insert(label);
        }
    }
    debug!(count = topics.len(); "Fallback topics from capitalized runs");
    topics
}
