//! Keyword knowledge base.
//!
//! A [`KnowledgeBase`] maps lowercased subject phrases to a list of topic
//! labels and a few illustrative edges between them. It also carries the
//! cross-domain link table: pairs of topics that are linked whenever both
//! show up in the same extraction, whichever subjects they came from.
//!
//! The table is configuration data. [`KnowledgeBase::builtin`] returns the
//! seed table; [`KnowledgeBase::from_toml_str`] loads additional subjects in
//! the following format:
//!
//! ```toml
//! [subjects."compilers"]
//! topics = ["Lexing", "Parsing", "Type Checking", "Code Generation"]
//! edges = [["Lexing", "Parsing"]]
//!
//! cross_links = [["Parsing", "Trees"]]
//! ```

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use conceptmap_core::identifier::normalize_label;

use crate::error::KnowledgeBaseError;

type Pair = (String, String);

/// Topics and edges seeded for one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Subject {
    topics: Vec<String>,

    #[serde(default)]
    edges: Vec<Pair>,
}

impl Subject {
    /// Creates a subject from topic labels and `(from, to)` label pairs.
    pub fn new<T, E>(topics: T, edges: E) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        E: IntoIterator<Item = (T::Item, T::Item)>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
            edges: edges
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Topic labels in declaration order
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Illustrative `(from, to)` edges between this subject's topics
    pub fn edges(&self) -> &[Pair] {
        &self.edges
    }
}

/// Mapping from subject key to seeded topics, plus cross-domain links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    subjects: IndexMap<String, Subject>,

    #[serde(default)]
    cross_links: Vec<Pair>,
}

impl KnowledgeBase {
    /// Returns the seed knowledge base.
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptmap_extract::KnowledgeBase;
    ///
    /// let kb = KnowledgeBase::builtin();
    /// let db = kb.subject("database systems").unwrap();
    /// assert_eq!(db.topics().len(), 6);
    /// ```
    pub fn builtin() -> Self {
        let mut subjects = IndexMap::new();
        for (key, topics, edges) in BUILTIN_SUBJECTS {
            subjects.insert(
                key.to_string(),
                Subject::new(topics.iter().copied(), edges.iter().copied()),
            );
        }

        Self {
            subjects,
            cross_links: BUILTIN_CROSS_LINKS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// Parses and validates a knowledge base from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeBaseError::Parse`] for malformed TOML and the other
    /// variants when [`KnowledgeBase::validate`] rejects the content.
    pub fn from_toml_str(source: &str) -> Result<Self, KnowledgeBaseError> {
        let kb: KnowledgeBase = toml::from_str(source)?;
        kb.validate()?;
        debug!(
            subjects = kb.subjects.len(),
            cross_links = kb.cross_links.len();
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Checks the structural rules of the table.
    ///
    /// # Errors
    ///
    /// - [`KnowledgeBaseError::EmptyKey`] for a blank subject key
    /// - [`KnowledgeBaseError::KeyNotNormalized`] if a key is not lowercase and trimmed
    /// - [`KnowledgeBaseError::NoTopics`] for a subject without topics
    /// - [`KnowledgeBaseError::UnknownEdgeTopic`] if an edge leaves its subject
    /// - [`KnowledgeBaseError::SelfLink`] for an edge or cross link from a topic to itself
    pub fn validate(&self) -> Result<(), KnowledgeBaseError> {
        for (key, subject) in &self.subjects {
            if key.trim().is_empty() {
                return Err(KnowledgeBaseError::EmptyKey);
            }
            if *key != key.trim().to_lowercase() {
                return Err(KnowledgeBaseError::KeyNotNormalized(key.clone()));
            }
            if subject.topics.is_empty() {
                return Err(KnowledgeBaseError::NoTopics(key.clone()));
            }
            for (from, to) in &subject.edges {
                for endpoint in [from, to] {
                    if !subject.topics.contains(endpoint) {
                        return Err(KnowledgeBaseError::UnknownEdgeTopic {
                            subject: key.clone(),
                            topic: endpoint.clone(),
                        });
                    }
                }
                if from == to {
                    return Err(KnowledgeBaseError::SelfLink(from.clone()));
                }
            }
        }

        let self_link = self
            .cross_links
            .iter()
            .find(|(a, b)| normalize_label(a) == normalize_label(b));
        if let Some((topic, _)) = self_link {
            return Err(KnowledgeBaseError::SelfLink(topic.clone()));
        }

        Ok(())
    }

    /// Adds every subject and cross link of `other`.
    ///
    /// Subjects with an existing key are replaced in place; new keys are
    /// appended, so they are matched after the existing ones.
    pub fn merge(&mut self, other: KnowledgeBase) {
        for (key, subject) in other.subjects {
            self.subjects.insert(key, subject);
        }
        for link in other.cross_links {
            if !self.cross_links.contains(&link) {
                self.cross_links.push(link);
            }
        }
    }

    /// Looks up a subject by its key.
    pub fn subject(&self, key: &str) -> Option<&Subject> {
        self.subjects.get(key)
    }

    /// Iterates subjects in declaration order.
    pub fn subjects(&self) -> impl Iterator<Item = (&str, &Subject)> {
        self.subjects.iter().map(|(key, subject)| (key.as_str(), subject))
    }

    /// Cross-domain `(from, to)` links
    pub fn cross_links(&self) -> &[Pair] {
        &self.cross_links
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

type SubjectSeed = (
    &'static str,
    &'static [&'static str],
    &'static [(&'static str, &'static str)],
);

const BUILTIN_SUBJECTS: &[SubjectSeed] = &[
    (
        "operating systems",
        &[
            "Processes",
            "Threads",
            "CPU Scheduling",
            "Deadlocks",
            "Memory Management",
            "Synchronization",
        ],
        &[
            ("Threads", "Synchronization"),
            ("Processes", "CPU Scheduling"),
            ("Synchronization", "Deadlocks"),
        ],
    ),
    (
        "computer networks",
        &[
            "OSI Model",
            "TCP/UDP",
            "Sockets",
            "Routing",
            "DNS",
            "Congestion Control",
        ],
        &[
            ("Sockets", "TCP/UDP"),
            ("OSI Model", "Routing"),
            ("TCP/UDP", "Congestion Control"),
        ],
    ),
    (
        "database systems",
        &[
            "ER Modeling",
            "Normalization",
            "Transactions",
            "Indexing",
            "SQL",
            "Concurrency Control",
        ],
        &[
            ("ER Modeling", "Normalization"),
            ("Transactions", "Concurrency Control"),
        ],
    ),
    (
        "data structures",
        &[
            "Arrays",
            "Linked Lists",
            "Stacks",
            "Queues",
            "Trees",
            "Graphs",
            "Hash Tables",
            "Heaps",
        ],
        &[
            ("Arrays", "Hash Tables"),
            ("Trees", "Heaps"),
            ("Linked Lists", "Queues"),
        ],
    ),
    (
        "artificial intelligence",
        &[
            "Search",
            "Knowledge Representation",
            "Machine Learning",
            "Neural Networks",
            "Reinforcement Learning",
            "Planning",
        ],
        &[
            ("Machine Learning", "Neural Networks"),
            ("Search", "Planning"),
        ],
    ),
];

const BUILTIN_CROSS_LINKS: &[(&str, &str)] = &[
    ("Threads", "Sockets"),
    ("Queues", "Deadlocks"),
    ("Normalization", "Indexing"),
    ("Hash Tables", "Indexing"),
    ("Graphs", "Routing"),
    ("Search", "Graphs"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let kb = KnowledgeBase::builtin();
        kb.validate().expect("builtin knowledge base must validate");
        assert_eq!(kb.len(), 5);
    }

    #[test]
    fn test_builtin_subject_sizes() {
        for (key, subject) in KnowledgeBase::builtin().subjects() {
            let topics = subject.topics().len();
            let edges = subject.edges().len();
            assert!((5..=8).contains(&topics), "{key} has {topics} topics");
            assert!((1..=3).contains(&edges), "{key} has {edges} edges");
        }
    }

    #[test]
    fn test_builtin_declaration_order() {
        let kb = KnowledgeBase::builtin();
        let keys: Vec<&str> = kb.subjects().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "operating systems",
                "computer networks",
                "database systems",
                "data structures",
                "artificial intelligence",
            ]
        );
    }

    #[test]
    fn test_from_toml_str() {
        let kb = KnowledgeBase::from_toml_str(
            r#"
            cross_links = [["Parsing", "Trees"]]

            [subjects."compilers"]
            topics = ["Lexing", "Parsing", "Code Generation"]
            edges = [["Lexing", "Parsing"]]
            "#,
        )
        .expect("valid knowledge base");

        let compilers = kb.subject("compilers").unwrap();
        assert_eq!(compilers.topics(), &["Lexing", "Parsing", "Code Generation"]);
        assert_eq!(
            compilers.edges(),
            &[("Lexing".to_string(), "Parsing".to_string())]
        );
        assert_eq!(kb.cross_links().len(), 1);
    }

    #[test]
    fn test_edges_default_to_empty() {
        let kb = KnowledgeBase::from_toml_str(
            r#"
            [subjects."statistics"]
            topics = ["Probability", "Regression"]
            "#,
        )
        .unwrap();
        assert!(kb.subject("statistics").unwrap().edges().is_empty());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = KnowledgeBase::from_toml_str("[subjects.\"x\"\ntopics = ").unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::Parse(_)));
        assert!(err.span().is_some());
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_rejects_uppercase_key() {
        let err = KnowledgeBase::from_toml_str(
            r#"
            [subjects."Compilers"]
            topics = ["Lexing"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::KeyNotNormalized(key) if key == "Compilers"));
    }

    #[test]
    fn test_rejects_empty_topics() {
        let err = KnowledgeBase::from_toml_str(
            r#"
            [subjects."compilers"]
            topics = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::NoTopics(_)));
    }

    #[test]
    fn test_rejects_edge_outside_subject() {
        let err = KnowledgeBase::from_toml_str(
            r#"
            [subjects."compilers"]
            topics = ["Lexing", "Parsing"]
            edges = [["Lexing", "Linking"]]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            KnowledgeBaseError::UnknownEdgeTopic { ref topic, .. } if topic == "Linking"
        ));
        assert!(err.help().is_some());
    }

    #[test]
    fn test_rejects_self_cross_link() {
        let err = KnowledgeBase::from_toml_str(r#"cross_links = [["Trees", "Trees"]]"#).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::SelfLink(_)));

        let err = KnowledgeBase::from_toml_str(r#"cross_links = [["Trees", " Trees"]]"#).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::SelfLink(_)));
    }

    #[test]
    fn test_merge_appends_and_replaces() {
        let mut kb = KnowledgeBase::builtin();
        let extra = KnowledgeBase::from_toml_str(
            r#"
            cross_links = [["Threads", "Sockets"], ["Parsing", "Trees"]]

            [subjects."database systems"]
            topics = ["SQL"]

            [subjects."compilers"]
            topics = ["Parsing"]
            "#,
        )
        .unwrap();

        kb.merge(extra);

        assert_eq!(kb.len(), 6);
        assert_eq!(kb.subject("database systems").unwrap().topics(), &["SQL"]);
        let keys: Vec<&str> = kb.subjects().map(|(k, _)| k).collect();
        assert_eq!(keys[2], "database systems");
        assert_eq!(keys.last(), Some(&"compilers"));
        assert_eq!(kb.cross_links().len(), 7);
    }
}
