//! Topic detail and curated study resources.
//!
//! [`lookup`] maps a topic label to hand-picked resources. Labels without a
//! curated entry get generated Wikipedia and YouTube search links.
//! [`describe`] wraps the resources into a [`TopicDetail`] with a short
//! templated summary and interview prompts.

use std::fmt;

use log::debug;

/// Kind of study material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Video,
    Guide,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Guide => write!(f, "guide"),
        }
    }
}

/// A link to study material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    title: String,
    url: String,
    kind: ResourceKind,
}

impl Resource {
    pub fn new(title: impl Into<String>, url: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

/// Everything shown for a selected topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetail {
    label: String,
    summary: String,
    example: String,
    related: Vec<String>,
    interview: Vec<String>,
    resources: Vec<Resource>,
}

impl TopicDetail {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn related(&self) -> &[String] {
        &self.related
    }

    pub fn interview(&self) -> &[String] {
        &self.interview
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

impl fmt::Display for TopicDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Example: {}", self.example)?;
        writeln!(f, "Related: {}", self.related.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Interview prompts:")?;
        for prompt in &self.interview {
            writeln!(f, "  - {prompt}")?;
        }
        writeln!(f)?;
        writeln!(f, "Resources:")?;
        for resource in &self.resources {
            writeln!(
                f,
                "  - [{}] {} <{}>",
                resource.kind, resource.title, resource.url
            )?;
        }
        Ok(())
    }
}

type ResourceSeed = (&'static str, &'static str, ResourceKind);

const CURATED: &[(&str, [ResourceSeed; 2])] = &[
    (
        "Data Structures",
        [
            (
                "MIT 6.006: Dynamic Arrays, Linked Lists",
                "https://www.youtube.com/watch?v=ZwZ1ZBzv7EM&list=PLUl4u3cNGP63EdVPNLG3ToM6LaEUuStEY",
                ResourceKind::Video,
            ),
            ("OpenDSA eTextbook", "https://opendsa.org/", ResourceKind::Guide),
        ],
    ),
    (
        "Algorithms",
        [
            (
                "MIT 6.006 Intro to Algorithms (Playlist)",
                "https://www.youtube.com/playlist?list=PLUl4u3cNGP6317WaSNfmCvGym2ucw3oGp",
                ResourceKind::Video,
            ),
            (
                "CLRS Companion (Notes)",
                "https://jeffe.cs.illinois.edu/teaching/algorithms/",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Graphs",
        [
            (
                "Graph Algorithms Crash Course",
                "https://www.youtube.com/watch?v=tWVWeAqZ0WU",
                ResourceKind::Video,
            ),
            (
                "CP-Algorithms: Graph Theory",
                "https://cp-algorithms.com/graph/",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Trees",
        [
            (
                "Binary Trees Explained Visually",
                "https://www.youtube.com/watch?v=oSWTXtMglKE",
                ResourceKind::Video,
            ),
            (
                "USF Data Structures: Trees",
                "https://www.cs.usfca.edu/~galles/visualization/Algorithms.html",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Dynamic Programming",
        [
            (
                "DP for Beginners (freeCodeCamp)",
                "https://www.youtube.com/watch?v=oBt53YbR9Kk",
                ResourceKind::Video,
            ),
            (
                "AtCoder Educational DP",
                "https://atcoder.jp/contests/dp/tasks",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Sorting",
        [
            (
                "Sorting Algorithms Visually",
                "https://www.youtube.com/watch?v=kPRA0W1kECg",
                ResourceKind::Video,
            ),
            (
                "Toptal Guide to Sorting Algorithms",
                "https://www.toptal.com/developers/sorting-algorithms",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Hash Tables",
        [
            (
                "Hash Tables (CS50)",
                "https://www.youtube.com/watch?v=shs0KM3wKv8",
                ResourceKind::Video,
            ),
            (
                "MDN: Map and Set in JS",
                "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Map",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Complexity",
        [
            (
                "Big-O Notation Explained",
                "https://www.youtube.com/watch?v=__vX2sjlpXU",
                ResourceKind::Video,
            ),
            (
                "Big-O Cheat Sheet",
                "https://www.bigocheatsheet.com/",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Operating Systems",
        [
            (
                "MIT 6.828: Operating System Engineering",
                "https://pdos.csail.mit.edu/6.828/2018/",
                ResourceKind::Guide,
            ),
            (
                "CS 162 UC Berkeley (Playlist)",
                "https://www.youtube.com/playlist?list=PLIMsH_z6eqVMZkDp0L_Nl0Hpm2A17y0J1",
                ResourceKind::Video,
            ),
        ],
    ),
    (
        "Networking",
        [
            (
                "Computer Networking Full Course",
                "https://www.youtube.com/watch?v=IPvYjXCsTg8",
                ResourceKind::Video,
            ),
            (
                "Beej's Guide to Network Programming",
                "https://beej.us/guide/bgnet/",
                ResourceKind::Guide,
            ),
        ],
    ),
    (
        "Databases",
        [
            (
                "CMU Intro to Database Systems (15-445)",
                "https://www.youtube.com/playlist?list=PLSE8ODhjZXjbohkNBWQs_otTrBTrjyohi",
                ResourceKind::Video,
            ),
            (
                "Use The Index, Luke!",
                "https://use-the-index-luke.com/",
                ResourceKind::Guide,
            ),
        ],
    ),
];

const RELATED: [&str; 3] = ["Algorithms", "Data Structures", "Complexity"];

fn curated(seeds: &[ResourceSeed]) -> Vec<Resource> {
    seeds
        .iter()
        .map(|&(title, url, kind)| Resource::new(title, url, kind))
        .collect()
}

/// Returns study resources for `label`.
///
/// An exact curated key wins; otherwise the first curated key contained in
/// the label (ignoring case) is used; otherwise a Wikipedia article and a
/// YouTube search are generated for the label.
///
/// # Examples
///
/// ```
/// use conceptmap::resources::{lookup, ResourceKind};
///
/// let exact = lookup("Graphs");
/// assert_eq!(exact[0].title(), "Graph Algorithms Crash Course");
///
/// let fallback = lookup("Type Theory");
/// assert_eq!(fallback[0].url(), "https://en.wikipedia.org/wiki/Type_Theory");
/// assert_eq!(fallback[1].kind(), ResourceKind::Video);
/// ```
pub fn lookup(label: &str) -> Vec<Resource> {
    if let Some((_, seeds)) = CURATED.iter().find(|(key, _)| *key == label) {
        debug!(label; "Exact curated resources");
        return curated(seeds);
    }

    let lowered = label.to_lowercase();
    if let Some((key, seeds)) = CURATED
        .iter()
        .find(|(key, _)| lowered.contains(&key.to_lowercase()))
    {
        debug!(label, key; "Curated resources by contained key");
        return curated(seeds);
    }

    debug!(label; "No curated resources, generating search links");
    vec![
        Resource::new(
            format!("{label} - Wikipedia overview"),
            format!(
                "https://en.wikipedia.org/wiki/{}",
                urlencoding::encode(&label.replace(' ', "_"))
            ),
            ResourceKind::Guide,
        ),
        Resource::new(
            format!("YouTube: {label} explained"),
            format!(
                "https://www.youtube.com/results?search_query={}",
                urlencoding::encode(&format!("{label} explained"))
            ),
            ResourceKind::Video,
        ),
    ]
}

/// Builds the detail view of the topic labelled `label`.
pub fn describe(label: &str) -> TopicDetail {
    TopicDetail {
        label: label.to_string(),
        summary: format!(
            "An overview of {label}, including key definitions, core ideas, and why it matters in computer science."
        ),
        example: format!("Example-driven walkthrough to build intuition for {label}."),
        related: RELATED.iter().map(|r| r.to_string()).collect(),
        interview: vec![
            format!("Explain {label} in your own words and a real-world example."),
            format!("What are common pitfalls or edge cases in {label}?"),
        ],
        resources: lookup(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let resources = lookup("Dynamic Programming");
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title(), "DP for Beginners (freeCodeCamp)");
        assert_eq!(resources[1].kind(), ResourceKind::Guide);
    }

    #[test]
    fn test_contained_key_ignores_case() {
        let resources = lookup("Advanced sorting techniques");
        assert_eq!(resources[0].title(), "Sorting Algorithms Visually");
    }

    #[test]
    fn test_first_contained_key_in_table_order() {
        // Both "Algorithms" and "Graphs" occur; "Algorithms" is declared first.
        let resources = lookup("Graphs and Algorithms");
        assert_eq!(resources[0].title(), "MIT 6.006 Intro to Algorithms (Playlist)");
    }

    #[test]
    fn test_fallback_links_are_encoded() {
        let resources = lookup("TCP/UDP");
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].url(), "https://en.wikipedia.org/wiki/TCP%2FUDP");
        assert_eq!(resources[0].title(), "TCP/UDP - Wikipedia overview");
        assert_eq!(
            resources[1].url(),
            "https://www.youtube.com/results?search_query=TCP%2FUDP%20explained"
        );
        assert_eq!(resources[1].kind(), ResourceKind::Video);
    }

    #[test]
    fn test_fallback_replaces_spaces_with_underscores() {
        let resources = lookup("Memory Management");
        assert_eq!(
            resources[0].url(),
            "https://en.wikipedia.org/wiki/Memory_Management"
        );
    }

    #[test]
    fn test_describe() {
        let detail = describe("Routing");
        assert_eq!(detail.label(), "Routing");
        assert!(detail.summary().starts_with("An overview of Routing"));
        assert_eq!(detail.related(), &["Algorithms", "Data Structures", "Complexity"]);
        assert_eq!(detail.interview().len(), 2);
        assert_eq!(detail.resources(), lookup("Routing").as_slice());

        let text = detail.to_string();
        assert!(text.contains("Interview prompts:"));
        assert!(text.contains("[video] YouTube: Routing explained"));
    }
}
