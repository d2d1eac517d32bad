//! Integration tests for topic extraction over arbitrary input.

use proptest::prelude::*;

use conceptmap_extract::{Extractor, KnowledgeBase};

fn check_extraction_is_total(input: &str) -> Result<(), TestCaseError> {
    let kb = KnowledgeBase::builtin();
    let graph = Extractor::new(&kb).extract(input);

    if input.trim().is_empty() {
        prop_assert!(graph.is_empty());
        prop_assert!(graph.edges().is_empty());
    } else {
        prop_assert!(!graph.is_empty());
    }

    for edge in graph.edges() {
        prop_assert!(!edge.is_self_loop());
        prop_assert!(graph.contains(edge.from()));
        prop_assert!(graph.contains(edge.to()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn extraction_is_total_for_any_string(input in any::<String>()) {
        check_extraction_is_total(&input)?;
    }

    #[test]
    fn extraction_is_total_for_subject_lists(
        parts in prop::collection::vec(
            prop_oneof![
                Just("Operating Systems".to_string()),
                Just("computer networks".to_string()),
                Just("DATA STRUCTURES".to_string()),
                Just("   ".to_string()),
                "[A-Za-z ]{0,20}",
                "\\PC{0,12}",
            ],
            0..6,
        ),
        separator in prop_oneof![Just(","), Just("\n"), Just(", ")],
    ) {
        check_extraction_is_total(&parts.join(separator))?;
    }
}

#[test]
fn test_empty_input_law() {
    let kb = KnowledgeBase::builtin();
    let graph = Extractor::new(&kb).extract("");
    assert!(graph.nodes().is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn test_very_long_input() {
    let kb = KnowledgeBase::builtin();
    let input = "operating systems and more, ".repeat(5_000);
    let graph = Extractor::new(&kb).extract(&input);
    assert_eq!(graph.node_count(), 6);
}

#[test]
fn test_non_ascii_input() {
    let kb = KnowledgeBase::builtin();
    let graph = Extractor::new(&kb).extract("Systèmes d'exploitation 操作系统 🚀");
    assert!(!graph.is_empty());
}

#[test]
fn test_custom_knowledge_base_is_injected() {
    let kb = KnowledgeBase::from_toml_str(
        r#"
        [subjects."compilers"]
        topics = ["Lexing", "Parsing", "Code Generation"]
        edges = [["Lexing", "Parsing"], ["Parsing", "Code Generation"]]
        "#,
    )
    .expect("valid knowledge base");

    let graph = Extractor::new(&kb).extract("Compilers");
    let labels: Vec<&str> = graph.labels().collect();

    assert_eq!(labels, vec!["Lexing", "Parsing", "Code Generation"]);
    assert_eq!(graph.edges().len(), 2);
}
