//! CLI logic for the concept map tool.
//!
//! Reads the subject text, generates the concept map, writes the SVG and
//! prints the learning path (and optionally one topic's detail) to stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::{debug, info};

use conceptmap::{ConceptMapBuilder, ConceptMapError, KnowledgeBase};

/// Run the concept map CLI application, printing to stdout.
///
/// # Errors
///
/// Returns `ConceptMapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Knowledge-base loading errors
/// - Style and rendering errors
pub fn run(args: &Args) -> Result<(), ConceptMapError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the application, writing the textual report to `out`.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), ConceptMapError> {
    info!(output_path = args.output; "Generating concept map");

    let app_config = config::load_config(args.config.as_ref())?;

    let mut builder = ConceptMapBuilder::new(app_config);
    if let Some(path) = &args.knowledge_base {
        builder = builder.with_knowledge_base(load_knowledge_base(path)?);
    }

    let text = read_text(args)?;
    let map = builder.generate(&text);
    let svg = builder.render_svg(map.layout())?;

    fs::write(&args.output, svg)?;
    info!(output_file = args.output; "SVG exported successfully");

    if map.is_empty() {
        writeln!(out, "No topics found.")?;
    } else {
        writeln!(out, "Learning path:")?;
        write!(out, "{}", map.learning_path())?;
    }

    if let Some(label) = &args.topic {
        writeln!(out)?;
        write!(out, "{}", builder.describe(label))?;
    }

    Ok(())
}

/// Subject text from the positional argument, the input file or stdin.
fn read_text(args: &Args) -> Result<String, ConceptMapError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input {
        debug!(path; "Reading subject text from file");
        return Ok(fs::read_to_string(path)?);
    }

    debug!("Reading subject text from stdin");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Loads extra subjects and merges them into the built-in knowledge base.
fn load_knowledge_base(path: &str) -> Result<KnowledgeBase, ConceptMapError> {
    info!(path; "Loading knowledge base");
    let src = fs::read_to_string(path)?;

    let extra = KnowledgeBase::from_toml_str(&src)
        .map_err(|err| ConceptMapError::new_knowledge_base_error(err, src.as_str()))?;

    let mut knowledge_base = KnowledgeBase::builtin();
    knowledge_base.merge(extra);
    debug!(subjects = knowledge_base.len(); "Knowledge base merged");

    Ok(knowledge_base)
}
