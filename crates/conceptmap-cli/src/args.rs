//! Command-line argument definitions for the concept map CLI.
//!
//! The subject text comes from the positional argument, the `--input` file
//! or standard input, in that order.

use clap::Parser;

/// Command-line arguments for the concept map tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What you are studying, e.g. "Operating Systems, Computer Networks"
    #[arg(help = "Subject text; read from --input or stdin when omitted")]
    pub text: Option<String>,

    /// Path to a file holding the subject text
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Extra subjects merged into the built-in knowledge base (TOML)
    #[arg(long)]
    pub knowledge_base: Option<String>,

    /// Print the detail and study resources of this topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
