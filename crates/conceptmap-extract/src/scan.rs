//! Text scanners used by the extractor.
//!
//! Both scanners are total: they accept any input and, on the unlikely
//! event of a parser failure, return nothing rather than an error.

use winnow::{
    Parser as _,
    combinator::{alt, repeat, separated},
    error::ModalResult,
    token::{any, one_of, take_till, take_while},
};

type Input<'a> = &'a str;

const PHRASE_SEPARATORS: [char; 2] = [',', '\n'];

/// Parse a single phrase: everything up to the next separator.
fn phrase<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_till(0.., PHRASE_SEPARATORS).parse_next(input)
}

fn phrases<'a>(input: &mut Input<'a>) -> ModalResult<Vec<&'a str>> {
    separated(0.., phrase, one_of(PHRASE_SEPARATORS)).parse_next(input)
}

/// Splits text on commas and newlines into trimmed, non-empty phrases.
///
/// # Examples
///
/// ```
/// use conceptmap_extract::scan::split_phrases;
///
/// let phrases = split_phrases("operating systems,\r\n  computer networks,,");
/// assert_eq!(phrases, vec!["operating systems", "computer networks"]);
/// ```
pub fn split_phrases(text: &str) -> Vec<&str> {
    let mut input = text;
    phrases(&mut input)
        .unwrap_or_default()
        .into_iter()
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

/// Parse one capitalized run: an ASCII uppercase letter followed by at
/// least two ASCII letters or spaces, taken greedily.
fn capitalized_run<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_uppercase()),
        take_while(2.., |c: char| c.is_ascii_alphabetic() || c == ' '),
    )
        .take()
        .parse_next(input)
}

/// Parse a word that cannot start a run, so capitals inside it are skipped.
fn word<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_alphabetic()).parse_next(input)
}

fn capitalized_runs_all<'a>(input: &mut Input<'a>) -> ModalResult<Vec<&'a str>> {
    repeat(
        0..,
        alt((
            capitalized_run.map(Some),
            word.value(None::<&'a str>),
            any.value(None::<&'a str>),
        )),
    )
    .fold(Vec::new, |mut runs, run| {
        if let Some(run) = run {
            runs.push(run);
        }
        runs
    })
    .parse_next(input)
}

/// Finds capitalized runs in `text`, scanning left to right.
///
/// Matches do not overlap and only start at the beginning of a word: a word
/// that does not start a run is skipped whole, anything else one character
/// at a time. Runs are returned untrimmed.
///
/// # Examples
///
/// ```
/// use conceptmap_extract::scan::capitalized_runs;
///
/// let runs = capitalized_runs("learn Compiler Design and Go, then Rust basics");
/// assert_eq!(runs, vec!["Compiler Design and Go", "Rust basics"]);
/// ```
pub fn capitalized_runs(text: &str) -> Vec<&str> {
    let mut input = text;
    capitalized_runs_all(&mut input).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_phrases_empty() {
        assert!(split_phrases("").is_empty());
        assert!(split_phrases(" , \n ,").is_empty());
    }

    #[test]
    fn test_split_phrases_single() {
        assert_eq!(split_phrases("  data structures  "), vec!["data structures"]);
    }

    #[test]
    fn test_split_phrases_mixed_separators() {
        assert_eq!(
            split_phrases("a, b\nc\n\n,d"),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_capitalized_runs_requires_three_characters() {
        assert!(capitalized_runs("Go").is_empty());
        assert!(capitalized_runs("Go, Up").is_empty());
        assert_eq!(capitalized_runs("Gox"), vec!["Gox"]);
        assert_eq!(capitalized_runs("Go Up"), vec!["Go Up"]);
    }

    #[test]
    fn test_capitalized_runs_stop_at_punctuation() {
        assert_eq!(
            capitalized_runs("Quantum Computing: Qubits, Entanglement."),
            vec!["Quantum Computing", "Qubits", "Entanglement"]
        );
    }

    #[test]
    fn test_capitalized_runs_skip_lowercase_and_digits() {
        assert!(capitalized_runs("all lowercase 123 words").is_empty());
    }

    #[test]
    fn test_capitalized_runs_ignore_mid_word_capitals() {
        assert_eq!(capitalized_runs("iPhone Apps"), vec!["Apps"]);
        assert_eq!(capitalized_runs("learn macOS and eBPF Tracing"), vec!["Tracing"]);
        assert!(capitalized_runs("camelCaseOnly").is_empty());
    }

    #[test]
    fn test_capitalized_runs_non_ascii() {
        // Non-ASCII letters end a run and are skipped as single characters.
        assert_eq!(capitalized_runs("Éléments de Topologie"), vec!["Topologie"]);
    }
}
