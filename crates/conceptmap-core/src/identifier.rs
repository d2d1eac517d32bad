//! Topic identifiers backed by a process-wide string interner.
//!
//! Every [`Id`] is derived from a topic label. Interning keeps ids `Copy`
//! and makes equality checks a symbol comparison, which matters because the
//! graph builder, the layout engines and the learning-path orderer all look
//! nodes up by id.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access goes through a `Mutex`; the interner only ever grows.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned identifier of a topic node.
///
/// Ids are case-preserving. Use [`Id::from_label`] to derive the canonical
/// id of a display label; [`Id::new`] interns the given text verbatim.
///
/// # Examples
///
/// ```
/// use conceptmap_core::identifier::Id;
///
/// let id = Id::from_label("  Memory   Management ");
/// assert_eq!(id, "Memory Management");
/// assert_eq!(id, Id::new("Memory Management"));
/// assert_ne!(id, Id::new("memory management"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` exactly as given.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Derives the canonical id of a topic label.
    ///
    /// The label is trimmed and every run of internal whitespace is collapsed
    /// to a single space. Case is preserved.
    pub fn from_label(label: &str) -> Self {
        Self::new(&normalize_label(label))
    }

    /// Returns the interned text of this id.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

/// Trims `label` and collapses whitespace runs to single spaces.
///
/// # Examples
///
/// ```
/// use conceptmap_core::identifier::normalize_label;
///
/// assert_eq!(normalize_label("\tTCP/UDP \n"), "TCP/UDP");
/// assert_eq!(normalize_label("Hash    Tables"), "Hash Tables");
/// ```
pub fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    /// Interns the string verbatim, same as [`Id::new`].
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
