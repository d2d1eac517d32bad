//! Color handling for rendered concept maps
//!
//! [`Color`] wraps `DynamicColor` from the color crate so style settings can
//! be given as CSS color strings and validated up front.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// CSS color parsed through the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#06b6d4",
    /// "rgb(6, 182, 212)" or "teal".
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptmap_core::color::Color;
    ///
    /// let indigo = Color::new("#6366f1").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a string usable inside an SVG `id` attribute.
    ///
    /// Only alphanumeric characters and underscores are kept, and the result
    /// always starts with a letter.
    pub fn to_id_safe_string(self) -> String {
        let sanitized: String = self
            .to_string()
            .replace('#', "hex")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        if sanitized.chars().next().is_some_and(|c| !c.is_ascii_alphabetic()) {
            format!("c_{sanitized}")
        } else {
            sanitized
        }
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
