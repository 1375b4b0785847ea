//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section exposes its paths through a `FIELDS` constant, so
/// diagnostics never spell a field name by hand.
///
/// # Example
///
/// ```ignore
/// diag.error(TailwindSection::FIELDS.executable, "not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            paint(format_args!("`{}`", self.0), Style::new().bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
