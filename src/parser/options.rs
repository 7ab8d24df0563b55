use serde::Deserialize;

/// Parser configuration.
///
/// Deserializable so callers can load it from their own config files;
/// missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fail with [`crate::Error::Structural`] when any Error diagnostic was
    /// reported, instead of returning the best-effort document
    pub strict: bool,
    /// Warn about `updated` and `published` values that are not RFC 3339
    /// timestamps
    pub check_dates: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            check_dates: true,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
