//! Non-fatal findings reported while reading a document.

use std::fmt;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// A tolerable construct the codec does not recognize, or legal but
    /// discouraged content
    Warning,
    /// A violated mandatory constraint; the document cannot be written back
    /// until it is fixed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One error or warning, tied to the node it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Location of the offending node, e.g. `/feed/entry[2]/link[1]`
    pub path: String,
    /// Tag name of the offending element as written in the document
    pub element: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(path: impl Into<String>, element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            element: element.into(),
            message: message.into(),
        }
    }

    pub fn error(path: impl Into<String>, element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            element: element.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} <{}>: {}", self.severity, self.path, self.element, self.message)
    }
}

/// Receiver for diagnostics, invoked synchronously as the parser finds them.
///
/// Implemented for `Vec<Diagnostic>` (collect everything) and for any
/// `FnMut(&Diagnostic)` closure (log, count, or ignore).
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(&diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut warnings = 0;
        {
            let mut sink = |d: &Diagnostic| {
                if !d.is_error() {
                    warnings += 1;
                }
            };
            sink.report(Diagnostic::warning("/feed/foo", "foo", "unknown element"));
            sink.report(Diagnostic::error("/feed", "feed", "missing required field 'id'"));
        }
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::warning("/feed/foo[1]", "foo", "unknown element");
        assert_eq!(d.to_string(), "warning at /feed/foo[1] <foo>: unknown element");
    }
}
