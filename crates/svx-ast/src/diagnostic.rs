//! Non-fatal diagnostics for rejected tags.

use std::fmt;

/// A human-readable message describing why a tag was rejected and removed.
///
/// Diagnostics never abort document processing; the worst outcome of a
/// malformed tag is its own removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the plugin that emitted the diagnostic.
    pub plugin: &'static str,
    /// Message text, including the offending tag's original literal text.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.plugin, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_plugin_name() {
        let diagnostic = Diagnostic {
            plugin: "gallery",
            message: "missing src attribute".to_owned(),
        };
        assert_eq!(diagnostic.to_string(), "[gallery] missing src attribute");
    }
}
