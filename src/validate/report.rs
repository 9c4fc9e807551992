use std::collections::BTreeMap;
use std::fmt;

/// Accumulated validation findings, keyed by dotted field path.
///
/// Paths address the failing field inside the document, e.g.
/// `bars.0.modules.1.config.interval`. Every entry keeps its messages in the
/// order they were reported; validation never stops at the first failure, so
/// a report always carries the complete set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    /// An empty (successful) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no errors were recorded.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records one error message at a field path.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(path.into())
            .or_default()
            .push(message.into());
    }

    /// Absorbs another report unchanged.
    pub fn merge(&mut self, other: ValidationReport) {
        for (path, messages) in other.errors {
            self.errors.entry(path).or_default().extend(messages);
        }
    }

    /// Absorbs another report with every path prefixed, as when nesting a
    /// module report under `bars.<i>.modules.<j>`.
    pub fn merge_under(&mut self, prefix: &str, other: ValidationReport) {
        for (path, messages) in other.errors {
            let nested = if path.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{path}")
            };
            self.errors.entry(nested).or_default().extend(messages);
        }
    }

    /// All recorded errors by path.
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Messages recorded for one exact path.
    pub fn messages_for(&self, path: &str) -> &[String] {
        self.errors.get(path).map_or(&[], Vec::as_slice)
    }

    /// Total number of messages across all paths.
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success() {
            return write!(f, "valid");
        }
        let mut first = true;
        for (path, messages) in &self.errors {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{path}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
