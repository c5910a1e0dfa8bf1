//! Detection of `<changelog>...</changelog>` blocks in pull request
//! descriptions.
use regex::Regex;

use crate::Result;

/// Opening tag of a changelog block.
pub const OPEN_TAG: &str = "<changelog>";
/// Closing tag of a changelog block.
pub const CLOSE_TAG: &str = "</changelog>";

/// Text captured between the first opening tag and the first closing tag
/// that follows it on the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry(pub String);

impl ChangelogEntry {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compiled changelog block matcher.
///
/// Content must be at least one character and may not span lines; an
/// empty `<changelog></changelog>` block does not count.
#[derive(Debug, Clone)]
pub struct ChangelogPattern {
    re: Regex,
}

impl ChangelogPattern {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            "{}(.+?){}",
            regex::escape(OPEN_TAG),
            regex::escape(CLOSE_TAG)
        );
        let re = Regex::new(&pattern)?;
        Ok(Self { re })
    }

    /// Returns the first changelog entry found in `text`, if any.
    pub fn find(&self, text: &str) -> Option<ChangelogEntry> {
        self.re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| ChangelogEntry(m.as_str().to_string()))
    }
}
