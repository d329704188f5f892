use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// The text occupying one grid cell.
///
/// A label is never empty but may be longer than one character, e.g. a `qu` tile.
/// Labels are compared and concatenated as raw strings; no case folding is applied.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Label(String);

impl Label {
    /// Wrap `text` as a label, or return [`None`] if it is empty.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        match text.is_empty() {
            true => None,
            false => Some(Self(text)),
        }
    }

    /// The label's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_multi_char(&self) -> bool {
        self.0.chars().nth(1).is_some()
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
