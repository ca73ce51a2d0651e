use serde::Serialize;
use std::fmt;

/// Per-line classification emitted by the tree differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMarker {
    Unchanged,
    Removed,
    Added,
}

impl DiffMarker {
    pub fn symbol(self) -> char {
        match self {
            DiffMarker::Unchanged => ' ',
            DiffMarker::Removed => '-',
            DiffMarker::Added => '+',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(DiffMarker::Unchanged),
            '-' => Some(DiffMarker::Removed),
            '+' => Some(DiffMarker::Added),
            _ => None,
        }
    }

    pub fn is_change(self) -> bool {
        !matches!(self, DiffMarker::Unchanged)
    }
}

/// A rendered tree line with its marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub marker: DiffMarker,
    pub text: String,
}

impl DiffLine {
    pub fn new(marker: DiffMarker, text: impl Into<String>) -> Self {
        Self {
            marker,
            text: text.into(),
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(DiffMarker::Unchanged, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(DiffMarker::Removed, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(DiffMarker::Added, text)
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.marker.symbol(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_symbol() {
        assert_eq!(DiffLine::added("+--- a:b:1.0").to_string(), "++--- a:b:1.0");
        assert_eq!(DiffLine::removed("\\--- a:b:1.0").to_string(), "-\\--- a:b:1.0");
        assert_eq!(DiffLine::unchanged("+--- a:b:1.0").to_string(), " +--- a:b:1.0");
    }

    #[test]
    fn test_symbol_round_trip() {
        for marker in [DiffMarker::Unchanged, DiffMarker::Removed, DiffMarker::Added] {
            assert_eq!(DiffMarker::from_symbol(marker.symbol()), Some(marker));
        }
        assert_eq!(DiffMarker::from_symbol('~'), None);
    }

    #[test]
    fn test_serializes_marker_lowercase() {
        let json = serde_json::to_string(&DiffLine::removed("x")).unwrap();
        assert_eq!(json, r#"{"marker":"removed","text":"x"}"#);
    }
}
