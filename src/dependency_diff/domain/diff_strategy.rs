use serde::Serialize;

/// Interchangeable comparison algorithms over the shared parse model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffStrategy {
    /// Forest merge in the new report's order, every line shown
    #[default]
    Full,
    /// Forest merge with unchanged lines dropped
    OnlyChanges,
    /// Resolved-version summary per coordinate
    Flattened,
    /// Path-set reconstruction with sorted siblings
    LegacyPathSet,
}

impl std::str::FromStr for DiffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "tree" => Ok(DiffStrategy::Full),
            "only-changes" | "changes" | "only" => Ok(DiffStrategy::OnlyChanges),
            "flattened" | "flat" | "summary" => Ok(DiffStrategy::Flattened),
            "legacy" | "path-set" | "legacy-path-set" => Ok(DiffStrategy::LegacyPathSet),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'full', 'only-changes', 'flattened' or 'legacy'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DiffStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffStrategy::Full => write!(f, "full"),
            DiffStrategy::OnlyChanges => write!(f, "only-changes"),
            DiffStrategy::Flattened => write!(f, "flattened"),
            DiffStrategy::LegacyPathSet => write!(f, "legacy"),
        }
    }
}
