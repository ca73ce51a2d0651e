/// Token that starts an intra-build module reference (`project :app`).
pub const PROJECT_MARKER: &str = "project";

/// Separator between a declared version and the version the build resolved.
pub const RESOLUTION_ARROW: &str = " -> ";

/// Normalized identity and resolved version of one tree entry.
///
/// `identity` is `group:artifact` for external libraries or the literal
/// `project :path` token for modules, which carry no version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub identity: String,
    pub version: String,
    pub is_project: bool,
    well_formed: bool,
}

impl Coordinate {
    /// Normalizes the coordinate text that follows a branch connector.
    ///
    /// - a trailing `(...)` annotation such as `(*)` or `(c)` is dropped
    /// - `project :x` keeps the whole text as identity and an empty version
    /// - `g:a:1.0 -> 2.0` resolves to identity `g:a`, version `2.0`
    /// - `g:a:1.0` splits on the last colon
    /// - text without any colon becomes the identity, flagged as malformed
    pub fn parse(content: &str) -> Self {
        let text = strip_annotation(content.trim());

        if is_project_reference(text) {
            return Self {
                identity: text.to_string(),
                version: String::new(),
                is_project: true,
                well_formed: true,
            };
        }

        if let Some((declared, resolved)) = text.split_once(RESOLUTION_ARROW) {
            let declared = declared.trim();
            // `g:a -> 1.0` (platform-managed) has no declared version to strip
            let identity = match declared.rsplit_once(':') {
                Some((head, _)) if head.contains(':') => head,
                _ => declared,
            };
            return Self {
                identity: identity.to_string(),
                version: first_token(resolved).to_string(),
                is_project: false,
                well_formed: declared.contains(':'),
            };
        }

        match text.rsplit_once(':') {
            Some((identity, version)) => Self {
                identity: identity.to_string(),
                version: first_token(version).to_string(),
                is_project: false,
                well_formed: true,
            },
            None => Self {
                identity: text.to_string(),
                version: String::new(),
                is_project: false,
                well_formed: false,
            },
        }
    }

    /// False when a non-project coordinate had no `group:artifact` separator.
    pub fn is_well_formed(&self) -> bool {
        self.well_formed
    }

    /// True for `(identity, version)` equality, the key every differ matches on.
    pub fn same_release(&self, other: &Coordinate) -> bool {
        self.identity == other.identity && self.version == other.version
    }
}

fn strip_annotation(text: &str) -> &str {
    if !text.ends_with(')') {
        return text;
    }
    match text.find('(') {
        Some(open) => text[..open].trim_end(),
        None => text,
    }
}

fn is_project_reference(text: &str) -> bool {
    text.strip_prefix(PROJECT_MARKER)
        .map(|rest| rest.trim_start().starts_with(':'))
        .unwrap_or(false)
}

fn first_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_coordinate() {
        let coordinate = Coordinate::parse("com.squareup.okio:okio:3.6.0");
        assert_eq!(coordinate.identity, "com.squareup.okio:okio");
        assert_eq!(coordinate.version, "3.6.0");
        assert!(!coordinate.is_project);
        assert!(coordinate.is_well_formed());
    }

    #[test]
    fn test_parse_resolution_arrow_takes_resolved_version() {
        let coordinate = Coordinate::parse("androidx.core:core:1.0.0 -> 1.9.0");
        assert_eq!(coordinate.identity, "androidx.core:core");
        assert_eq!(coordinate.version, "1.9.0");
    }

    #[test]
    fn test_parse_strips_trailing_annotation() {
        let coordinate = Coordinate::parse("org.jetbrains:annotations:13.0 -> 23.0.0 (*)");
        assert_eq!(coordinate.identity, "org.jetbrains:annotations");
        assert_eq!(coordinate.version, "23.0.0");

        let constraint = Coordinate::parse("androidx.lifecycle:lifecycle-common:2.6.1 (c)");
        assert_eq!(constraint.version, "2.6.1");
    }

    #[test]
    fn test_parse_project_reference() {
        let coordinate = Coordinate::parse("project :feature:player (*)");
        assert_eq!(coordinate.identity, "project :feature:player");
        assert_eq!(coordinate.version, "");
        assert!(coordinate.is_project);
        assert!(coordinate.is_well_formed());
    }

    #[test]
    fn test_parse_platform_managed_arrow_keeps_group_and_artifact() {
        let coordinate = Coordinate::parse("org.jetbrains.kotlin:kotlin-stdlib -> 1.9.22");
        assert_eq!(coordinate.identity, "org.jetbrains.kotlin:kotlin-stdlib");
        assert_eq!(coordinate.version, "1.9.22");
    }

    #[test]
    fn test_parse_version_keeps_first_token_only() {
        let coordinate = Coordinate::parse("io.grpc:grpc-api:1.57.0 FAILED");
        assert_eq!(coordinate.identity, "io.grpc:grpc-api");
        assert_eq!(coordinate.version, "1.57.0");
    }

    #[test]
    fn test_parse_strict_version_constraint() {
        let coordinate = Coordinate::parse("com.google.guava:guava:{strictly 32.1.3-android} -> 32.1.3-android");
        assert_eq!(coordinate.identity, "com.google.guava:guava");
        assert_eq!(coordinate.version, "32.1.3-android");
    }

    #[test]
    fn test_parse_without_colon_is_malformed() {
        let coordinate = Coordinate::parse("garbage");
        assert_eq!(coordinate.identity, "garbage");
        assert_eq!(coordinate.version, "");
        assert!(!coordinate.is_well_formed());
    }

    #[test]
    fn test_same_release() {
        let a = Coordinate::parse("a:b:1.0");
        let b = Coordinate::parse("a:b:0.9 -> 1.0");
        let c = Coordinate::parse("a:b:2.0");
        assert!(a.same_release(&b));
        assert!(!a.same_release(&c));
    }
}
