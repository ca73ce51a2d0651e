use super::Coordinate;

/// One tree line of a dependency report, as parsed.
///
/// `raw` is kept verbatim (indentation and branch glyphs included) so the
/// full differ can echo source lines instead of synthesizing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLine {
    /// 1-based position in the source text
    pub line_number: usize,
    pub raw: String,
    /// Indentation plus connector, e.g. `|    \--- `
    pub prefix: String,
    /// Coordinate text after the connector
    pub content: String,
    pub coordinate: Coordinate,
    pub depth: usize,
}

impl DependencyLine {
    pub fn identity(&self) -> &str {
        &self.coordinate.identity
    }

    pub fn version(&self) -> &str {
        &self.coordinate.version
    }

    pub fn is_project(&self) -> bool {
        self.coordinate.is_project
    }

    /// `identity@version`, the key used for exact-release lookups.
    pub fn release_key(&self) -> String {
        format!("{}@{}", self.identity(), self.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &str, prefix_len: usize, depth: usize) -> DependencyLine {
        DependencyLine {
            line_number: 1,
            raw: raw.to_string(),
            prefix: raw[..prefix_len].to_string(),
            content: raw[prefix_len..].to_string(),
            coordinate: Coordinate::parse(&raw[prefix_len..]),
            depth,
        }
    }

    #[test]
    fn test_accessors_delegate_to_coordinate() {
        let dep = line("|    +--- io.ktor:ktor-client-core:2.3.4", 10, 1);
        assert_eq!(dep.identity(), "io.ktor:ktor-client-core");
        assert_eq!(dep.version(), "2.3.4");
        assert!(!dep.is_project());
        assert_eq!(dep.prefix, "|    +--- ");
    }

    #[test]
    fn test_release_key() {
        let dep = line("+--- project :core", 5, 0);
        assert_eq!(dep.release_key(), "project :core@");
        assert!(dep.is_project());
    }
}
