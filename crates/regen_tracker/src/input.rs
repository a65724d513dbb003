//! Input references: the files and artifacts a generator consumes.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Packaging type assumed when a coordinate does not name one.
pub const DEFAULT_ARTIFACT_TYPE: &str = "wsdl";

/// An identifier for one input that influences code generation.
///
/// The [`Display`](fmt::Display) form is stable and is used by change
/// detectors as the key for persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputReference {
    /// A file on disk, typically relative to the project directory.
    File(PathBuf),
    /// An artifact in a repository, resolved to a file by the host.
    Artifact(ArtifactCoordinate),
}

impl InputReference {
    /// Creates a file reference.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Returns `true` for references that carry no input at all.
    ///
    /// Empty references are skipped by the tracker: never stale, never
    /// recorded.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::File(path) => path.as_os_str().is_empty(),
            Self::Artifact(_) => false,
        }
    }
}

impl fmt::Display for InputReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Artifact(coord) => write!(f, "{coord}"),
        }
    }
}

impl From<ArtifactCoordinate> for InputReference {
    fn from(coord: ArtifactCoordinate) -> Self {
        Self::Artifact(coord)
    }
}

/// Error returned when a coordinate string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid artifact coordinate '{input}': {reason}")]
pub struct ParseCoordinateError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Repository coordinates of an artifact.
///
/// Accepted string forms follow the usual repository ordering:
///
/// - `group:artifact:version`
/// - `group:artifact:type:version`
/// - `group:artifact:type:classifier:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    /// Group identifier, e.g. `com.example`.
    pub group: String,
    /// Artifact identifier.
    pub artifact: String,
    /// Version string.
    pub version: String,
    /// Packaging type / file extension.
    pub kind: String,
    /// Optional classifier.
    pub classifier: Option<String>,
}

impl ArtifactCoordinate {
    /// Creates a coordinate with the default type and no classifier.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            kind: DEFAULT_ARTIFACT_TYPE.to_string(),
            classifier: None,
        }
    }

    /// File name of the artifact inside its version directory.
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(c) => format!("{}-{}-{}.{}", self.artifact, self.version, c, self.kind),
            None => format!("{}-{}.{}", self.artifact, self.version, self.kind),
        }
    }
}

impl FromStr for ArtifactCoordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| ParseCoordinateError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(fail("empty segment"));
        }
        let parts: Vec<&str> = parts.into_iter().map(str::trim).collect();

        let (kind, classifier, version) = match parts.as_slice() {
            [_, _, v] => (DEFAULT_ARTIFACT_TYPE, None, *v),
            [_, _, t, v] => (*t, None, *v),
            [_, _, t, c, v] => (*t, Some(c.to_string()), *v),
            _ => return Err(fail("expected 3 to 5 ':'-separated segments")),
        };

        Ok(Self {
            group: parts[0].to_string(),
            artifact: parts[1].to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
            classifier,
        })
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.kind)?;
        if let Some(c) = &self.classifier {
            write!(f, ":{c}")?;
        }
        write!(f, ":{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_reference() {
        assert!(InputReference::file("").is_empty());
        assert!(!InputReference::file("a.wsdl").is_empty());
    }

    #[test]
    fn artifact_reference_never_empty() {
        let r = InputReference::from(ArtifactCoordinate::new("g", "a", "1"));
        assert!(!r.is_empty());
    }

    #[test]
    fn parse_three_segments() {
        let c: ArtifactCoordinate = "com.example:schemas:1.0".parse().unwrap();
        assert_eq!(c.group, "com.example");
        assert_eq!(c.artifact, "schemas");
        assert_eq!(c.version, "1.0");
        assert_eq!(c.kind, "wsdl");
        assert!(c.classifier.is_none());
    }

    #[test]
    fn parse_with_type() {
        let c: ArtifactCoordinate = "com.example:schemas:xsd:2.1".parse().unwrap();
        assert_eq!(c.kind, "xsd");
        assert_eq!(c.version, "2.1");
    }

    #[test]
    fn parse_with_classifier() {
        let c: ArtifactCoordinate = "com.example:billing:wsdl:service:1.2".parse().unwrap();
        assert_eq!(c.classifier.as_deref(), Some("service"));
        assert_eq!(c.file_name(), "billing-1.2-service.wsdl");
    }

    #[test]
    fn parse_rejects_too_few_segments() {
        assert!("com.example:schemas".parse::<ArtifactCoordinate>().is_err());
    }

    #[test]
    fn parse_rejects_empty_segment() {
        let err = "com.example::1.0".parse::<ArtifactCoordinate>().unwrap_err();
        assert_eq!(err.reason, "empty segment");
    }

    #[test]
    fn display_is_canonical() {
        let c: ArtifactCoordinate = "com.example:schemas:1.0".parse().unwrap();
        assert_eq!(c.to_string(), "com.example:schemas:wsdl:1.0");
        let again: ArtifactCoordinate = c.to_string().parse().unwrap();
        assert_eq!(c, again);
    }

    #[test]
    fn file_reference_display() {
        let r = InputReference::file("src/main/wsdl/a.wsdl");
        assert_eq!(r.to_string(), "src/main/wsdl/a.wsdl");
    }
}
