//! How change detectors decide that an input changed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Change-detection strategy for file inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStrategy {
    /// Compare content hashes on every check.
    #[default]
    Content,
    /// Compare modification time and length only.
    Modified,
}

impl fmt::Display for ChangeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Content => "content",
            Self::Modified => "modified",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_content() {
        assert_eq!(ChangeStrategy::default(), ChangeStrategy::Content);
    }

    #[test]
    fn display_matches_serde_name() {
        for s in [ChangeStrategy::Content, ChangeStrategy::Modified] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{s}\""));
        }
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&ChangeStrategy::Modified).unwrap();
        assert_eq!(json, "\"modified\"");
    }
}
