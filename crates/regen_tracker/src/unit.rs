//! Generation units and the interface hosts use to supply them.

use crate::input::InputReference;

/// The inputs relevant to one code-generator invocation.
///
/// Built fresh for every build pass from the host's configuration and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationUnit {
    /// Human-readable name used in logs and reports.
    pub name: String,
    /// The primary input, e.g. the WSDL document.
    pub primary: Option<InputReference>,
    /// Auxiliary binding inputs, in declaration order.
    pub bindings: Vec<InputReference>,
    /// An optional resolved artifact.
    pub artifact: Option<InputReference>,
}

impl GenerationUnit {
    /// Creates an empty unit with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the primary input.
    pub fn with_primary(mut self, primary: InputReference) -> Self {
        self.primary = Some(primary);
        self
    }

    /// Appends a binding input.
    pub fn with_binding(mut self, binding: InputReference) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Sets the artifact input.
    pub fn with_artifact(mut self, artifact: InputReference) -> Self {
        self.artifact = Some(artifact);
        self
    }

    /// Iterates over the non-empty references in evaluation order:
    /// primary, bindings in list order, then artifact.
    pub fn references(&self) -> impl Iterator<Item = &InputReference> {
        self.primary
            .iter()
            .chain(self.bindings.iter())
            .chain(self.artifact.iter())
            .filter(|r| !r.is_empty())
    }

    /// Returns `true` if the unit has no non-empty references.
    pub fn is_empty(&self) -> bool {
        self.references().next().is_none()
    }
}

/// Supplies the ordered generation units for a build pass.
///
/// Implemented by whatever configuration mechanism the host uses. Errors
/// here are configuration problems and must be handled before the tracker
/// is invoked.
pub trait GenerationUnitSource {
    /// Error produced when the units cannot be constructed.
    type Error;

    /// Returns the units in the order they should be evaluated.
    fn generation_units(&self) -> Result<Vec<GenerationUnit>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ArtifactCoordinate;

    #[test]
    fn references_in_fixed_order() {
        let unit = GenerationUnit::new("u")
            .with_artifact(ArtifactCoordinate::new("g", "a", "1").into())
            .with_binding(InputReference::file("b1.xml"))
            .with_primary(InputReference::file("a.wsdl"))
            .with_binding(InputReference::file("b2.xml"));

        let order: Vec<String> = unit.references().map(|r| r.to_string()).collect();
        assert_eq!(order, vec!["a.wsdl", "b1.xml", "b2.xml", "g:a:wsdl:1"]);
    }

    #[test]
    fn empty_references_skipped() {
        let unit = GenerationUnit::new("u")
            .with_primary(InputReference::file(""))
            .with_binding(InputReference::file("b.xml"));
        assert_eq!(unit.references().count(), 1);
    }

    #[test]
    fn default_unit_is_empty() {
        assert!(GenerationUnit::new("nothing").is_empty());
        let only_blank = GenerationUnit::new("blank").with_primary(InputReference::file(""));
        assert!(only_blank.is_empty());
    }
}
