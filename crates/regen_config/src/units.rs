//! Unit construction: turning configured options into generation units.

use std::path::Path;

use regen_tracker::{ArtifactCoordinate, GenerationUnit, GenerationUnitSource, InputReference};

use crate::error::ConfigError;
use crate::types::{ProjectConfig, WsdlOption};

/// Name given to the unit built from `[defaults]`.
pub const DEFAULT_UNIT_NAME: &str = "default";

impl WsdlOption {
    /// Builds the generation unit for this option.
    ///
    /// A blank `wsdl` becomes an empty primary reference, which the tracker
    /// skips. Blank binding entries are skipped the same way.
    pub fn to_unit(&self, fallback_name: &str) -> Result<GenerationUnit, ConfigError> {
        let name = self
            .name
            .clone()
            .or_else(|| {
                self.wsdl
                    .as_deref()
                    .and_then(|w| Path::new(w.trim()).file_stem())
                    .map(|s| s.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| fallback_name.to_string());

        let mut unit = GenerationUnit::new(name);
        unit.primary = Some(InputReference::file(
            self.wsdl.as_deref().unwrap_or_default().trim(),
        ));
        unit.bindings = self
            .binding_files
            .iter()
            .map(|b| InputReference::file(b.trim()))
            .collect();
        unit.artifact = match self.artifact.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(s.parse::<ArtifactCoordinate>()?.into()),
            _ => None,
        };
        Ok(unit)
    }
}

impl ProjectConfig {
    /// The first non-blank primary WSDL across all options, defaults first.
    pub fn first_wsdl(&self) -> Option<&str> {
        self.defaults
            .iter()
            .chain(self.options.iter())
            .filter_map(|o| o.wsdl.as_deref().map(str::trim))
            .find(|w| !w.is_empty())
    }
}

impl GenerationUnitSource for ProjectConfig {
    type Error = ConfigError;

    /// Units in evaluation order: `[defaults]` first, then `[[options]]` in
    /// declaration order.
    fn generation_units(&self) -> Result<Vec<GenerationUnit>, ConfigError> {
        let mut units = Vec::with_capacity(self.options.len() + 1);
        if let Some(defaults) = &self.defaults {
            let mut unit = defaults.to_unit(DEFAULT_UNIT_NAME)?;
            if defaults.name.is_none() {
                unit.name = DEFAULT_UNIT_NAME.to_string();
            }
            units.push(unit);
        }
        for (i, option) in self.options.iter().enumerate() {
            units.push(option.to_unit(&format!("option-{}", i + 1))?);
        }
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    const CONFIG: &str = r#"
[project]
name = "billing-client"

[defaults]
binding_files = ["src/main/wsdl/common-binding.xml"]
artifact = "com.example:schemas:1.0"

[[options]]
wsdl = "src/main/wsdl/billing.wsdl"
binding_files = ["src/main/wsdl/b1.xml", "src/main/wsdl/b2.xml"]

[[options]]
name = "orders"
wsdl = "src/main/wsdl/orders.wsdl"

[[options]]
binding_files = ["", "x.xml"]
"#;

    #[test]
    fn units_in_declaration_order() {
        let config = load_config_from_str(CONFIG).unwrap();
        let units = config.generation_units().unwrap();
        let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["default", "billing", "orders", "option-3"]);
    }

    #[test]
    fn default_unit_has_empty_primary_and_artifact() {
        let config = load_config_from_str(CONFIG).unwrap();
        let units = config.generation_units().unwrap();
        let default = &units[0];
        assert!(default.primary.as_ref().unwrap().is_empty());
        let refs: Vec<String> = default.references().map(|r| r.to_string()).collect();
        assert_eq!(
            refs,
            vec![
                "src/main/wsdl/common-binding.xml",
                "com.example:schemas:wsdl:1.0"
            ]
        );
    }

    #[test]
    fn option_references_keep_binding_order() {
        let config = load_config_from_str(CONFIG).unwrap();
        let units = config.generation_units().unwrap();
        let refs: Vec<String> = units[1].references().map(|r| r.to_string()).collect();
        assert_eq!(
            refs,
            vec![
                "src/main/wsdl/billing.wsdl",
                "src/main/wsdl/b1.xml",
                "src/main/wsdl/b2.xml"
            ]
        );
    }

    #[test]
    fn blank_bindings_are_skipped() {
        let config = load_config_from_str(CONFIG).unwrap();
        let units = config.generation_units().unwrap();
        assert_eq!(units[3].references().count(), 1);
    }

    #[test]
    fn first_wsdl_skips_blank_defaults() {
        let config = load_config_from_str(CONFIG).unwrap();
        assert_eq!(config.first_wsdl(), Some("src/main/wsdl/billing.wsdl"));
    }

    #[test]
    fn no_units_without_options() {
        let config = load_config_from_str("[project]\nname = \"p\"\n").unwrap();
        assert!(config.generation_units().unwrap().is_empty());
        assert!(config.first_wsdl().is_none());
    }
}
