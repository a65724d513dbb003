//! Configuration file loading and validation.

use std::collections::HashSet;
use std::path::Path;

use regen_tracker::GenerationUnitSource;

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Name of the configuration file inside a project directory.
pub const CONFIG_FILE: &str = "regen.toml";

/// Loads and validates `regen.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `regen.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates required fields, artifact coordinates, and unit names.
///
/// Names are checked after resolution, so an unnamed option whose WSDL stem
/// matches another unit's name is rejected too.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.trim().is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.cache.dir.trim().is_empty() {
        return Err(ConfigError::MissingField("cache.dir".to_string()));
    }

    let units = config.generation_units()?;
    let mut seen = HashSet::new();
    for unit in &units {
        if !seen.insert(unit.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate generation unit name '{}'",
                unit.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regen_common::ChangeStrategy;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "billing-client"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "billing-client");
        assert!(config.defaults.is_none());
        assert!(config.options.is_empty());
        assert_eq!(config.cache.dir, ".regen-cache");
        assert_eq!(
            config.generator.source_root,
            "target/generated-sources/cxf"
        );
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "billing-client"
description = "SOAP client for the billing service"

[generator]
command = "wsdl2java"
args = ["-d", "{source_root}", "{wsdl}"]
source_root = "target/generated/src"

[cache]
dir = "target/.regen"
strategy = "modified"
repository = "/opt/repo"

[defaults]
wsdl = "src/main/wsdl/common.wsdl"
binding_files = ["src/main/wsdl/common-binding.xml"]
artifact = "com.example:schemas:1.0"

[[options]]
name = "billing"
wsdl = "src/main/wsdl/billing.wsdl"

[[options]]
wsdl = "src/main/wsdl/orders.wsdl"
binding_files = "src/main/wsdl/orders-binding.xml"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.generator.command.as_deref(), Some("wsdl2java"));
        assert_eq!(config.generator.args.len(), 3);
        assert_eq!(config.generator.source_root, "target/generated/src");
        assert_eq!(config.cache.strategy, ChangeStrategy::Modified);
        assert_eq!(config.cache.repository.as_deref(), Some("/opt/repo"));
        let defaults = config.defaults.as_ref().unwrap();
        assert_eq!(defaults.binding_files.len(), 1);
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options[1].binding_files, vec!["src/main/wsdl/orders-binding.xml"]);
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_strategy_errors() {
        let toml = r#"
[project]
name = "p"

[cache]
strategy = "mtime"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn malformed_artifact_errors() {
        let toml = r#"
[project]
name = "p"

[[options]]
wsdl = "a.wsdl"
artifact = "com.example:schemas"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArtifact(_)));
    }

    #[test]
    fn blank_artifact_is_allowed() {
        let toml = r#"
[project]
name = "p"

[defaults]
artifact = ""
"#;
        assert!(load_config_from_str(toml).is_ok());
    }

    #[test]
    fn duplicate_option_names_error() {
        let toml = r#"
[project]
name = "p"

[[options]]
name = "billing"
wsdl = "a.wsdl"

[[options]]
name = "billing"
wsdl = "b.wsdl"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn derived_name_clashing_with_explicit_name_errors() {
        let toml = r#"
[project]
name = "p"

[[options]]
name = "billing"
wsdl = "src/main/wsdl/legacy.wsdl"

[[options]]
wsdl = "src/main/wsdl/billing.wsdl"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("'billing'")),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn option_named_like_defaults_unit_errors() {
        let toml = r#"
[project]
name = "p"

[defaults]
wsdl = "common.wsdl"

[[options]]
name = "default"
wsdl = "a.wsdl"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[project]\nname = \"from-disk\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.project.name, "from-disk");
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
