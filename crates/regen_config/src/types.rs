//! Configuration types deserialized from `regen.toml`.

use regen_common::ChangeStrategy;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Default directory generated sources are written to.
pub const DEFAULT_SOURCE_ROOT: &str = "target/generated-sources/cxf";

/// Default cache directory, relative to the project directory.
pub const DEFAULT_CACHE_DIR: &str = ".regen-cache";

/// The top-level project configuration parsed from `regen.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// The external code generator.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Change-record location and detection strategy.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Inputs shared by every invocation, evaluated before `options`.
    #[serde(default)]
    pub defaults: Option<WsdlOption>,
    /// Per-WSDL options, evaluated in declaration order.
    #[serde(default)]
    pub options: Vec<WsdlOption>,
}

/// Core project metadata.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// How to invoke the code generator.
#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    /// Executable to run. Required by `regen build`.
    #[serde(default)]
    pub command: Option<String>,
    /// Arguments. `{source_root}`, `{wsdl}` and `{project}` are expanded.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub args: Vec<String>,
    /// Directory the generator writes into, refreshed after a build.
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            source_root: default_source_root(),
        }
    }
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

/// Where the change record lives and how changes are detected.
#[derive(Debug, Deserialize)]
pub struct CacheConfig {
    /// Cache directory, relative to the project directory.
    #[serde(default = "default_cache_dir")]
    pub dir: String,
    /// Change-detection strategy.
    #[serde(default)]
    pub strategy: ChangeStrategy,
    /// Local artifact repository root. Defaults to `~/.m2/repository`.
    #[serde(default)]
    pub repository: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            strategy: ChangeStrategy::default(),
            repository: None,
        }
    }
}

fn default_cache_dir() -> String {
    DEFAULT_CACHE_DIR.to_string()
}

/// One set of generator inputs.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WsdlOption {
    /// Display name. Falls back to the WSDL file stem.
    #[serde(default)]
    pub name: Option<String>,
    /// The WSDL document. Empty or absent means no primary input.
    #[serde(default)]
    pub wsdl: Option<String>,
    /// Binding customization files, in evaluation order.
    ///
    /// Accepts a single string or a list of strings.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub binding_files: Vec<String>,
    /// Artifact coordinate, e.g. `com.example:schemas:1.0`.
    #[serde(default)]
    pub artifact: Option<String>,
}

/// Deserializes a field that can be either a single string or a list of strings.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
