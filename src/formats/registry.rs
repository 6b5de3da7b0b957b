//! Format registry for exported trees
//!
//! Each output format implements the [`Formatter`] trait and is registered by name with a
//! [`FormatRegistry`]. The command-line tool looks formats up here, so adding one is a matter of
//! registering it in [`FormatRegistry::with_defaults`].

use super::export::export;
use super::treeviz::to_treeviz_str;
use crate::ast::CoordinateSystem;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Serializes a parsed coordinate system to text
pub trait Formatter: Send + Sync {
    /// The name this format is registered under
    fn name(&self) -> &str;

    fn serialize(&self, cs: &CoordinateSystem) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Compact or indented JSON of the exported mapping
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        if self.pretty {
            "json-pretty"
        } else {
            "json"
        }
    }

    fn serialize(&self, cs: &CoordinateSystem) -> Result<String, FormatError> {
        let value = export(cs);
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        text.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        if self.pretty {
            "Exported mapping as indented JSON"
        } else {
            "Exported mapping as single-line JSON"
        }
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, cs: &CoordinateSystem) -> Result<String, FormatError> {
        serde_yaml::to_string(&export(cs))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Exported mapping as YAML"
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, cs: &CoordinateSystem) -> Result<String, FormatError> {
        Ok(to_treeviz_str(cs))
    }

    fn description(&self) -> &str {
        "One line per node, indented by depth"
    }
}

/// Registry of formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, cs: &CoordinateSystem, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(cs)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormatter::compact());
        registry.register(JsonFormatter::pretty());
        registry.register(YamlFormatter);
        registry.register(TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Authority, LocalCs, Unit};

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _cs: &CoordinateSystem) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    fn local_cs() -> CoordinateSystem {
        CoordinateSystem::Local(LocalCs {
            name: "site".to_string(),
            local_datum: None,
            unit: Some(Unit {
                name: "metre".to_string(),
                conversion_factor: 1.0,
                authority: None,
            }),
            axis_list: vec![],
            authority: Some(Authority::new("EPSG", "5800")),
        })
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.serialize(&local_cs(), "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter);
        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.serialize(&local_cs(), "xml"),
            Err(FormatError::FormatNotFound("xml".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "json-pretty", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_json_formats_agree() {
        let registry = FormatRegistry::with_defaults();
        let compact = registry.serialize(&local_cs(), "json").unwrap();
        let pretty = registry.serialize(&local_cs(), "json-pretty").unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_yaml_format() {
        let registry = FormatRegistry::with_defaults();
        let yaml = registry.serialize(&local_cs(), "yaml").unwrap();
        assert!(yaml.starts_with("LOCAL_CS:"));
        assert!(yaml.contains("code: '5800'"));
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("test".to_string());
        assert_eq!(err.to_string(), "Format 'test' not found");
    }
}
