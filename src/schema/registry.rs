//! Registry of known form schemas.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use super::builtin::BUILTIN_SCHEMAS;
use super::spec::FormSchema;
use crate::error::{Error, Result};

/// Ordered collection of form schemas.
///
/// Registration order is classification priority: when several schemas'
/// identifiers appear in a document, the earliest registered wins.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: Vec<FormSchema>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    Many(Vec<FormSchema>),
    One(Box<FormSchema>),
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of built-in schemas (106Sum, 106A/B, 106D, 106E/F).
    ///
    /// Built lazily on first use and never mutated.
    pub fn builtin() -> &'static SchemaRegistry {
        static BUILTIN: OnceLock<SchemaRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = SchemaRegistry::new();
            for (name, json) in BUILTIN_SCHEMAS {
                let schema = FormSchema::from_json(json)
                    .unwrap_or_else(|e| panic!("built-in schema {} is invalid: {}", name, e));
                registry
                    .register(schema)
                    .unwrap_or_else(|e| panic!("built-in schema {} rejected: {}", name, e));
            }
            log::debug!("Loaded {} built-in form schemas", registry.len());
            registry
        })
    }

    /// Build a registry from a JSON schema object or array of schema objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let schemas = match serde_json::from_str::<SchemaDocument>(json) {
            Ok(SchemaDocument::Many(schemas)) => schemas,
            Ok(SchemaDocument::One(schema)) => vec![*schema],
            // untagged errors are opaque; re-parse as a single schema for a useful message
            Err(_) => vec![serde_json::from_str::<FormSchema>(json)?],
        };

        let mut registry = Self::new();
        for schema in schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Load a registry from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Register a schema after validating it.
    pub fn register(&mut self, schema: FormSchema) -> Result<()> {
        schema.validate()?;
        if self.get(&schema.id).is_some() {
            return Err(Error::InvalidSchema(format!(
                "duplicate form id '{}'",
                schema.id
            )));
        }
        self.schemas.push(schema);
        Ok(())
    }

    /// Get a schema by form id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&FormSchema> {
        self.schemas.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// All schemas in priority order.
    pub fn schemas(&self) -> &[FormSchema] {
        &self.schemas
    }

    /// Form ids in priority order.
    pub fn form_ids(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.id.as_str()).collect()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
