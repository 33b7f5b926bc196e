//! Schema validation of extracted entities
//!
//! Schemas are JSON Schema documents looked up per `(insurance_type, document_type)`
//! from a [`SchemaRegistry`]. Validation never fails: a missing schema, an
//! unreadable schema, or a schema that cannot be compiled all degrade to
//! [`ValidationResult::Skipped`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{parse_pair, CoreError, DocumentType, InsuranceType};

use crate::entities::EntitySet;
use crate::error::SchemaRegistryError;

/// Reason recorded when no schema is registered for a form
pub const SCHEMA_PENDING: &str = "schema_pending";

/// Outcome of validating one entity set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid { reason: String },
    Skipped { reason: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ValidationResult::Skipped { .. })
    }
}

/// Source of declarative schemas keyed by form
pub trait SchemaRegistry: Send + Sync {
    /// Returns the schema for a form, `None` if none is registered
    fn lookup(
        &self,
        insurance_type: InsuranceType,
        document_type: DocumentType,
    ) -> Result<Option<Value>, SchemaRegistryError>;
}

/// Registry with no schemas at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSchemas;

impl SchemaRegistry for NoSchemas {
    fn lookup(&self, _: InsuranceType, _: DocumentType) -> Result<Option<Value>, SchemaRegistryError> {
        Ok(None)
    }
}

/// Registry held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaRegistry {
    schemas: HashMap<(InsuranceType, DocumentType), Value>,
}

impl InMemorySchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, insurance_type: InsuranceType, document_type: DocumentType, schema: Value) {
        self.schemas.insert((insurance_type, document_type), schema);
    }

    /// Registers a schema under string keys such as `("vehicle", "rc")`
    pub fn insert_named(
        &mut self,
        insurance_type: &str,
        document_type: &str,
        schema: Value,
    ) -> Result<(), CoreError> {
        let (insurance, document) = parse_pair(insurance_type, document_type)?;
        self.insert(insurance, document, schema);
        Ok(())
    }

    pub fn with_schema(mut self, insurance_type: InsuranceType, document_type: DocumentType, schema: Value) -> Self {
        self.insert(insurance_type, document_type, schema);
        self
    }
}

impl SchemaRegistry for InMemorySchemaRegistry {
    fn lookup(
        &self,
        insurance_type: InsuranceType,
        document_type: DocumentType,
    ) -> Result<Option<Value>, SchemaRegistryError> {
        Ok(self.schemas.get(&(insurance_type, document_type)).cloned())
    }
}

/// Registry reading `<root>/<insurance_type>/<document_type>.schema.json`
#[derive(Debug, Clone)]
pub struct DirectorySchemaRegistry {
    root: PathBuf,
}

impl DirectorySchemaRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn schema_path(&self, insurance_type: InsuranceType, document_type: DocumentType) -> PathBuf {
        self.root
            .join(insurance_type.as_str())
            .join(format!("{}.schema.json", document_type.as_str()))
    }
}

impl SchemaRegistry for DirectorySchemaRegistry {
    fn lookup(
        &self,
        insurance_type: InsuranceType,
        document_type: DocumentType,
    ) -> Result<Option<Value>, SchemaRegistryError> {
        let path = self.schema_path(insurance_type, document_type);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| SchemaRegistryError::Io {
            path: path.clone(),
            source,
        })?;

        let schema = serde_json::from_str(&content).map_err(|e| SchemaRegistryError::Parse {
            path,
            message: e.to_string(),
        })?;

        Ok(Some(schema))
    }
}

/// Validates an entity set against the schema registered for its form.
pub fn validate(
    entities: &EntitySet,
    insurance_type: InsuranceType,
    document_type: DocumentType,
    registry: &dyn SchemaRegistry,
) -> ValidationResult {
    let schema = match registry.lookup(insurance_type, document_type) {
        Ok(Some(schema)) => schema,
        Ok(None) => {
            return ValidationResult::Skipped {
                reason: SCHEMA_PENDING.to_string(),
            }
        }
        Err(error) => {
            tracing::warn!(%error, "schema lookup failed");
            return ValidationResult::Skipped {
                reason: format!("schema_unavailable: {}", error),
            };
        }
    };

    let validator = match jsonschema::validator_for(&schema) {
        Ok(validator) => validator,
        Err(error) => {
            tracing::warn!(
                insurance_type = %insurance_type,
                document_type = %document_type,
                %error,
                "schema cannot be compiled"
            );
            return ValidationResult::Skipped {
                reason: format!("schema_unusable: {}", error),
            };
        }
    };

    let instance = entities.to_json();
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                e.to_string()
            } else {
                format!("at '{}': {}", path, e)
            }
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid {
            reason: errors.join("; "),
        }
    }
}
