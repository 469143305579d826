//! Schema loading, reference resolution, and validation.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{BasicOutput, Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

/// Filename of the root schema inside the schema directory.
pub const ROOT_SCHEMA: &str = "Schema_GeoZones.json";

/// Error while loading or compiling the schema set.
///
/// Ordinary validation failures of a data document are *not* errors;
/// they are returned as [`Violation`]s by [`SchemaValidator::validate`].
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A schema file could not be read or parsed as JSON.
    #[error("schema load error for '{schema}': {reason}")]
    SchemaLoad {
        /// Schema filename or path.
        schema: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The schema set failed its self-check against the meta-schema.
    #[error("invalid schema '{schema}': {reason}")]
    InvalidSchema {
        /// Schema filename or path.
        schema: String,
        /// Meta-validation diagnostic.
        reason: String,
    },

    /// IO error reading the schema directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single flattened validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating location in the instance.
    pub instance_path: String,
    /// JSON Pointer into the schema keyword that failed.
    pub keyword_path: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Resolves `$ref` URIs to schema fragment files in the schema
/// directory. References are relative file names; only the final path
/// segment is used, so the graph stays closed over one directory and no
/// network request is ever made.
struct DirectoryRetriever {
    schema_dir: PathBuf,
}

impl Retrieve for DirectoryRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        let path = self.schema_dir.join(filename);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read referenced schema '{}': {e}", path.display()))?;
        let value = serde_json::from_str(&content)
            .map_err(|e| format!("referenced schema '{}' is not valid JSON: {e}", path.display()))?;
        Ok(value)
    }
}

/// A compiled validator for the ED-318 schema set.
#[derive(Debug)]
pub struct SchemaValidator {
    schema_dir: PathBuf,
    validator: Validator,
}

impl SchemaValidator {
    /// Load the root schema from `schema_dir`, self-check it against its
    /// meta-schema, and compile it with cross-file reference resolution.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the root schema cannot be read, when
    /// any schema in the set is malformed, or when a referenced fragment
    /// is missing. Data documents are not involved yet; this constructor
    /// only judges the schema set itself.
    pub fn new(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let root_path = schema_dir.join(ROOT_SCHEMA);

        let content =
            std::fs::read_to_string(&root_path).map_err(|e| SchemaError::SchemaLoad {
                schema: root_path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            })?;
        let root: Value = serde_json::from_str(&content).map_err(|e| SchemaError::SchemaLoad {
            schema: root_path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;

        // Self-check before any data validation: a malformed schema must
        // fail here, not surface as spurious data violations.
        jsonschema::meta::validate(&root).map_err(|e| SchemaError::InvalidSchema {
            schema: root_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft7);
        options.with_retriever(DirectoryRetriever {
            schema_dir: schema_dir.clone(),
        });

        let validator = options.build(&root).map_err(|e| SchemaError::SchemaLoad {
            schema: root_path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            schema_dir,
            validator,
        })
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Validate a document against the schema set.
    ///
    /// Returns every violation, flattened to leaf causes; an empty list
    /// means the document conforms. This never fails for ordinary
    /// violations; the caller decides whether a non-empty list is
    /// fatal.
    pub fn validate(&self, instance: &Value) -> Vec<Violation> {
        match self.validator.apply(instance).basic() {
            BasicOutput::Valid(_) => Vec::new(),
            BasicOutput::Invalid(errors) => errors
                .iter()
                .map(|unit| Violation {
                    instance_path: unit.instance_location().to_string(),
                    keyword_path: unit.keyword_location().to_string(),
                    message: unit.error_description().to_string(),
                })
                .collect(),
        }
    }
}
