//! # uasgz-schema — ED-318 Document Validation
//!
//! Validates a converted document against the ED-318 JSON Schema set: a
//! root schema plus a directory of fragment files it references. The
//! reference graph is closed: every `$ref` resolves to a file in the
//! same directory, never the network.
//!
//! ## Violation Reporting
//!
//! Compound failures (branches of `anyOf`/`oneOf`/`allOf`) are
//! flattened: a failing branch contributes its leaf causes, each tagged
//! with its own instance location, never the parent wrapper message
//! alone. Ordinary violations are returned as data; an error is raised
//! only for a malformed schema set itself, caught by an upfront
//! self-check before any data is validated.

mod validate;

pub use validate::{SchemaError, SchemaValidator, Violation, ROOT_SCHEMA};
