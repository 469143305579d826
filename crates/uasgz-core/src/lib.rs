//! # uasgz-core — Shared Data Model for the UAS Geozone Stack
//!
//! Defines the two wire models the stack converts between (the legacy
//! ED-269 UAS geozone model and the richer ED-318 model) together with
//! the localized-text representation both standards build on, the
//! converter configuration, and the country-to-region resolver.
//!
//! Every other crate in the workspace depends on `uasgz-core`; it depends
//! on nothing internal.
//!
//! ## Crate Policy
//!
//! - The ED-269 model is read-only input: parsed once, never mutated.
//! - Optional source fields are `Option<T>`: presence is explicit, never
//!   inferred from emptiness (the single documented exception lives in the
//!   authority converter, not here).
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod ed269;
pub mod ed318;
pub mod region;
pub mod text;

pub use config::{ConfigError, ConverterConfiguration, Ed318Additions};
pub use region::{resolve_region, UnknownCountryError};
pub use text::LocalizedText;
