//! # uasgz-convert — ED-269 to ED-318 Conversion Engine
//!
//! Maps every entity of the legacy ED-269 model into its ED-318
//! counterpart, handling the shape differences between the two
//! standards: enums that were renamed, plain strings that became
//! localized-text arrays, single volumes that became geometry
//! collections, and time windows that prune to nothing.
//!
//! The engine is all-or-nothing over the input batch: the first per-zone
//! error aborts the whole conversion. Zones are processed strictly in
//! input order and each output feature id is the stringified zero-based
//! index of its source zone, so ids are stable and test-predictable.
//!
//! Data the target schema needs but the legacy document cannot provide
//! (default language, dataset metadata, bounding box) comes from
//! [`Ed318Additions`](uasgz_core::Ed318Additions), threaded by reference.

mod authority;
mod engine;
mod error;
mod geometry;
mod restriction;
mod temporal;

pub use authority::convert_authority;
pub use engine::convert;
pub use error::ConvertError;
pub use geometry::convert_volume;
pub use restriction::{convert_reasons, convert_restriction};
pub use temporal::convert_applicability;
