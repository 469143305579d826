//! # uasgz-cli — Command-Line Interface for the Geozone Stack
//!
//! Provides the `uasgz` binary. The one substantive subcommand is
//! `convert`, which runs the full pipeline: retrieve the ED-269 source
//! document, convert it to ED-318 with jurisdiction-supplied additions,
//! apply the configured adjustment passes in order, persist the output,
//! and validate it against the ED-318 schema set.
//!
//! ## Exit Codes
//!
//! - `0` — converted and validated cleanly.
//! - `1` — conversion or adjustment failed, or the output does not
//!   conform to the schema. The output file is still written before
//!   validation runs, so a non-conforming document can be inspected.
//! - `2` — operational error (unreadable configuration, network
//!   failure, malformed schema set).

pub mod convert;
