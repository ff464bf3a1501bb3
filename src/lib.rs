//! Storage accessors and enum value conversion.
//!
//! This crate only re-exports the workspace members under short names:
//!
//! - [`cfg`]: feature alias macros.
//! - [`utils`]: hash containers and [`TypeIdMap`](utils::TypeIdMap).
//! - [`access`]: `Readable` / `Writable` accessors over storage locations.
//! - [`enums`]: binary conversion and text parsing of enum values.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sk_access as access;
pub use sk_cfg as cfg;
pub use sk_enums as enums;
pub use sk_utils as utils;
