//! Conversion between enum values and integers, and parsing of enum text.
//!
//! An enum is described by an [`EnumDescriptor`]: its ordered name/value
//! table and its [`UnderlyingType`]. On top of a descriptor this crate
//! provides:
//!
//! - binary conversion: [`to_value_binary`] widens an [`EnumValue`] to `i64`
//!   and [`to_enum_binary`] narrows an `i64` back, bit for bit.
//! - parsing: [`parse`] / [`try_parse`] read a decimal literal or a
//!   comma-separated list of names.
//!
//! Rust enums get a descriptor through [`EnumRepr`] (usually derived), which
//! also unlocks the typed helpers [`to_value_binary_of`],
//! [`to_enum_binary_of`], [`parse_as`] and [`try_parse_as`]. Descriptors of
//! such types are built once and cached process-wide.
//!
//! # Example
//!
//! ```
//! use sk_enums::derive::EnumRepr;
//! use sk_enums::{EnumRepr as _, parse, to_enum_binary, to_value_binary};
//!
//! #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
//! #[repr(u16)]
//! enum Access {
//!     Read = 1,
//!     Write = 2,
//!     Execute = 4,
//! }
//!
//! let descriptor = Access::descriptor();
//!
//! let value = parse("Read, Execute", false, descriptor).unwrap();
//! assert_eq!(to_value_binary(&value), Ok(5));
//!
//! // Not a declared variant, but a valid bit pattern.
//! let value = to_enum_binary(0x1_0006, descriptor).unwrap();
//! assert_eq!(value.to_bits(), Ok(6));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    sk_cfg::define_alias! {
        #[cfg(feature = "auto_register")] => auto_register,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `sk_enums`, which must also resolve inside
// the crate itself (unit tests and doctests).
extern crate self as sk_enums;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod descriptor;
mod error;
mod parse;
mod registry;
mod typed;
mod underlying;
mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use cache::DescriptorCache;
pub use descriptor::{EnumDescriptor, EnumEntry};
pub use error::EnumError;
pub use parse::{parse, try_parse};
pub use registry::EnumRegistry;
pub use typed::{EnumRepr, parse_as, to_enum_binary_of, to_value_binary_of, try_parse_as};
pub use underlying::{Discriminant, UnderlyingType};
pub use value::{EnumValue, to_enum_binary, to_value_binary};

pub use sk_enums_derive as derive;
