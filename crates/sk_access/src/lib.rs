//! Uniform read / write access to storage locations.
//!
//! A storage location is anything holding one value: a struct field, a slice
//! element, a box, or a getter / setter pair. Accessors expose it through
//! capability traits:
//!
//! - [`Readable`]: read the value.
//! - [`Writable`]: replace the value.
//! - [`ReadWritable`]: both, implemented for every type that is both.
//! - [`Referable`]: borrow the location itself.
//!
//! [`ReadAccessor`], [`WriteAccessor`] and [`ReadWriteAccessor`] are their
//! type-erased counterparts, usable as trait objects.
//!
//! # Example
//!
//! ```
//! use sk_access::{FieldAccessor, ReadWritable, Readable};
//!
//! struct Player { hp: u32 }
//!
//! let mut player = Player { hp: 10 };
//! let mut hp = FieldAccessor::new(&mut player, |p| &p.hp, |p| &mut p.hp);
//!
//! hp.update(|hp| hp + 5);
//! assert_eq!(hp.read(), 15);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod erased;
mod error;
mod storage;
mod traits;
mod value_type;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use erased::{AnyAccessor, ReadAccessor, ReadWriteAccessor, WriteAccessor};
pub use error::AccessError;
pub use storage::{BoxAccessor, ElementAccessor, FieldAccessor, FieldReader, FnAccessor, ReadFn, WriteFn};
pub use traits::{ReadWritable, Readable, Referable, StorageAccessor, Writable};
pub use value_type::ValueType;
