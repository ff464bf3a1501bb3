//! Accessor implementations for the supported kinds of storage.

mod boxed;
mod element;
mod field;
mod func;

pub use boxed::BoxAccessor;
pub use element::ElementAccessor;
pub use field::{FieldAccessor, FieldReader};
pub use func::{FnAccessor, ReadFn, WriteFn};
