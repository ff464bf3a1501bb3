//! Type-erased accessors.
//!
//! Each trait here is implemented for every accessor with the matching
//! capability, so any accessor can be handed out as
//! `&dyn ReadAccessor` and the like.

use alloc::boxed::Box;
use core::any::Any;

use crate::{AccessError, Readable, StorageAccessor, ValueType, Writable};

/// An accessor with its value type erased.
pub trait AnyAccessor {
    /// Returns the type of the stored value.
    fn stored_type(&self) -> ValueType;
}

impl<A: StorageAccessor + ?Sized> AnyAccessor for A {
    #[inline]
    fn stored_type(&self) -> ValueType {
        self.value_type()
    }
}

/// Erased [`Readable`].
///
/// ```
/// use sk_access::{BoxAccessor, ReadAccessor};
///
/// let accessor = BoxAccessor::new(3_i64);
/// let erased: &dyn ReadAccessor = &accessor;
/// assert_eq!(erased.read_any().downcast_ref::<i64>(), Some(&3));
/// ```
pub trait ReadAccessor: AnyAccessor {
    fn read_any(&self) -> Box<dyn Any>;
}

impl<A: Readable + ?Sized> ReadAccessor for A {
    #[inline]
    fn read_any(&self) -> Box<dyn Any> {
        Box::new(self.read())
    }
}

/// Erased [`Writable`].
///
/// Writing a value of another type fails with
/// [`TypeMismatch`](AccessError::TypeMismatch) and leaves the storage as is.
pub trait WriteAccessor: AnyAccessor {
    fn write_any(&mut self, value: Box<dyn Any>) -> Result<(), AccessError>;
}

impl<A: Writable + ?Sized> WriteAccessor for A {
    fn write_any(&mut self, value: Box<dyn Any>) -> Result<(), AccessError> {
        match value.downcast::<A::Value>() {
            Ok(value) => {
                self.write(*value);
                Ok(())
            }
            Err(_) => {
                let expected = core::any::type_name::<A::Value>();
                log::debug!("rejected erased write, expected `{expected}`");
                Err(AccessError::TypeMismatch { expected })
            }
        }
    }
}

/// Erased [`ReadWritable`](crate::ReadWritable).
pub trait ReadWriteAccessor: ReadAccessor + WriteAccessor {}

impl<A: ReadAccessor + WriteAccessor + ?Sized> ReadWriteAccessor for A {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxAccessor, ReadFn};
    use alloc::string::String;

    #[test]
    fn erased_read_write() {
        let mut accessor = BoxAccessor::new(String::from("a"));
        let erased: &mut dyn ReadWriteAccessor = &mut accessor;

        assert!(erased.stored_type().is::<String>());
        erased.write_any(Box::new(String::from("b"))).unwrap();
        assert_eq!(erased.read_any().downcast_ref::<String>().map(String::as_str), Some("b"));
    }

    #[test]
    fn erased_type_mismatch() {
        let mut accessor = BoxAccessor::new(1_u32);
        let erased: &mut dyn WriteAccessor = &mut accessor;

        assert_eq!(
            erased.write_any(Box::new(1_i32)),
            Err(AccessError::TypeMismatch { expected: "u32" })
        );
        assert_eq!(accessor.into_inner(), 1);
    }

    #[test]
    fn read_only_accessors_are_not_writable() {
        let getter = ReadFn::new(|| 5_u8);
        let erased: &dyn ReadAccessor = &getter;
        assert_eq!(erased.read_any().downcast_ref::<u8>(), Some(&5));
        assert!(erased.stored_type().is::<u8>());
    }
}
