use core::fmt;

use crate::{Discriminant, EnumDescriptor, EnumError, EnumRepr};

// -----------------------------------------------------------------------------
// EnumValue

/// A value of the enum described by a descriptor.
///
/// The discriminant always has the descriptor's underlying width, but need
/// not match any declared entry: numeric parsing and binary conversion accept
/// arbitrary bit patterns.
///
/// # Examples
///
/// ```
/// use sk_enums::{EnumDescriptor, UnderlyingType, to_enum_binary, to_value_binary};
///
/// let flags = EnumDescriptor::new("io::Flags", UnderlyingType::U8)
///     .with_entry("Read", 1)
///     .with_entry("Write", 2);
///
/// let value = to_enum_binary(0x1_03, &flags).unwrap();
/// assert_eq!(to_value_binary(&value).unwrap(), 3);
/// assert_eq!(value.to_string(), "3");
///
/// let read = to_enum_binary(1, &flags).unwrap();
/// assert_eq!(read.to_string(), "Read");
/// ```
#[derive(Clone, Copy)]
pub struct EnumValue<'d> {
    descriptor: &'d EnumDescriptor,
    discriminant: Discriminant,
}

impl<'d> EnumValue<'d> {
    /// Tags `discriminant` with `descriptor`.
    ///
    /// Fails if the discriminant's width is not the descriptor's underlying
    /// type.
    pub fn new(descriptor: &'d EnumDescriptor, discriminant: Discriminant) -> Result<Self, EnumError> {
        let expected = descriptor.underlying();
        let actual = discriminant.underlying();
        if expected != actual {
            return Err(EnumError::WidthMismatch { expected, actual });
        }
        Ok(Self {
            descriptor,
            discriminant,
        })
    }

    #[inline]
    pub fn descriptor(&self) -> &'d EnumDescriptor {
        self.descriptor
    }

    #[inline]
    pub fn discriminant(&self) -> Discriminant {
        self.discriminant
    }

    /// See [`to_value_binary`].
    #[inline]
    pub fn to_bits(&self) -> Result<i64, EnumError> {
        self.discriminant.to_bits()
    }

    /// Returns the first declared name with this value.
    pub fn name(&self) -> Option<&'d str> {
        self.descriptor.name_of(self.discriminant.to_table_value())
    }

    /// Converts into the Rust enum `E`.
    ///
    /// Fails if this value belongs to another descriptor or has no variant.
    /// A descriptor other than `E`'s own only matches when it is equal to it
    /// in full, so enums sharing a custom type path stay apart.
    pub fn to_enum<E: EnumRepr>(&self) -> Result<E, EnumError> {
        let target = E::descriptor();
        if !core::ptr::eq(target, self.descriptor) && target != self.descriptor {
            return Err(EnumError::TypeMismatch {
                expected: target.type_path().into(),
                actual: self.descriptor.type_path().into(),
            });
        }
        E::from_discriminant(self.discriminant).ok_or_else(|| EnumError::UndeclaredValue {
            type_path: target.type_path().to_owned().into(),
            bits: self.discriminant.to_table_value() as i64,
        })
    }
}

impl PartialEq for EnumValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.discriminant == other.discriminant
            && (core::ptr::eq(self.descriptor, other.descriptor)
                || self.descriptor.type_path() == other.descriptor.type_path())
    }
}

impl Eq for EnumValue<'_> {}

impl fmt::Debug for EnumValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumValue")
            .field("type_path", &self.descriptor.type_path())
            .field("discriminant", &self.discriminant)
            .finish()
    }
}

impl fmt::Display for EnumValue<'_> {
    /// Prints the first declared name, or the number if there is none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => fmt::Display::fmt(&self.discriminant, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Binary conversion

/// Reinterprets an enum value as a signed 64-bit integer.
///
/// Signed widths are sign-extended and unsigned widths zero-extended; a `u64`
/// pattern is reinterpreted without range checks.
#[inline]
pub fn to_value_binary(value: &EnumValue<'_>) -> Result<i64, EnumError> {
    value.to_bits()
}

/// Narrows `bits` to the descriptor's underlying width.
///
/// High bits are discarded exactly as an `as` cast would. The result need
/// not be a declared value.
pub fn to_enum_binary(bits: i64, descriptor: &EnumDescriptor) -> Result<EnumValue<'_>, EnumError> {
    let discriminant = Discriminant::from_bits(bits, descriptor.underlying())?;
    Ok(EnumValue {
        descriptor,
        discriminant,
    })
}
