use core::fmt;

use serde::{Deserialize, Serialize};

use crate::EnumError;

// -----------------------------------------------------------------------------
// UnderlyingType

/// The integer type backing an enum.
///
/// All widths up to 64 bits, plus `isize` / `usize`, take part in binary
/// conversion. `i128` / `u128` can describe a `#[repr(i128)]` enum but every
/// conversion through them fails with
/// [`UnsupportedUnderlyingType`](EnumError::UnsupportedUnderlyingType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlyingType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    Usize,
    I128,
    U128,
}

impl UnderlyingType {
    /// Returns the type for a `#[repr(..)]` name such as `"u8"`.
    ///
    /// ```
    /// use sk_enums::UnderlyingType;
    ///
    /// assert_eq!(UnderlyingType::from_repr_name("i16"), Some(UnderlyingType::I16));
    /// assert_eq!(UnderlyingType::from_repr_name("C"), None);
    /// ```
    pub fn from_repr_name(name: &str) -> Option<Self> {
        Some(match name {
            "i8" => Self::I8,
            "u8" => Self::U8,
            "i16" => Self::I16,
            "u16" => Self::U16,
            "i32" => Self::I32,
            "u32" => Self::U32,
            "i64" => Self::I64,
            "u64" => Self::U64,
            "isize" => Self::Isize,
            "usize" => Self::Usize,
            "i128" => Self::I128,
            "u128" => Self::U128,
            _ => return None,
        })
    }

    /// The primitive's name, as written in `#[repr(..)]`.
    pub const fn repr_name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::Isize => "isize",
            Self::Usize => "usize",
            Self::I128 => "i128",
            Self::U128 => "u128",
        }
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
            Self::Isize | Self::Usize => usize::BITS,
            Self::I128 | Self::U128 => 128,
        }
    }

    /// Returns `true` for signed types.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize | Self::I128
        )
    }

    /// Returns `true` if binary conversion supports this type.
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::I128 | Self::U128)
    }
}

impl fmt::Display for UnderlyingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr_name())
    }
}

// -----------------------------------------------------------------------------
// Discriminant

/// An enum's bit pattern at its exact underlying width.
///
/// Binary conversion goes through [`to_bits`](Self::to_bits) and
/// [`from_bits`](Self::from_bits), which are exact inverses for every
/// supported width:
///
/// ```
/// use sk_enums::{Discriminant, UnderlyingType};
///
/// let d = Discriminant::from_bits(-1, UnderlyingType::U8).unwrap();
/// assert_eq!(d, Discriminant::U8(0xFF));
/// assert_eq!(d.to_bits().unwrap(), 0xFF);
///
/// let d = Discriminant::from_bits(0xFF, UnderlyingType::I8).unwrap();
/// assert_eq!(d.to_bits().unwrap(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Isize(isize),
    Usize(usize),
    I128(i128),
    U128(u128),
}

impl Discriminant {
    /// Returns the width of this discriminant.
    pub const fn underlying(self) -> UnderlyingType {
        match self {
            Self::I8(_) => UnderlyingType::I8,
            Self::U8(_) => UnderlyingType::U8,
            Self::I16(_) => UnderlyingType::I16,
            Self::U16(_) => UnderlyingType::U16,
            Self::I32(_) => UnderlyingType::I32,
            Self::U32(_) => UnderlyingType::U32,
            Self::I64(_) => UnderlyingType::I64,
            Self::U64(_) => UnderlyingType::U64,
            Self::Isize(_) => UnderlyingType::Isize,
            Self::Usize(_) => UnderlyingType::Usize,
            Self::I128(_) => UnderlyingType::I128,
            Self::U128(_) => UnderlyingType::U128,
        }
    }

    /// Widens to `i64`: sign-extension for signed widths, zero-extension for
    /// unsigned ones. `u64` (and a 64-bit `usize`) is reinterpreted without a
    /// range check, so large values come out negative.
    pub const fn to_bits(self) -> Result<i64, EnumError> {
        Ok(match self {
            Self::I8(v) => v as i64,
            Self::U8(v) => v as i64,
            Self::I16(v) => v as i64,
            Self::U16(v) => v as i64,
            Self::I32(v) => v as i64,
            Self::U32(v) => v as i64,
            Self::I64(v) => v,
            Self::U64(v) => v as i64,
            Self::Isize(v) => v as i64,
            Self::Usize(v) => v as i64,
            Self::I128(_) | Self::U128(_) => {
                return Err(EnumError::UnsupportedUnderlyingType(self.underlying()));
            }
        })
    }

    /// Narrows `bits` to the exact width of `ty`, discarding high bits.
    pub const fn from_bits(bits: i64, ty: UnderlyingType) -> Result<Self, EnumError> {
        Ok(match ty {
            UnderlyingType::I8 => Self::I8(bits as i8),
            UnderlyingType::U8 => Self::U8(bits as u8),
            UnderlyingType::I16 => Self::I16(bits as i16),
            UnderlyingType::U16 => Self::U16(bits as u16),
            UnderlyingType::I32 => Self::I32(bits as i32),
            UnderlyingType::U32 => Self::U32(bits as u32),
            UnderlyingType::I64 => Self::I64(bits),
            UnderlyingType::U64 => Self::U64(bits as u64),
            UnderlyingType::Isize => Self::Isize(bits as isize),
            UnderlyingType::Usize => Self::Usize(bits as usize),
            UnderlyingType::I128 | UnderlyingType::U128 => {
                return Err(EnumError::UnsupportedUnderlyingType(ty));
            }
        })
    }

    /// The value as stored in an [`EnumDescriptor`](crate::EnumDescriptor)
    /// table: signed widths sign-extended into a `u64` pattern.
    ///
    /// `i128` / `u128` keep only their low 64 bits here.
    pub const fn to_table_value(self) -> u64 {
        match self {
            Self::I8(v) => v as u64,
            Self::U8(v) => v as u64,
            Self::I16(v) => v as u64,
            Self::U16(v) => v as u64,
            Self::I32(v) => v as u64,
            Self::U32(v) => v as u64,
            Self::I64(v) => v as u64,
            Self::U64(v) => v,
            Self::Isize(v) => v as u64,
            Self::Usize(v) => v as u64,
            Self::I128(v) => v as u64,
            Self::U128(v) => v as u64,
        }
    }
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I8(v) => fmt::Display::fmt(&v, f),
            Self::U8(v) => fmt::Display::fmt(&v, f),
            Self::I16(v) => fmt::Display::fmt(&v, f),
            Self::U16(v) => fmt::Display::fmt(&v, f),
            Self::I32(v) => fmt::Display::fmt(&v, f),
            Self::U32(v) => fmt::Display::fmt(&v, f),
            Self::I64(v) => fmt::Display::fmt(&v, f),
            Self::U64(v) => fmt::Display::fmt(&v, f),
            Self::Isize(v) => fmt::Display::fmt(&v, f),
            Self::Usize(v) => fmt::Display::fmt(&v, f),
            Self::I128(v) => fmt::Display::fmt(&v, f),
            Self::U128(v) => fmt::Display::fmt(&v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED: [UnderlyingType; 10] = [
        UnderlyingType::I8,
        UnderlyingType::U8,
        UnderlyingType::I16,
        UnderlyingType::U16,
        UnderlyingType::I32,
        UnderlyingType::U32,
        UnderlyingType::I64,
        UnderlyingType::U64,
        UnderlyingType::Isize,
        UnderlyingType::Usize,
    ];

    #[test]
    fn every_byte_pattern_round_trips() {
        for bits in i8::MIN as i64..=u8::MAX as i64 {
            let d = Discriminant::from_bits(bits, UnderlyingType::U8).unwrap();
            assert_eq!(d.to_bits().unwrap(), bits as u8 as i64);
            let d = Discriminant::from_bits(bits, UnderlyingType::I8).unwrap();
            assert_eq!(d.to_bits().unwrap(), bits as i8 as i64);
        }
    }

    #[test]
    fn every_u16_pattern_round_trips() {
        for raw in 0..=u16::MAX {
            let d = Discriminant::U16(raw);
            let back = Discriminant::from_bits(d.to_bits().unwrap(), UnderlyingType::U16);
            assert_eq!(back.unwrap(), d);

            let d = Discriminant::I16(raw as i16);
            let back = Discriminant::from_bits(d.to_bits().unwrap(), UnderlyingType::I16);
            assert_eq!(back.unwrap(), d);
        }
    }

    #[test]
    fn wide_boundaries_round_trip() {
        let samples = [0, 1, -1, i64::MIN, i64::MAX, 0x1234_5678_9ABC_DEF0];
        for ty in SUPPORTED {
            for bits in samples {
                let d = Discriminant::from_bits(bits, ty).unwrap();
                assert_eq!(d.underlying(), ty);
                let again = Discriminant::from_bits(d.to_bits().unwrap(), ty).unwrap();
                assert_eq!(again, d, "{ty} with {bits}");
            }
        }
    }

    #[test]
    fn narrowing_discards_high_bits() {
        let d = Discriminant::from_bits(0x1_0002, UnderlyingType::U16).unwrap();
        assert_eq!(d, Discriminant::U16(2));
        let d = Discriminant::from_bits(-2, UnderlyingType::U32).unwrap();
        assert_eq!(d, Discriminant::U32(0xFFFF_FFFE));
        assert_eq!(d.to_bits().unwrap(), 0xFFFF_FFFE);
    }

    #[test]
    fn u64_is_reinterpreted() {
        let d = Discriminant::U64(u64::MAX);
        assert_eq!(d.to_bits().unwrap(), -1);
        assert_eq!(
            Discriminant::from_bits(-1, UnderlyingType::U64).unwrap(),
            Discriminant::U64(u64::MAX)
        );
    }

    #[test]
    fn wide_types_are_unsupported() {
        for ty in [UnderlyingType::I128, UnderlyingType::U128] {
            assert!(!ty.is_supported());
            assert_eq!(
                Discriminant::from_bits(1, ty),
                Err(EnumError::UnsupportedUnderlyingType(ty))
            );
        }
        assert_eq!(
            Discriminant::I128(5).to_bits(),
            Err(EnumError::UnsupportedUnderlyingType(UnderlyingType::I128))
        );
    }

    #[test]
    fn table_value_sign_extends() {
        assert_eq!(Discriminant::I8(-1).to_table_value(), u64::MAX);
        assert_eq!(Discriminant::U8(0xFF).to_table_value(), 0xFF);
        assert_eq!(Discriminant::I32(-2).to_table_value(), (-2_i64) as u64);
    }

    #[test]
    fn repr_names_round_trip() {
        for ty in SUPPORTED {
            assert_eq!(UnderlyingType::from_repr_name(ty.repr_name()), Some(ty));
        }
        assert!(UnderlyingType::I64.is_signed());
        assert!(!UnderlyingType::Usize.is_signed());
        assert_eq!(UnderlyingType::U16.bits(), 16);
    }
}
