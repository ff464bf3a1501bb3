use crate::cache::DESCRIPTORS;
use crate::{Discriminant, EnumDescriptor, EnumError, EnumValue};

// -----------------------------------------------------------------------------
// EnumRepr

/// A Rust enum with a descriptor.
///
/// This is the type metadata provider for the typed API: it knows the enum's
/// name/value table and how to move between variants and discriminants.
/// Usually implemented through [`#[derive(EnumRepr)]`](crate::derive::EnumRepr).
///
/// # Example
///
/// ```
/// use sk_enums::derive::EnumRepr;
/// use sk_enums::{EnumRepr as _, UnderlyingType};
///
/// #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
/// #[repr(u8)]
/// enum Mode {
///     Read = 1,
///     Write = 2,
/// }
///
/// let descriptor = Mode::descriptor();
/// assert_eq!(descriptor.underlying(), UnderlyingType::U8);
/// assert_eq!(descriptor.value_of("Write", false), Some(2));
/// ```
pub trait EnumRepr: Copy + 'static {
    /// Builds the descriptor. Called at most once per type by
    /// [`descriptor`](Self::descriptor).
    fn build_descriptor() -> EnumDescriptor;

    /// Returns this variant's discriminant.
    fn discriminant(self) -> Discriminant;

    /// Returns the variant with this discriminant, if any.
    fn from_discriminant(discriminant: Discriminant) -> Option<Self>;

    /// Returns the cached descriptor of this type.
    #[inline]
    fn descriptor() -> &'static EnumDescriptor {
        DESCRIPTORS.get_or_insert::<Self>(Self::build_descriptor)
    }

    /// Returns this variant as an [`EnumValue`].
    ///
    /// Only fails if [`discriminant`](Self::discriminant) disagrees with the
    /// descriptor's underlying type.
    #[inline]
    fn to_value(self) -> Result<EnumValue<'static>, EnumError> {
        EnumValue::new(Self::descriptor(), self.discriminant())
    }
}

// -----------------------------------------------------------------------------
// Typed conversion

/// [`to_value_binary`](crate::to_value_binary) for a Rust enum.
///
/// ```
/// # use sk_enums::derive::EnumRepr;
/// use sk_enums::to_value_binary_of;
///
/// #[derive(EnumRepr, Clone, Copy)]
/// #[repr(i8)]
/// enum Sign { Minus = -1, Plus = 1 }
///
/// assert_eq!(to_value_binary_of(Sign::Minus), Ok(-1));
/// ```
#[inline]
pub fn to_value_binary_of<E: EnumRepr>(value: E) -> Result<i64, EnumError> {
    value.discriminant().to_bits()
}

/// [`to_enum_binary`](crate::to_enum_binary) for a Rust enum.
///
/// Rust enums cannot hold undeclared values, so a bit pattern without a
/// variant fails with [`UndeclaredValue`](EnumError::UndeclaredValue).
pub fn to_enum_binary_of<E: EnumRepr>(bits: i64) -> Result<E, EnumError> {
    let descriptor = E::descriptor();
    let discriminant = Discriminant::from_bits(bits, descriptor.underlying())?;
    E::from_discriminant(discriminant).ok_or_else(|| EnumError::UndeclaredValue {
        type_path: descriptor.type_path().to_owned().into(),
        bits,
    })
}

/// [`parse`](crate::parse) for a Rust enum.
///
/// ```
/// # use sk_enums::derive::EnumRepr;
/// use sk_enums::{EnumError, parse_as};
///
/// #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
/// enum Suit { Hearts, Spades }
///
/// assert_eq!(parse_as::<Suit>("spades", true), Ok(Suit::Spades));
/// assert_eq!(parse_as::<Suit>("0", false), Ok(Suit::Hearts));
/// assert!(matches!(parse_as::<Suit>("7", false), Err(EnumError::UndeclaredValue { .. })));
/// ```
pub fn parse_as<'a, E: EnumRepr>(
    text: impl Into<Option<&'a str>>,
    ignore_case: bool,
) -> Result<E, EnumError> {
    crate::parse(text, ignore_case, E::descriptor())?.to_enum()
}

/// Like [`parse_as`], but discards the reason of a failure.
#[inline]
pub fn try_parse_as<'a, E: EnumRepr>(text: impl Into<Option<&'a str>>, ignore_case: bool) -> Option<E> {
    parse_as(text, ignore_case).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::EnumRepr;
    use crate::{EnumRegistry, UnderlyingType};

    #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
    #[repr(i16)]
    enum Temperature {
        Freezing = -40,
        Mild = 20,
        #[enum_repr(rename = "scorching")]
        Hot = 45,
    }

    #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
    enum Implicit {
        First,
        Second,
    }

    #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
    #[enum_repr(type_path = "net::Port")]
    #[repr(u16)]
    enum Port {
        Http = 80,
        Https = 443,
    }

    #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
    #[enum_repr(type_path = "net::Port")]
    #[repr(u16)]
    enum LegacyPort {
        Http = 8080,
    }

    #[derive(EnumRepr, Clone, Copy, Debug, PartialEq)]
    #[repr(u64)]
    enum Wide {
        Top = 1 << 63,
    }

    #[derive(EnumRepr, Clone, Copy)]
    enum Never {}

    #[test]
    fn descriptor_follows_declaration() {
        let d = Temperature::descriptor();
        assert_eq!(d.underlying(), UnderlyingType::I16);
        assert_eq!(d.type_path(), concat!(module_path!(), "::Temperature"));
        assert_eq!(d.type_name(), "Temperature");

        let entries: Vec<_> = d.entries().iter().map(|e| (e.name(), e.value())).collect();
        assert_eq!(
            entries,
            [("Freezing", (-40_i64) as u64), ("Mild", 20), ("scorching", 45)]
        );
    }

    #[test]
    fn repr_detection() {
        assert_eq!(Implicit::descriptor().underlying(), UnderlyingType::Isize);
        assert_eq!(Implicit::descriptor().value_of("Second", false), Some(1));
        assert_eq!(Port::descriptor().underlying(), UnderlyingType::U16);
        assert_eq!(Port::descriptor().type_path(), "net::Port");
        assert_eq!(Never::descriptor().len(), 0);
    }

    #[test]
    fn descriptor_is_cached() {
        assert!(core::ptr::eq(Port::descriptor(), Port::descriptor()));
    }

    #[test]
    fn typed_binary_conversion() {
        assert_eq!(to_value_binary_of(Temperature::Freezing), Ok(-40));
        assert_eq!(to_value_binary_of(Wide::Top), Ok(i64::MIN));
        assert_eq!(to_enum_binary_of::<Wide>(i64::MIN), Ok(Wide::Top));
        assert_eq!(to_enum_binary_of::<Port>(0x1_0050), Ok(Port::Http));
        assert_eq!(
            to_enum_binary_of::<Port>(81),
            Err(EnumError::UndeclaredValue {
                type_path: "net::Port".into(),
                bits: 81,
            })
        );
    }

    #[test]
    fn value_round_trip() {
        let value = Temperature::Mild.to_value().unwrap();
        assert_eq!(value.name(), Some("Mild"));
        assert_eq!(value.to_enum::<Temperature>(), Ok(Temperature::Mild));
        assert!(matches!(
            value.to_enum::<Port>(),
            Err(EnumError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn shared_type_path_does_not_convert() {
        let value = Port::Http.to_value().unwrap();
        assert_eq!(
            value.to_enum::<LegacyPort>(),
            Err(EnumError::TypeMismatch {
                expected: "net::Port".into(),
                actual: "net::Port".into(),
            })
        );
        assert!(matches!(
            LegacyPort::Http.to_value().unwrap().to_enum::<Port>(),
            Err(EnumError::TypeMismatch { .. })
        ));

        let copy = Port::descriptor().clone();
        let value = crate::to_enum_binary(443, &copy).unwrap();
        assert_eq!(value.to_enum::<Port>(), Ok(Port::Https));
    }

    #[test]
    fn typed_parse() {
        assert_eq!(parse_as::<Temperature>("scorching", false), Ok(Temperature::Hot));
        assert_eq!(parse_as::<Temperature>("SCORCHING", true), Ok(Temperature::Hot));
        assert_eq!(parse_as::<Temperature>("-40", false), Ok(Temperature::Freezing));
        assert_eq!(
            parse_as::<Temperature>("Hot", false),
            Err(EnumError::NameNotFound { name: "Hot".into() })
        );
        assert_eq!(try_parse_as::<Port>(" Https ", false), Some(Port::Https));
        assert_eq!(try_parse_as::<Port>(None, false), None);
        assert_eq!(try_parse_as::<Port>("Http, Https", false), None);
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_marked_types() {
        #[derive(EnumRepr, Clone, Copy)]
        #[enum_repr(type_path = "tests::Registered", auto_register)]
        enum Registered {
            Only,
        }

        let mut registry = EnumRegistry::new();
        assert!(registry.auto_register());
        assert!(registry.contains::<Registered>());
        assert!(!registry.contains::<Port>());
        assert_eq!(
            registry.parse_named("Registered", "Only", false).map(|v| v.to_bits()),
            Ok(Ok(0))
        );
    }

    #[cfg(not(feature = "auto_register"))]
    #[test]
    fn auto_register_is_a_no_op() {
        let mut registry = EnumRegistry::new();
        assert!(!registry.auto_register());
        assert_eq!(registry.len(), 0);
    }
}
