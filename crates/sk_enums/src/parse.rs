use alloc::string::ToString;
use core::num::IntErrorKind;

use crate::value::to_enum_binary;
use crate::{EnumDescriptor, EnumError, EnumValue};

// -----------------------------------------------------------------------------
// Parse

/// Parses `text` into a value of the described enum.
///
/// `text` is trimmed, then read as either:
///
/// - a decimal `i64` literal with optional sign, narrowed to the underlying
///   width. No declared name is required for the value.
/// - one or more comma-separated names. Each trimmed name takes the value of
///   the first matching entry, and the values are OR-ed together.
///
/// Text that starts like a number but is not one (`"12a"`) is read as names
/// instead, while a literal outside the `i64` range fails right away.
///
/// # Errors
///
/// - [`NullInput`](EnumError::NullInput): `text` is `None`.
/// - [`EmptyInput`](EnumError::EmptyInput): `text` is blank.
/// - [`NumericOverflow`](EnumError::NumericOverflow): the literal exceeds `i64`.
/// - [`NameNotFound`](EnumError::NameNotFound): a name matches no entry.
/// - [`UnsupportedUnderlyingType`](EnumError::UnsupportedUnderlyingType).
///
/// # Examples
///
/// ```
/// use sk_enums::{EnumDescriptor, EnumError, UnderlyingType, parse};
///
/// let d = EnumDescriptor::new("demo::Bits", UnderlyingType::I32)
///     .with_entry("A", 1)
///     .with_entry("B", 2)
///     .with_entry("C", 4);
///
/// assert_eq!(parse("  A , C  ", false, &d).unwrap().to_bits(), Ok(5));
/// assert_eq!(parse("a,c", true, &d).unwrap().to_bits(), Ok(5));
/// assert_eq!(parse("42", false, &d).unwrap().to_bits(), Ok(42));
/// assert!(matches!(parse("a,c", false, &d), Err(EnumError::NameNotFound { .. })));
/// assert_eq!(parse(None, false, &d), Err(EnumError::NullInput));
/// ```
pub fn parse<'a, 'd>(
    text: impl Into<Option<&'a str>>,
    ignore_case: bool,
    descriptor: &'d EnumDescriptor,
) -> Result<EnumValue<'d>, EnumError> {
    let text = text.into().ok_or(EnumError::NullInput)?.trim();
    if text.is_empty() {
        return Err(EnumError::EmptyInput);
    }

    if text.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
        match text.parse::<i64>() {
            Ok(bits) => return to_enum_binary(bits, descriptor),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    if is_integer_literal(text) =>
                {
                    return Err(EnumError::NumericOverflow {
                        text: text.to_string(),
                    });
                }
                _ => {
                    log::trace!("`{text}` is not an integer literal, reading it as names");
                }
            },
        }
    }

    let mut bits = 0_u64;
    for name in text.split(',').map(str::trim) {
        match descriptor.value_of(name, ignore_case) {
            Some(value) => bits |= value,
            None => {
                log::trace!("`{name}` is not declared by `{}`", descriptor.type_path());
                return Err(EnumError::NameNotFound {
                    name: name.to_string(),
                });
            }
        }
    }

    to_enum_binary(bits as i64, descriptor)
}

/// Whether `text` has the shape `[+-]?[0-9]+`.
///
/// `i64::from_str` reports overflow before it reaches a trailing non-digit.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Like [`parse`], but discards the reason of a failure.
///
/// ```
/// use sk_enums::{EnumDescriptor, UnderlyingType, try_parse};
///
/// let d = EnumDescriptor::new("demo::Unit", UnderlyingType::U8).with_entry("Only", 0);
/// assert!(try_parse("Only", false, &d).is_some());
/// assert!(try_parse("", false, &d).is_none());
/// ```
#[inline]
pub fn try_parse<'a, 'd>(
    text: impl Into<Option<&'a str>>,
    ignore_case: bool,
    descriptor: &'d EnumDescriptor,
) -> Option<EnumValue<'d>> {
    parse(text, ignore_case, descriptor).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnderlyingType;

    fn bits() -> EnumDescriptor {
        EnumDescriptor::new("tests::Bits", UnderlyingType::I32)
            .with_entry("A", 1)
            .with_entry("B", 2)
            .with_entry("C", 4)
    }

    fn parsed(text: &str, ignore_case: bool, d: &EnumDescriptor) -> i64 {
        parse(text, ignore_case, d).unwrap().to_bits().unwrap()
    }

    #[test]
    fn numeric_literals_skip_validation() {
        let d = bits();
        assert_eq!(parsed("42", false, &d), 42);
        assert_eq!(parsed("+7", false, &d), 7);
        assert_eq!(parsed("-3", false, &d), -3);
        assert_eq!(parsed("  0012 ", false, &d), 12);
    }

    #[test]
    fn numeric_literals_are_narrowed() {
        let d = EnumDescriptor::new("tests::Byte", UnderlyingType::U8);
        assert_eq!(parsed("256", false, &d), 0);
        assert_eq!(parsed("-1", false, &d), 255);
    }

    #[test]
    fn symbolic_names_are_combined() {
        let d = bits();
        assert_eq!(parsed("A,C", false, &d), 5);
        assert_eq!(parsed("  A , C  ", false, &d), 5);
        assert_eq!(parsed("B,B", false, &d), 2);
        assert_eq!(parsed("a,c", true, &d), 5);
    }

    #[test]
    fn case_sensitive_by_default() {
        let d = bits();
        assert_eq!(
            parse("a,c", false, &d),
            Err(EnumError::NameNotFound { name: "a".into() })
        );
    }

    #[test]
    fn missing_input() {
        let d = bits();
        assert_eq!(parse("", false, &d), Err(EnumError::EmptyInput));
        assert_eq!(parse(" \t\n", true, &d), Err(EnumError::EmptyInput));
        assert_eq!(parse(None, false, &d), Err(EnumError::NullInput));
    }

    #[test]
    fn unknown_names_reject_everything() {
        let d = bits();
        assert_eq!(
            parse("Z", false, &d),
            Err(EnumError::NameNotFound { name: "Z".into() })
        );
        assert_eq!(
            parse("A,,C", false, &d),
            Err(EnumError::NameNotFound { name: "".into() })
        );
        assert_eq!(
            parse("1,A", false, &d),
            Err(EnumError::NameNotFound { name: "1".into() })
        );
    }

    #[test]
    fn format_errors_fall_through_to_names() {
        let d = bits();
        assert_eq!(
            parse("12a", false, &d),
            Err(EnumError::NameNotFound { name: "12a".into() })
        );
        assert_eq!(
            parse("-", false, &d),
            Err(EnumError::NameNotFound { name: "-".into() })
        );

        let odd = EnumDescriptor::new("tests::Odd", UnderlyingType::I8).with_entry("1st", 1);
        assert_eq!(parsed("1st", false, &odd), 1);
    }

    #[test]
    fn overflow_fails_immediately() {
        let d = bits();
        let text = "99999999999999999999";
        assert_eq!(
            parse(text, false, &d),
            Err(EnumError::NumericOverflow { text: text.into() })
        );
        assert!(matches!(
            parse("-99999999999999999999", false, &d),
            Err(EnumError::NumericOverflow { .. })
        ));
    }

    #[test]
    fn overflowing_digits_with_junk_are_names() {
        let d = bits().with_entry("99999999999999999999x", 8);
        assert_eq!(parsed("99999999999999999999x", false, &d), 8);
        assert_eq!(
            parse("99999999999999999999,A", false, &d),
            Err(EnumError::NameNotFound {
                name: "99999999999999999999".into()
            })
        );
        assert_eq!(
            parse("-99999999999999999999y", false, &d),
            Err(EnumError::NameNotFound {
                name: "-99999999999999999999y".into()
            })
        );
        assert_eq!(
            parse("+-99999999999999999999", false, &d),
            Err(EnumError::NameNotFound {
                name: "+-99999999999999999999".into()
            })
        );

        let text = "-99999999999999999999";
        assert_eq!(
            parse(text, false, &d),
            Err(EnumError::NumericOverflow { text: text.into() })
        );
    }

    #[test]
    fn unsigned_64_values_combine() {
        let d = EnumDescriptor::new("tests::Wide", UnderlyingType::U64)
            .with_entry("Top", 1 << 63)
            .with_entry("Low", 1);
        let value = parse("Top, Low", false, &d).unwrap();
        assert_eq!(value.to_bits(), Ok(i64::MIN + 1));
    }

    #[test]
    fn unsupported_width_fails_after_lookup() {
        let d = EnumDescriptor::new("tests::Huge", UnderlyingType::U128).with_entry("A", 1);
        assert_eq!(
            parse("A", false, &d),
            Err(EnumError::UnsupportedUnderlyingType(UnderlyingType::U128))
        );
        assert_eq!(
            parse("7", false, &d),
            Err(EnumError::UnsupportedUnderlyingType(UnderlyingType::U128))
        );
        assert_eq!(
            parse("B", false, &d),
            Err(EnumError::NameNotFound { name: "B".into() })
        );
    }

    #[test]
    fn try_parse_never_fails_loudly() {
        let d = bits();
        assert_eq!(try_parse("C", false, &d).map(|v| v.to_bits()), Some(Ok(4)));
        for text in [Some(""), None, Some("Z"), Some("99999999999999999999"), Some("c")] {
            assert!(try_parse(text, false, &d).is_none());
        }
    }
}
