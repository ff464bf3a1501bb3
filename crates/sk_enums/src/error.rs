use alloc::borrow::Cow;
use alloc::string::String;

use thiserror::Error;

use crate::UnderlyingType;

// -----------------------------------------------------------------------------
// Error

/// Failure of an enum conversion or parse.
///
/// [`parse`](crate::parse) returns these directly;
/// [`try_parse`](crate::try_parse) discards them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumError {
    #[error("enum text must not be absent")]
    NullInput,

    #[error("enum text must contain a name or a number")]
    EmptyInput,

    #[error("requested value `{name}` was not found")]
    NameNotFound { name: String },

    #[error("numeric enum text `{text}` is outside the range of a 64-bit integer")]
    NumericOverflow { text: String },

    #[error("underlying type `{0}` is not supported by binary conversion")]
    UnsupportedUnderlyingType(UnderlyingType),

    #[error("discriminant of type `{actual}` does not fit enum of underlying type `{expected}`")]
    WidthMismatch {
        expected: UnderlyingType,
        actual: UnderlyingType,
    },

    #[error("value {bits} is not a declared variant of `{type_path}`")]
    UndeclaredValue {
        type_path: Cow<'static, str>,
        bits: i64,
    },

    #[error("value of enum `{actual}` cannot convert to enum `{expected}`")]
    TypeMismatch { expected: String, actual: String },

    #[error("enum type `{name}` is not registered or is ambiguous")]
    UnknownEnumType { name: String },
}

impl EnumError {
    /// Returns `true` for failures caused by the text handed to
    /// [`parse`](crate::parse), as opposed to the enum's description.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NullInput | Self::EmptyInput | Self::NameNotFound { .. } | Self::NumericOverflow { .. }
        )
    }
}
