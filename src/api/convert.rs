use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ValueKind;

/// Error from converting a single token into a parameter's value.
///
/// Every variant names the parameter (`identity`) and the offending `token`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidValue {
    /// The token is neither `true` nor `false`.
    #[error("'{token}' is not a valid boolean for '{identity}' (expected 'true' or 'false').")]
    Boolean {
        /// The parameter the token was supplied to.
        identity: String,
        /// The offending token.
        token: String,
    },

    /// The token is not a literal of the declared kind (ex: trailing characters).
    #[error("'{token}' is not a valid {kind} for '{identity}'.")]
    Malformed {
        /// The parameter the token was supplied to.
        identity: String,
        /// The offending token.
        token: String,
        /// The declared kind.
        kind: ValueKind,
    },

    /// The token is a literal of the declared kind, but not a representable one.
    #[error("'{token}' is out of range for '{identity}': {kind} must be within [{min}, {max}].")]
    OutOfRange {
        /// The parameter the token was supplied to.
        identity: String,
        /// The offending token.
        token: String,
        /// The declared kind.
        kind: ValueKind,
        /// The smallest valid value.
        min: String,
        /// The largest valid value.
        max: String,
    },

    /// The custom converter rejected the token.
    #[error("'{token}' does not match the custom criteria of '{identity}': {message}")]
    Custom {
        /// The parameter the token was supplied to.
        identity: String,
        /// The offending token.
        token: String,
        /// The converter's own diagnostic.
        message: String,
    },
}

/// A type which a parameter may bind its token(s) to.
///
/// Implemented for the built-in kinds:
/// * `String`: the token verbatim.
/// * `bool`: exactly `true` or `false`.
/// * `i8`, `u8`, `i32`, `u32`: base-10 integers, range checked.
/// * `f64`: finite floating point numbers.
/// * `Option<T>` for any of the above, so that an unspecified flag remains `None`.
///
/// Any other type binds through a custom converter (see [`Scalar::custom`](crate::Scalar::custom)).
pub trait Value: Sized {
    /// The kind reported in the usage text.
    fn kind() -> ValueKind;

    /// Convert the `token` supplied to the parameter `identity`.
    fn convert(identity: &str, token: &str) -> Result<Self, InvalidValue>;
}

impl Value for String {
    fn kind() -> ValueKind {
        ValueKind::Raw
    }

    fn convert(_identity: &str, token: &str) -> Result<Self, InvalidValue> {
        Ok(token.to_string())
    }
}

impl Value for bool {
    fn kind() -> ValueKind {
        ValueKind::Bool
    }

    fn convert(identity: &str, token: &str) -> Result<Self, InvalidValue> {
        match token {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(InvalidValue::Boolean {
                identity: identity.to_string(),
                token: token.to_string(),
            }),
        }
    }
}

fn out_of_range(
    identity: &str,
    token: &str,
    kind: ValueKind,
    min: impl ToString,
    max: impl ToString,
) -> InvalidValue {
    InvalidValue::OutOfRange {
        identity: identity.to_string(),
        token: token.to_string(),
        kind,
        min: min.to_string(),
        max: max.to_string(),
    }
}

fn malformed(identity: &str, token: &str, kind: ValueKind) -> InvalidValue {
    InvalidValue::Malformed {
        identity: identity.to_string(),
        token: token.to_string(),
        kind,
    }
}

// Out of range literals still parse as i64 (or overflow it), unlike malformed ones.
fn convert_integer<T>(
    identity: &str,
    token: &str,
    kind: ValueKind,
    min: T,
    max: T,
) -> Result<T, InvalidValue>
where
    T: TryFrom<i64> + ToString,
{
    match i64::from_str(token) {
        Ok(wide) => T::try_from(wide).map_err(|_| out_of_range(identity, token, kind, min, max)),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(out_of_range(identity, token, kind, min, max))
            }
            _ => Err(malformed(identity, token, kind)),
        },
    }
}

macro_rules! integer_value {
    ($type:ty, $kind:expr) => {
        impl Value for $type {
            fn kind() -> ValueKind {
                $kind
            }

            fn convert(identity: &str, token: &str) -> Result<Self, InvalidValue> {
                convert_integer(identity, token, $kind, <$type>::MIN, <$type>::MAX)
            }
        }
    };
}

integer_value!(i8, ValueKind::Int8);
integer_value!(u8, ValueKind::UInt8);
integer_value!(i32, ValueKind::Int32);
integer_value!(u32, ValueKind::UInt32);

impl Value for f64 {
    fn kind() -> ValueKind {
        ValueKind::Double
    }

    fn convert(identity: &str, token: &str) -> Result<Self, InvalidValue> {
        match f64::from_str(token) {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(out_of_range(
                identity,
                token,
                ValueKind::Double,
                format!("{:e}", f64::MIN),
                format!("{:e}", f64::MAX),
            )),
            Err(_) => Err(malformed(identity, token, ValueKind::Double)),
        }
    }
}

impl<T: Value> Value for Option<T> {
    fn kind() -> ValueKind {
        T::kind()
    }

    fn convert(identity: &str, token: &str) -> Result<Self, InvalidValue> {
        T::convert(identity, token).map(Some)
    }
}

/// A user supplied converter: `(identity, token) -> Result<T, diagnostic>`.
pub(crate) type Converter<T> = Box<dyn Fn(&str, &str) -> Result<T, String>>;

/// How a field turns its tokens into `T`.
pub(crate) enum Conversion<T> {
    Typed(ValueKind, fn(&str, &str) -> Result<T, InvalidValue>),
    Custom(Converter<T>),
}

impl<T> Conversion<T> {
    pub(crate) fn typed() -> Self
    where
        T: Value,
    {
        Conversion::Typed(T::kind(), T::convert)
    }

    pub(crate) fn custom(converter: impl Fn(&str, &str) -> Result<T, String> + 'static) -> Self {
        Conversion::Custom(Box::new(converter))
    }

    pub(crate) fn kind(&self) -> ValueKind {
        match self {
            Conversion::Typed(kind, _) => *kind,
            Conversion::Custom(_) => ValueKind::Custom,
        }
    }

    pub(crate) fn apply(&self, identity: &str, token: &str) -> Result<T, InvalidValue> {
        match self {
            Conversion::Typed(_, convert) => convert(identity, token),
            Conversion::Custom(converter) => {
                converter(identity, token).map_err(|message| InvalidValue::Custom {
                    identity: identity.to_string(),
                    token: token.to_string(),
                    message,
                })
            }
        }
    }
}
