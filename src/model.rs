/// The cardinality of a repeating positional argument.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// `*`: May be any number of values, including `0`.
    Any,
    /// `+`: At least one value must be specified.
    AtLeastOne,
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The kind of value a parameter converts its tokens into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The token, verbatim.
    Raw,
    /// Exactly `true` or `false`.
    Bool,
    /// A base-10 integer in `[-128, 127]`.
    Int8,
    /// A base-10 integer in `[0, 255]`.
    UInt8,
    /// A base-10 integer in `[-2147483648, 2147483647]`.
    Int32,
    /// A base-10 integer in `[0, 4294967295]`.
    UInt32,
    /// A finite floating point number.
    Double,
    /// Converted by a user supplied function.
    Custom,
}

impl ValueKind {
    /// The type tag shown in the usage text, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            ValueKind::Raw => None,
            ValueKind::Bool => Some("bool"),
            ValueKind::Int8 => Some("int8"),
            ValueKind::UInt8 => Some("uint8"),
            ValueKind::Int32 => Some("int32"),
            ValueKind::UInt32 => Some("uint32"),
            ValueKind::Double => Some("double"),
            ValueKind::Custom => Some("custom"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag().unwrap_or("string"))
    }
}

/// The class of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A valued-flag was the final token, with no value following it.
    MissingValueForFlag,
    /// A `--flag=` assignment with nothing after the `=`.
    EmptyInlineAssignment,
    /// A token could not be converted to the declared kind (malformed or out of range).
    InvalidTypedValue,
    /// A custom converter rejected the token.
    CustomValidationFailed,
    /// A token with the option prefix matched no valued-flag or switch.
    UnknownOption,
    /// More positional tokens were supplied than declared.
    UnexpectedPositional,
    /// The tokens ran out before every positional was satisfied.
    MissingRequiredPositionals,
    /// A process argument is not valid unicode.
    NonUnicodeArgument,
}
