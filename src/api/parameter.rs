use crate::api::{List, Scalar, Switch};
use crate::constant::*;
use crate::model::{Nargs, ValueKind};
use crate::parser::{AnonymousCapturable, ConfigError};
use crate::prelude::Collectable;

/// The short and/or long spelling of a valued-flag or switch (ex: `-o` and `--output`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spelling {
    short: Option<char>,
    long: Option<String>,
}

impl Spelling {
    pub(crate) fn new(short: Option<char>, long: Option<&str>) -> Self {
        Self {
            short,
            long: long.map(|l| l.to_string()),
        }
    }

    pub(crate) fn short(&self) -> Option<String> {
        self.short.map(|s| format!("{OPTION_PREFIX}{s}"))
    }

    pub(crate) fn long(&self) -> Option<String> {
        self.long
            .as_ref()
            .map(|l| format!("{OPTION_PREFIX}{OPTION_PREFIX}{l}"))
    }

    /// The name used in diagnostics: the long spelling when present, otherwise the short spelling.
    pub(crate) fn identity(&self) -> String {
        self.long()
            .or_else(|| self.short())
            .unwrap_or_else(|| unreachable!("internal error - spelling must be validated"))
    }

    /// The combined spellings as shown in usage (ex: `-o, --output`).
    pub(crate) fn render(&self) -> String {
        match (self.short(), self.long()) {
            (Some(s), Some(l)) => format!("{s}, {l}"),
            (Some(s), None) => s,
            (None, Some(l)) => l,
            (None, None) => String::default(),
        }
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        let Some(rest) = token.strip_prefix(OPTION_PREFIX) else {
            return false;
        };

        match rest.strip_prefix(OPTION_PREFIX) {
            Some(long) => self.long.as_deref() == Some(long),
            None => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(s), None) => self.short == Some(s),
                    _ => false,
                }
            }
        }
    }

    /// The value of a `--long=value` token, if the token is an inline assignment to this spelling.
    pub(crate) fn inline_value<'t>(&self, token: &'t str) -> Option<&'t str> {
        let long = self.long.as_deref()?;
        token
            .strip_prefix(OPTION_PREFIX)?
            .strip_prefix(OPTION_PREFIX)?
            .strip_prefix(long)?
            .strip_prefix(ASSIGNMENT)
    }

    pub(crate) fn validate(&self, description: &str) -> Result<(), ConfigError> {
        if self.short.is_none() && self.long.is_none() {
            return Err(ConfigError(format!(
                "option '{description}' must have a short or long spelling."
            )));
        }

        if let Some(s) = self.short {
            if s == OPTION_PREFIX || s == ASSIGNMENT || s.is_whitespace() {
                return Err(ConfigError(format!(
                    "option '{description}' has an invalid short spelling '{s}'."
                )));
            }
        }

        if let Some(l) = &self.long {
            if l.is_empty()
                || l.starts_with(OPTION_PREFIX)
                || l.contains(ASSIGNMENT)
                || l.contains(char::is_whitespace)
            {
                return Err(ConfigError(format!(
                    "option '{description}' has an invalid long spelling '{l}'."
                )));
            }
        }

        Ok(())
    }
}

pub(crate) struct PositionalInner<'a> {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) kind: ValueKind,
    pub(crate) repeating: Option<Nargs>,
    pub(crate) field: Box<dyn AnonymousCapturable + 'a>,
}

pub(crate) struct ValuedFlagInner<'a> {
    pub(crate) spelling: Spelling,
    pub(crate) field_name: String,
    pub(crate) description: String,
    pub(crate) kind: ValueKind,
    pub(crate) field: Box<dyn AnonymousCapturable + 'a>,
}

pub(crate) struct SwitchInner<'a> {
    pub(crate) spelling: Spelling,
    pub(crate) description: String,
    pub(crate) exit_on_match: bool,
    pub(crate) field: Switch<'a>,
}

pub(crate) enum ParameterInner<'a> {
    Positional(PositionalInner<'a>),
    ValuedFlag(ValuedFlagInner<'a>),
    Switch(SwitchInner<'a>),
}

impl<'a> std::fmt::Debug for ParameterInner<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterInner::Positional(p) => write!(f, "Positional[{name}]", name = p.name),
            ParameterInner::ValuedFlag(o) => {
                write!(f, "ValuedFlag[{spelling}]", spelling = o.spelling.render())
            }
            ParameterInner::Switch(s) => {
                write!(f, "Switch[{spelling}]", spelling = s.spelling.render())
            }
        }
    }
}

/// One entry of the command line configuration: a positional, a valued-flag, or a switch.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
///
/// Positionals are matched in the order they are added.
/// Valued-flags and switches are matched by spelling, in any order.
pub struct Parameter<'a>(ParameterInner<'a>);

impl<'a> Parameter<'a> {
    /// Create a positional (required) argument.
    ///
    /// ### Example
    /// ```
    /// use clags::{Parameter, Scalar};
    ///
    /// let mut input: String = String::default();
    /// Parameter::positional(Scalar::new(&mut input), "input_file", "The input file.");
    /// ```
    pub fn positional<T: 'a>(
        field: Scalar<'a, T>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self(ParameterInner::Positional(PositionalInner {
            name: name.into(),
            description: description.into(),
            kind: field.kind(),
            repeating: None,
            field: Box::new(field),
        }))
    }

    /// Create a repeating positional argument.
    /// It absorbs every remaining positional token, so it must be the final positional.
    ///
    /// ### Example
    /// ```
    /// use clags::{List, Nargs, Parameter};
    ///
    /// let mut items: Vec<u32> = Vec::default();
    /// Parameter::positional_list(List::new(&mut items, Nargs::Any), "items", "The items to sum.");
    /// ```
    pub fn positional_list<C, T: 'a>(
        field: List<'a, C, T>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self
    where
        C: 'a + Collectable<T>,
    {
        Self(ParameterInner::Positional(PositionalInner {
            name: name.into(),
            description: description.into(),
            kind: field.kind(),
            repeating: Some(field.nargs()),
            field: Box::new(field),
        }))
    }

    /// Create a valued-flag (optional) argument, spelled `-short` and/or `--long`.
    /// At least one spelling must be present.
    ///
    /// The value is either the following token (`--output x.txt`), or inline (`--output=x.txt`).
    ///
    /// ### Example
    /// ```
    /// use clags::{Parameter, Scalar};
    ///
    /// let mut output: Option<String> = None;
    /// Parameter::valued_flag(Scalar::new(&mut output), Some('o'), Some("output"), "FILE", "The output file.");
    /// ```
    pub fn valued_flag<T: 'a>(
        field: Scalar<'a, T>,
        short: Option<char>,
        long: Option<&str>,
        field_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self(ParameterInner::ValuedFlag(ValuedFlagInner {
            spelling: Spelling::new(short, long),
            field_name: field_name.into(),
            description: description.into(),
            kind: field.kind(),
            field: Box::new(field),
        }))
    }

    /// Create a switch (boolean flag), spelled `-short` and/or `--long`.
    /// At least one spelling must be present.
    ///
    /// When `exit_on_match` is set, matching the switch stops the parse immediately with success.
    /// Any missing positionals are not reported (ex: for `--version`).
    ///
    /// ### Example
    /// ```
    /// use clags::{Parameter, Switch};
    ///
    /// let mut warnings: bool = false;
    /// Parameter::switch(Switch::new(&mut warnings), Some('w'), None, "Print warnings.", false);
    /// ```
    pub fn switch(
        field: Switch<'a>,
        short: Option<char>,
        long: Option<&str>,
        description: impl Into<String>,
        exit_on_match: bool,
    ) -> Self {
        Self(ParameterInner::Switch(SwitchInner {
            spelling: Spelling::new(short, long),
            description: description.into(),
            exit_on_match,
            field,
        }))
    }

    /// Create the help switch: `-h`/`--help`, exiting on match.
    ///
    /// ### Example
    /// ```
    /// use clags::{CommandLineParser, Parameter, Action};
    ///
    /// let mut help: bool = false;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::help_switch(&mut help))
    ///     .build();
    /// let usage = parser.usage();
    ///
    /// assert_eq!(parser.parse_tokens(&["--help"]).unwrap(), Action::Exit { switch: "--help".to_string() });
    /// assert!(help);
    /// usage.print();
    /// ```
    pub fn help_switch(variable: &'a mut bool) -> Self {
        Self::switch(
            Switch::new(variable),
            Some(HELP_SHORT),
            Some(HELP_LONG),
            HELP_MESSAGE,
            true,
        )
    }

    pub(crate) fn consume(self) -> ParameterInner<'a> {
        self.0
    }
}

impl<'a> std::fmt::Debug for Parameter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            ParameterInner::Positional(p) => write!(
                f,
                "Positional[{kind}, {name}, {repeating:?}, {description}]",
                kind = p.kind,
                name = p.name,
                repeating = p.repeating,
                description = p.description,
            ),
            ParameterInner::ValuedFlag(o) => write!(
                f,
                "ValuedFlag[{kind}, {spelling} <{field_name}>, {description}]",
                kind = o.kind,
                spelling = o.spelling.render(),
                field_name = o.field_name,
                description = o.description,
            ),
            ParameterInner::Switch(s) => write!(
                f,
                "Switch[{spelling}, {description}, exit_on_match={exit}]",
                spelling = s.spelling.render(),
                description = s.description,
                exit = s.exit_on_match,
            ),
        }
    }
}
