use std::collections::HashSet;
use thiserror::Error;

use crate::api::{InvalidValue, PositionalInner, SwitchInner, ValuedFlagInner};
use crate::constant::OPTION_PREFIX;
use crate::model::{ErrorKind, Nargs};
use crate::parser::classify::Classified;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Error for a misconfigured command line parser.
/// Detected when the parser is built, before any tokens are seen.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Error for a command line which does not match the configured parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A valued-flag was the final token, so no value follows it.
    #[error("Option '{flag}' requires an argument.")]
    MissingValue {
        /// The flag, as it was typed.
        flag: String,
    },
    /// A valued-flag was assigned inline with nothing after the `=` (ex: `--output=`).
    #[error("Option '{flag}' cannot be assigned an empty value.")]
    EmptyAssignment {
        /// The flag's identity.
        flag: String,
    },
    /// A token could not be converted by its target field.
    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
    /// A token looks like an option, but matches no valued-flag or switch.
    #[error("Unknown option '{token}'.")]
    UnknownOption {
        /// The unmatched token.
        token: String,
    },
    /// A positional token arrived after every positional was filled.
    #[error(
        "Unknown additional argument '{token}' (expected {expected} arguments, found {found})."
    )]
    UnexpectedArgument {
        /// The unmatched token.
        token: String,
        /// The number of declared positionals.
        expected: usize,
        /// The number of positional tokens seen, including this one.
        found: usize,
    },
    /// A process argument is not valid unicode.
    #[error("Argument '{token}' is not valid unicode.")]
    NonUnicode {
        /// The argument, lossily converted.
        token: String,
    },
    /// The tokens ran out before every required positional was filled.
    #[error("Missing required arguments: {}.", angle_list(.names))]
    MissingArguments {
        /// The names of the unfilled positionals, in declaration order.
        names: Vec<String>,
    },
}

fn angle_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("<{name}>"))
        .collect::<Vec<String>>()
        .join(" ")
}

impl ParseError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingValue { .. } => ErrorKind::MissingValueForFlag,
            ParseError::EmptyAssignment { .. } => ErrorKind::EmptyInlineAssignment,
            ParseError::InvalidValue(InvalidValue::Custom { .. }) => {
                ErrorKind::CustomValidationFailed
            }
            ParseError::InvalidValue(_) => ErrorKind::InvalidTypedValue,
            ParseError::UnknownOption { .. } => ErrorKind::UnknownOption,
            ParseError::UnexpectedArgument { .. } => ErrorKind::UnexpectedPositional,
            ParseError::MissingArguments { .. } => ErrorKind::MissingRequiredPositionals,
            ParseError::NonUnicode { .. } => ErrorKind::NonUnicodeArgument,
        }
    }
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Every token was matched, and every required positional was filled.
    Complete,
    /// An exit-on-match switch was matched.
    /// Tokens after it were not inspected, and positionals were not checked.
    Exit {
        /// The switch, as it was typed.
        switch: String,
    },
}

/// Behaviour to capture an explicit generic type T from an input `&str`.
///
/// We use this at the parser level, so that all fields may be captured uniformly.
pub(crate) trait AnonymousCapturable {
    /// Convert the token and store it into the underlying variable.
    /// The identity names the target in the diagnostic, should the conversion fail.
    fn capture(&mut self, identity: &str, token: &str) -> Result<(), InvalidValue>;
}

pub(crate) struct Parser<'a> {
    positionals: Vec<PositionalInner<'a>>,
    valued_flags: Vec<ValuedFlagInner<'a>>,
    switches: Vec<SwitchInner<'a>>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parser[positionals={p}, valued_flags={v}, switches={s}]",
            p = self.positionals.len(),
            v = self.valued_flags.len(),
            s = self.switches.len(),
        )
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn new(classified: Classified<'a>) -> Result<Self, ConfigError> {
        let Classified {
            positionals,
            valued_flags,
            switches,
        } = classified;
        let mut names: HashSet<&str> = HashSet::default();

        for (i, positional) in positionals.iter().enumerate() {
            if !names.insert(positional.name.as_str()) {
                return Err(ConfigError(format!(
                    "positional '{}' is specified more than once.",
                    positional.name
                )));
            }

            if positional.repeating.is_some() && i + 1 < positionals.len() {
                return Err(ConfigError(format!(
                    "repeating positional '{}' must be the final positional.",
                    positional.name
                )));
            }
        }

        let mut spellings: HashSet<String> = HashSet::default();
        let options = valued_flags
            .iter()
            .map(|o| (&o.spelling, &o.description))
            .chain(switches.iter().map(|s| (&s.spelling, &s.description)));

        for (spelling, description) in options {
            spelling.validate(description)?;

            for s in [spelling.short(), spelling.long()].into_iter().flatten() {
                if spellings.contains(&s) {
                    return Err(ConfigError(format!(
                        "option '{s}' is specified more than once."
                    )));
                }

                spellings.insert(s);
            }
        }

        Ok(Self {
            positionals,
            valued_flags,
            switches,
        })
    }

    /// Match and capture every token, in order.
    /// On failure, also returns the index of the token at fault (`tokens.len()` when the tokens ran out).
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        let mut next_positional: usize = 0;
        let mut positional_tokens: usize = 0;
        let mut repeating_matches: usize = 0;
        let mut index: usize = 0;

        'tokens: while index < tokens.len() {
            let token = tokens[index];

            for valued_flag in self.valued_flags.iter_mut() {
                if valued_flag.spelling.matches(token) {
                    let value_index = index + 1;
                    let value = tokens.get(value_index).ok_or_else(|| {
                        (
                            index,
                            ParseError::MissingValue {
                                flag: token.to_string(),
                            },
                        )
                    })?;
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' matched valued-flag, capturing '{value}'.");
                    }
                    valued_flag
                        .field
                        .capture(&valued_flag.spelling.identity(), value)
                        .map_err(|error| (value_index, ParseError::from(error)))?;
                    index += 2;
                    continue 'tokens;
                }

                if let Some(value) = valued_flag.spelling.inline_value(token) {
                    let identity = valued_flag.spelling.identity();

                    if value.is_empty() {
                        return Err((index, ParseError::EmptyAssignment { flag: identity }));
                    }

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' matched valued-flag inline, capturing '{value}'.");
                    }
                    valued_flag
                        .field
                        .capture(&identity, value)
                        .map_err(|error| (index, ParseError::from(error)))?;
                    index += 1;
                    continue 'tokens;
                }
            }

            for switch in self.switches.iter_mut() {
                if switch.spelling.matches(token) {
                    switch.field.matched();

                    if switch.exit_on_match {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Token '{token}' matched exit-on-match switch, short-circuiting."
                            );
                        }
                        return Ok(Action::Exit {
                            switch: token.to_string(),
                        });
                    }

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' matched switch.");
                    }
                    index += 1;
                    continue 'tokens;
                }
            }

            if token.starts_with(OPTION_PREFIX) {
                return Err((
                    index,
                    ParseError::UnknownOption {
                        token: token.to_string(),
                    },
                ));
            }

            positional_tokens += 1;
            let expected = self.positionals.len();

            match self.positionals.get_mut(next_positional) {
                None => {
                    return Err((
                        index,
                        ParseError::UnexpectedArgument {
                            token: token.to_string(),
                            expected,
                            found: positional_tokens,
                        },
                    ));
                }
                Some(positional) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' matched positional '{}'.", positional.name);
                    }
                    positional
                        .field
                        .capture(&positional.name, token)
                        .map_err(|error| (index, ParseError::from(error)))?;

                    if positional.repeating.is_some() {
                        repeating_matches += 1;
                    } else {
                        next_positional += 1;
                    }
                }
            }

            index += 1;
        }

        let missing: Vec<String> = self.positionals[next_positional..]
            .iter()
            .filter(|positional| match positional.repeating {
                None => true,
                Some(Nargs::Any) => false,
                Some(Nargs::AtLeastOne) => repeating_matches == 0,
            })
            .map(|positional| positional.name.clone())
            .collect();

        if missing.is_empty() {
            Ok(Action::Complete)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Tokens exhausted with unfilled positionals: {missing:?}.");
            }
            Err((
                tokens.len(),
                ParseError::MissingArguments { names: missing },
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{List, Parameter, Scalar, Switch};
    use crate::parser::classify::classify;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn parser(parameters: Vec<Parameter<'_>>) -> Parser<'_> {
        Parser::new(classify(parameters)).unwrap()
    }

    #[test]
    fn empty() {
        // Setup
        let parser = parser(Vec::default());

        // Execute
        let result = parser.consume(empty::slice());

        // Verify
        assert_eq!(result, Ok(Action::Complete));
    }

    #[test]
    fn empty_unexpected() {
        // Setup
        let parser = parser(Vec::default());

        // Execute
        let result = parser.consume(&["x"]);

        // Verify
        assert_eq!(
            result,
            Err((
                0,
                ParseError::UnexpectedArgument {
                    token: "x".to_string(),
                    expected: 0,
                    found: 1,
                }
            ))
        );
    }

    #[test]
    fn positionals() {
        // Setup
        let mut a: String = String::default();
        let mut b: u32 = 0;
        let parser = parser(vec![
            Parameter::positional(Scalar::new(&mut a), "a", ""),
            Parameter::positional(Scalar::new(&mut b), "b", ""),
        ]);

        // Execute
        let result = parser.consume(&["x", "7"]);

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(a, "x");
        assert_eq!(b, 7);
    }

    #[test]
    fn positional_invalid() {
        // Setup
        let mut a: u8 = 0;
        let parser = parser(vec![Parameter::positional(Scalar::new(&mut a), "a", "")]);

        // Execute
        let result = parser.consume(&["256"]);

        // Verify
        assert_matches!(result, Err((0, error)) => {
            assert_eq!(error.kind(), ErrorKind::InvalidTypedValue);
            assert_eq!(error.to_string(), "'256' is out of range for 'a': uint8 must be within [0, 255].");
        });
    }

    #[rstest]
    #[case(empty::slice(), vec!["a", "b"])]
    #[case(&["x"], vec!["b"])]
    fn positionals_missing(#[case] tokens: &[&str], #[case] expected: Vec<&str>) {
        // Setup
        let mut a: String = String::default();
        let mut b: String = String::default();
        let parser = parser(vec![
            Parameter::positional(Scalar::new(&mut a), "a", ""),
            Parameter::positional(Scalar::new(&mut b), "b", ""),
        ]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(
            result,
            Err((
                tokens.len(),
                ParseError::MissingArguments {
                    names: expected.into_iter().map(|n| n.to_string()).collect(),
                }
            ))
        );
    }

    #[test]
    fn positionals_unexpected() {
        // Setup
        let mut a: String = String::default();
        let parser = parser(vec![Parameter::positional(Scalar::new(&mut a), "a", "")]);

        // Execute
        let result = parser.consume(&["x", "y"]);

        // Verify
        assert_matches!(result, Err((1, error)) => {
            assert_eq!(error.kind(), ErrorKind::UnexpectedPositional);
            assert_eq!(error.to_string(), "Unknown additional argument 'y' (expected 1 arguments, found 2).");
        });
    }

    #[rstest]
    #[case(Nargs::Any, empty::slice(), Ok(Action::Complete), vec![])]
    #[case(Nargs::Any, &["1"], Ok(Action::Complete), vec![1])]
    #[case(Nargs::Any, &["1", "2", "3"], Ok(Action::Complete), vec![1, 2, 3])]
    #[case(Nargs::AtLeastOne, empty::slice(), Err((0, ParseError::MissingArguments { names: vec!["items".to_string()] })), vec![])]
    #[case(Nargs::AtLeastOne, &["1", "2"], Ok(Action::Complete), vec![1, 2])]
    fn positional_list(
        #[case] nargs: Nargs,
        #[case] tokens: &[&str],
        #[case] expected: Result<Action, (usize, ParseError)>,
        #[case] expected_items: Vec<u32>,
    ) {
        // Setup
        let mut items: Vec<u32> = Vec::default();
        let parser = parser(vec![Parameter::positional_list(
            List::new(&mut items, nargs),
            "items",
            "",
        )]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(result, expected);
        assert_eq!(items, expected_items);
    }

    #[test]
    fn positional_list_after_scalar() {
        // Setup
        let mut first: String = String::default();
        let mut rest: Vec<String> = Vec::default();
        let parser = parser(vec![
            Parameter::positional(Scalar::new(&mut first), "first", ""),
            Parameter::positional_list(List::new(&mut rest, Nargs::AtLeastOne), "rest", ""),
        ]);

        // Execute
        let result = parser.consume(&["a", "b", "c"]);

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(first, "a");
        assert_eq!(rest, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn positional_list_random() {
        // Setup
        let count: usize = thread_rng().gen_range(0..64);
        let values: Vec<u32> = (0..count).map(|_| thread_rng().gen()).collect();
        let tokens: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut items: Vec<u32> = Vec::default();
        let parser = parser(vec![Parameter::positional_list(
            List::new(&mut items, Nargs::Any),
            "items",
            "",
        )]);

        // Execute
        let result = parser.consume(tokens.as_slice());

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(items, values);
    }

    #[rstest]
    #[case(&["-o", "x.txt"])]
    #[case(&["--output", "x.txt"])]
    #[case(&["--output=x.txt"])]
    #[case(&["-o", "y.txt", "--output=x.txt"])]
    fn valued_flag(#[case] tokens: &[&str]) {
        // Setup
        let mut output: String = String::default();
        let parser = parser(vec![Parameter::valued_flag(
            Scalar::new(&mut output),
            Some('o'),
            Some("output"),
            "FILE",
            "",
        )]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(output, "x.txt");
    }

    #[test]
    fn valued_flag_value_looks_like_option() {
        // Setup
        let mut output: String = String::default();
        let mut warnings = false;
        let parser = parser(vec![
            Parameter::valued_flag(Scalar::new(&mut output), Some('o'), None, "FILE", ""),
            Parameter::switch(Switch::new(&mut warnings), Some('w'), None, "", false),
        ]);

        // Execute
        let result = parser.consume(&["-o", "-w"]);

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(output, "-w");
        assert!(!warnings);
    }

    #[rstest]
    #[case(&["-o"], 0, ParseError::MissingValue { flag: "-o".to_string() })]
    #[case(&["--output"], 0, ParseError::MissingValue { flag: "--output".to_string() })]
    #[case(&["x", "--output="], 1, ParseError::EmptyAssignment { flag: "--output".to_string() })]
    fn valued_flag_missing(
        #[case] tokens: &[&str],
        #[case] expected_index: usize,
        #[case] expected: ParseError,
    ) {
        // Setup
        let mut output: String = String::default();
        let mut a: String = String::default();
        let parser = parser(vec![
            Parameter::valued_flag(
                Scalar::new(&mut output),
                Some('o'),
                Some("output"),
                "FILE",
                "",
            ),
            Parameter::positional(Scalar::new(&mut a), "a", ""),
        ]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(result, Err((expected_index, expected)));
    }

    #[rstest]
    #[case(&["-q", "101"], 1)]
    #[case(&["--quality=abc"], 0)]
    fn valued_flag_custom_invalid(#[case] tokens: &[&str], #[case] expected_index: usize) {
        // Setup
        let mut quality: u32 = 0;
        let parser = parser(vec![Parameter::valued_flag(
            Scalar::custom(&mut quality, |_, token| match token.parse::<u32>() {
                Ok(value) if value <= 100 => Ok(value),
                _ => Err("expected a percentage".to_string()),
            }),
            Some('q'),
            Some("quality"),
            "LEVEL",
            "",
        )]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_matches!(result, Err((index, error)) => {
            assert_eq!(index, expected_index);
            assert_eq!(error.kind(), ErrorKind::CustomValidationFailed);
        });
    }

    #[rstest]
    #[case(&["-w"])]
    #[case(&["--warnings"])]
    #[case(&["-w", "--warnings"])]
    fn switch(#[case] tokens: &[&str]) {
        // Setup
        let mut warnings = false;
        let parser = parser(vec![Parameter::switch(
            Switch::new(&mut warnings),
            Some('w'),
            Some("warnings"),
            "",
            false,
        )]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert!(warnings);
    }

    #[rstest]
    #[case(&["-h"], "-h", "")]
    #[case(&["x", "--help", "y", "z", "--bogus"], "--help", "x")]
    fn switch_exit(#[case] tokens: &[&str], #[case] expected: &str, #[case] expected_a: &str) {
        // Setup
        let mut help = false;
        let mut a: String = String::default();
        let mut b: String = String::default();
        let parser = parser(vec![
            Parameter::help_switch(&mut help),
            Parameter::positional(Scalar::new(&mut a), "a", ""),
            Parameter::positional(Scalar::new(&mut b), "b", ""),
        ]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(
            result,
            Ok(Action::Exit {
                switch: expected.to_string()
            })
        );
        assert!(help);
        assert_eq!(a, expected_a);
        assert_eq!(b, "");
    }

    #[rstest]
    #[case(&["-x"], 0, "-x")]
    #[case(&["a", "--verbose"], 1, "--verbose")]
    #[case(&["-"], 0, "-")]
    #[case(&["-o=x"], 0, "-o=x")]
    fn unknown_option(
        #[case] tokens: &[&str],
        #[case] expected_index: usize,
        #[case] expected: &str,
    ) {
        // Setup
        let mut output: String = String::default();
        let mut a: String = String::default();
        let parser = parser(vec![
            Parameter::valued_flag(Scalar::new(&mut output), Some('o'), None, "FILE", ""),
            Parameter::positional(Scalar::new(&mut a), "a", ""),
        ]);

        // Execute
        let result = parser.consume(tokens);

        // Verify
        assert_eq!(
            result,
            Err((
                expected_index,
                ParseError::UnknownOption {
                    token: expected.to_string()
                }
            ))
        );
    }

    #[test]
    fn interleaved() {
        // Setup
        let mut input: String = String::default();
        let mut algorithm: String = String::default();
        let mut output: Option<String> = None;
        let mut warnings = false;
        let parser = parser(vec![
            Parameter::positional(Scalar::new(&mut input), "input_file", ""),
            Parameter::positional(Scalar::new(&mut algorithm), "algorithm", ""),
            Parameter::valued_flag(
                Scalar::new(&mut output),
                Some('o'),
                Some("output"),
                "FILE",
                "",
            ),
            Parameter::switch(Switch::new(&mut warnings), Some('w'), None, "", false),
        ]);

        // Execute
        let result = parser.consume(&["-w", "in.txt", "--output=out.txt", "fast"]);

        // Verify
        assert_eq!(result, Ok(Action::Complete));
        assert_eq!(input, "in.txt");
        assert_eq!(algorithm, "fast");
        assert_eq!(output, Some("out.txt".to_string()));
        assert!(warnings);
    }

    #[test]
    fn config_duplicate_positional() {
        let mut a: String = String::default();
        let mut b: String = String::default();
        let result = Parser::new(classify(vec![
            Parameter::positional(Scalar::new(&mut a), "a", ""),
            Parameter::positional(Scalar::new(&mut b), "a", ""),
        ]));

        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "positional 'a' is specified more than once.");
        });
    }

    #[test]
    fn config_repeating_not_last() {
        let mut a: Vec<String> = Vec::default();
        let mut b: String = String::default();
        let result = Parser::new(classify(vec![
            Parameter::positional_list(List::new(&mut a, Nargs::Any), "a", ""),
            Parameter::positional(Scalar::new(&mut b), "b", ""),
        ]));

        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, "repeating positional 'a' must be the final positional.");
        });
    }

    #[test]
    fn config_multiple_repeating() {
        let mut a: Vec<String> = Vec::default();
        let mut b: Vec<String> = Vec::default();
        let result = Parser::new(classify(vec![
            Parameter::positional_list(List::new(&mut a, Nargs::Any), "a", ""),
            Parameter::positional_list(List::new(&mut b, Nargs::Any), "b", ""),
        ]));

        assert_matches!(result, Err(ConfigError(_)));
    }

    #[rstest]
    #[case(Some('o'), None, Some('o'), Some("other"), "-o")]
    #[case(None, Some("output"), Some('x'), Some("output"), "--output")]
    fn config_duplicate_spelling(
        #[case] short_a: Option<char>,
        #[case] long_a: Option<&str>,
        #[case] short_b: Option<char>,
        #[case] long_b: Option<&str>,
        #[case] expected: &str,
    ) {
        let mut a: String = String::default();
        let mut b = false;
        let result = Parser::new(classify(vec![
            Parameter::valued_flag(Scalar::new(&mut a), short_a, long_a, "A", ""),
            Parameter::switch(Switch::new(&mut b), short_b, long_b, "", false),
        ]));

        assert_matches!(result, Err(ConfigError(message)) => {
            assert_eq!(message, format!("option '{expected}' is specified more than once."));
        });
    }

    #[test]
    fn config_missing_spelling() {
        let mut a: String = String::default();
        let mut b = false;
        let valued_flag = Parser::new(classify(vec![Parameter::valued_flag(
            Scalar::new(&mut a),
            None,
            None,
            "A",
            "The a.",
        )]));
        let switch = Parser::new(classify(vec![Parameter::switch(
            Switch::new(&mut b),
            None,
            None,
            "The b.",
            false,
        )]));

        assert_matches!(valued_flag, Err(ConfigError(message)) => {
            assert_eq!(message, "option 'The a.' must have a short or long spelling.");
        });
        assert_matches!(switch, Err(ConfigError(message)) => {
            assert_eq!(message, "option 'The b.' must have a short or long spelling.");
        });
    }

    #[rstest]
    #[case(ParseError::MissingValue { flag: "-o".to_string() }, "Option '-o' requires an argument.")]
    #[case(ParseError::EmptyAssignment { flag: "--output".to_string() }, "Option '--output' cannot be assigned an empty value.")]
    #[case(ParseError::UnknownOption { token: "-x".to_string() }, "Unknown option '-x'.")]
    #[case(ParseError::NonUnicode { token: "a\u{FFFD}".to_string() }, "Argument 'a\u{FFFD}' is not valid unicode.")]
    #[case(ParseError::MissingArguments { names: vec!["a".to_string(), "b".to_string()] }, "Missing required arguments: <a> <b>.")]
    fn parse_error_display(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError("abc".to_string()).to_string(),
            "Config error: abc"
        );
    }
}
