use std::env;
use std::ffi::OsString;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Usage;
use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](./struct.CommandLineParser.html#method.build) or [`CommandLineParser::build_parser`](./struct.CommandLineParser.html#method.build_parser).
pub struct GeneralParser<'a> {
    parser: Parser<'a>,
    usage: Usage,
    user_interface: Box<dyn UserInterface>,
}

#[cfg(test)]
impl<'a> std::fmt::Debug for GeneralParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeneralParser[{parser:?}]", parser = self.parser)
    }
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        parser: Parser<'a>,
        usage: Usage,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            usage,
            user_interface,
        }
    }

    /// The usage text of this parser.
    ///
    /// Take this before parsing, since parsing consumes the parser.
    pub fn usage(&self) -> Usage {
        self.usage.clone()
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Tokens are processed left to right; each is matched as a valued-flag, then a switch, then a positional.
    /// Matched values are converted and written into the program variables as they are encountered.
    ///
    /// On success, returns either [`Action::Complete`], or [`Action::Exit`] when an exit-on-match switch (ex: `--help`) was matched.
    ///
    /// Parsing stops at the first error.
    /// The error is printed to standard error, along with the tokens and a marker under the token at fault, and then returned.
    /// Variables written before the error keep their values.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Action, ParseError> {
        let GeneralParser {
            parser,
            usage: _,
            user_interface,
        } = self;

        parser
            .consume(tokens)
            .map_err(|(index, parse_error)| report(&*user_interface, index, tokens, parse_error))
    }

    /// Run the command line parser against the process arguments (skipping the program name).
    ///
    /// Returns `true` when the parse succeeded, including when an exit-on-match switch was matched.
    /// Returns `false` otherwise, after the error has been printed.
    pub fn parse(self) -> bool {
        let arguments: Vec<OsString> = env::args_os().skip(1).collect();
        self.parse_arguments(&arguments).is_ok()
    }

    pub(crate) fn parse_arguments(self, arguments: &[OsString]) -> Result<Action, ParseError> {
        match unicode_tokens(arguments) {
            Ok(tokens) => self.parse_tokens(&tokens),
            Err((index, parse_error)) => {
                let lossy: Vec<String> = arguments
                    .iter()
                    .map(|argument| argument.to_string_lossy().to_string())
                    .collect();
                let lossy: Vec<&str> = lossy.iter().map(AsRef::as_ref).collect();
                Err(report(&*self.user_interface, index, &lossy, parse_error))
            }
        }
    }
}

// Every argument must be unicode before any of them are matched.
fn unicode_tokens(arguments: &[OsString]) -> Result<Vec<&str>, (usize, ParseError)> {
    arguments
        .iter()
        .enumerate()
        .map(|(index, argument)| {
            argument.to_str().ok_or_else(|| {
                (
                    index,
                    ParseError::NonUnicode {
                        token: argument.to_string_lossy().to_string(),
                    },
                )
            })
        })
        .collect()
}

fn report(
    user_interface: &dyn UserInterface,
    index: usize,
    tokens: &[&str],
    parse_error: ParseError,
) -> ParseError {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Parse failed at token {index}: {parse_error:?}.");
    }
    user_interface.print_error(parse_error.clone());
    user_interface.print_error_context(ErrorContext::new(index, tokens));
    parse_error
}
