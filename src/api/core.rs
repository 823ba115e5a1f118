use crate::api::Parameter;
use crate::parser::{
    classify, ConfigError, ConsoleInterface, GeneralParser, Parser, Usage, UserInterface,
};

/// The command line parser builder.
///
/// ### Example
/// ```
/// use clags::{Action, CommandLineParser};
///
/// let parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add.
///     .build();
/// assert_eq!(parser.parse_tokens(empty::slice()).unwrap(), Action::Complete);
/// ```
pub struct CommandLineParser<'a> {
    program: String,
    about: Option<String>,
    parameters: Vec<Parameter<'a>>,
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    /// The `program` names the executable in the usage synopsis.
    ///
    /// ### Example
    /// ```
    /// use clags::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            parameters: Vec::default(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// ### Example
    /// ```
    /// use clags::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.")
    ///     .build();
    ///
    /// assert!(parser.usage().render().contains("My program that does awesome stuff."));
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add a positional, valued-flag, or switch to the command line parser.
    ///
    /// The order of positionals corresponds to their order during parsing.
    /// The order of valued-flags and switches only affects the usage text.
    ///
    /// ### Example
    /// ```
    /// use clags::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::positional(Scalar::new(&mut a), "a", "The first."))
    ///     .add(Parameter::positional(Scalar::new(&mut b), "b", "The second."))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["1", "2"].as_slice()).unwrap();
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add(mut self, parameter: Parameter<'a>) -> Self {
        self.parameters.push(parameter);
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        let CommandLineParser {
            program,
            about,
            parameters,
        } = self;
        let classified = classify(parameters);
        let usage = Usage::terminal(program, about, &classified);
        let parser = Parser::new(classified)?;
        Ok(GeneralParser::new(parser, usage, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option spelling).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option spelling).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
