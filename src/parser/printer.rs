use terminal_size::{terminal_size, Width};

use crate::model::{Nargs, ValueKind};
use crate::parser::classify::Classified;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, TotalWidth};

const MAIN_INDENT: usize = 4;
const MINIMUM_LEFT_WIDTH: usize = 16;

#[derive(Debug, Clone)]
struct Row {
    left: String,
    middle: String,
}

impl Row {
    fn new(left: String, description: &str, tag: Option<String>) -> Self {
        let middle = match tag {
            Some(tag) if description.is_empty() => tag,
            Some(tag) => format!("{description} {tag}"),
            None => description.to_string(),
        };

        Self { left, middle }
    }
}

fn tag(kind: ValueKind, repeating: Option<Nargs>) -> Option<String> {
    match (kind.tag(), repeating) {
        (Some(t), None) => Some(format!("({t})")),
        (Some(t), Some(_)) => Some(format!("({t}[])")),
        (None, None) => None,
        (None, Some(_)) => Some("([])".to_string()),
    }
}

/// The usage text of a command line parser.
/// Obtained via [`GeneralParser::usage`](./struct.GeneralParser.html#method.usage).
///
/// Consists of a synopsis line, the optional about paragraph, and then the `Arguments:`, `Options:`, and `Flags:` blocks.
/// Blocks without any entries are omitted.
#[derive(Debug, Clone)]
pub struct Usage {
    synopsis: String,
    about: Option<String>,
    arguments: Vec<Row>,
    options: Vec<Row>,
    flags: Vec<Row>,
    terminal_width: Option<usize>,
}

impl Usage {
    pub(crate) fn terminal(
        program: impl Into<String>,
        about: Option<String>,
        classified: &Classified<'_>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, classified, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        classified: &Classified<'_>,
        terminal_width: Option<usize>,
    ) -> Self {
        let mut synopsis = vec![format!("Usage: {}", program.into())];

        if !classified.valued_flags.is_empty() {
            synopsis.push("[OPTIONS]".to_string());
        }

        if !classified.switches.is_empty() {
            synopsis.push("[FLAGS]".to_string());
        }

        for positional in &classified.positionals {
            match positional.repeating {
                Some(_) => synopsis.push(format!("<{}>...", positional.name)),
                None => synopsis.push(format!("<{}>", positional.name)),
            }
        }

        let arguments = classified
            .positionals
            .iter()
            .map(|p| Row::new(p.name.clone(), &p.description, tag(p.kind, p.repeating)))
            .collect();
        let options = classified
            .valued_flags
            .iter()
            .map(|o| {
                Row::new(
                    format!("{} <{}>", o.spelling.render(), o.field_name),
                    &o.description,
                    tag(o.kind, None),
                )
            })
            .collect();
        let flags = classified
            .switches
            .iter()
            .map(|s| Row::new(s.spelling.render(), &s.description, None))
            .collect();

        Self {
            synopsis: synopsis.join(" "),
            about,
            arguments,
            options,
            flags,
            terminal_width,
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.synopsis.clone()];

        if let Some(about) = &self.about {
            lines.push(about.clone());
        }

        let rows = || {
            self.arguments
                .iter()
                .chain(self.options.iter())
                .chain(self.flags.iter())
        };
        let left_width = rows()
            .map(|row| row.left.chars().count())
            .fold(MINIMUM_LEFT_WIDTH, std::cmp::max);
        let middle_width = rows()
            .map(|row| row.middle.chars().count())
            .max()
            .unwrap_or_default();
        let column_renderer = ColumnRenderer::guided(
            MAIN_INDENT,
            LeftWidth(left_width),
            MiddleWidth(middle_width),
            self.terminal_width.map(TotalWidth),
        );

        for (header, block) in [
            ("Arguments:", &self.arguments),
            ("Options:", &self.options),
            ("Flags:", &self.flags),
        ] {
            if !block.is_empty() {
                lines.push(format!("  {header}"));

                for row in block {
                    lines.extend(column_renderer.render(&row.left, &row.middle));
                }
            }
        }

        lines
    }

    /// Render the usage text.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    /// Print the usage text to standard output.
    pub fn print(&self) {
        self.print_with(&ConsoleInterface::default());
    }

    pub(crate) fn print_with(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.lines() {
            user_interface.print(line);
        }
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Shows the input tokens, with a caret under the token at fault.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    index: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(index: usize, tokens: &[&str]) -> Self {
        Self {
            index,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        // An index past the final token points just after the projection.
        let column: usize = self.tokens[..std::cmp::min(self.index, self.tokens.len())]
            .iter()
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(f, "{projection}\n{:column$}^", "")
    }
}
