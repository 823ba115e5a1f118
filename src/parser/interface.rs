use crate::parser::base::ParseError;
use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeftWidth(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MiddleWidth(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TotalWidth(pub usize);

pub(crate) const SEPARATOR: &str = " : ";

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders `left : middle` rows, wrapping the middle column when it has a width.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: LeftWidth,
    middle: Option<MiddleWidth>,
}

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// This renderer will use a heuristic to chose the middle width.
    /// Without a total width, the middle column is never wrapped.
    pub(crate) fn guided(
        indent: usize,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: Option<TotalWidth>,
    ) -> Self {
        let Some(total_width) = total_width else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No total width.  Selecting unwrapped middle.");
            }

            return Self::new(indent, left, None);
        };

        let non_middle = indent + left.0 + SEPARATOR.len();
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle.0, MINIMUM_MIDDLE_WIDTH);

        if guided_middle + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {guided_middle}.");
            }

            Self::new(indent, left, Some(MiddleWidth(guided_middle)))
        } else if non_middle < total_width.0 {
            let calculated_middle = std::cmp::max(total_width.0 - non_middle, MINIMUM_MIDDLE_WIDTH);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fits within the total {total_width:?}.  Selecting middle: {calculated_middle}.");
            }

            Self::new(indent, left, Some(MiddleWidth(calculated_middle)))
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {total_width:?}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
            }

            Self::new(indent, left, Some(MiddleWidth(MINIMUM_MIDDLE_WIDTH)))
        }
    }

    pub(crate) fn new(indent: usize, left: LeftWidth, middle: Option<MiddleWidth>) -> Self {
        Self {
            indent,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str) -> Vec<String> {
        let indent = self.indent;
        let left_column_width = self.left.0;
        let middle_parts = match &self.middle {
            Some(MiddleWidth(width)) => chunk(middle, *width),
            None => {
                let line = words(middle).collect::<Vec<&str>>().join(" ");

                if line.is_empty() {
                    Vec::default()
                } else {
                    vec![line]
                }
            }
        };
        let mut out = Vec::default();

        for (i, part) in middle_parts.iter().enumerate() {
            if i == 0 {
                out.push(format!(
                    "{:indent$}{:left_column_width$}{SEPARATOR}{part}",
                    "", left
                ));
            } else {
                out.push(format!(
                    "{:indent$}{:left_column_width$}{:separator_width$}{part}",
                    "",
                    "",
                    "",
                    separator_width = SEPARATOR.len()
                ));
            }
        }

        if out.is_empty() {
            out.push(
                format!("{:indent$}{:left_column_width$}{SEPARATOR}", "", left)
                    .trim_end()
                    .to_string(),
            );
        }

        out
    }
}

fn words(paragraph: &str) -> impl Iterator<Item = &str> {
    paragraph.split(' ').filter(|word| !word.is_empty())
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in words(paragraph) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = String::default();
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;
    let mut right = increment;

    while right + 1 < characters.len() {
        lines.push(format!(
            "{}-",
            characters[left..right].iter().collect::<String>()
        ));
        left += increment;
        right += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Parse error: {error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
