//! `clags` is a declarative, table driven command line parser for Rust.
//!
//! The program describes its command line as a list of [`Parameter`]s, each bound to one of the program's variables.
//! Parsing walks the process arguments once, left to right, converting each matched token and writing it straight into its variable.
//!
//! There are three kinds of parameters:
//! * *Positionals* are required, and matched by their order amongst the non-option tokens.
//! A final positional may repeat, collecting every remaining positional token into a list.
//! * *Valued-flags* are optional, spelled `-o` and/or `--output`, and take exactly one value: `--output x.txt` or `--output=x.txt`.
//! * *Switches* are optional boolean flags, spelled `-w` and/or `--warnings`.
//! A switch may *exit on match* (ex: `--help`), which ends the parse successfully without checking for missing positionals.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/example.rs")]
//! ```
//!
//! ```console
//! $ example in.txt FIFO LIFO -o out.txt
//! input: in.txt, output: Some("out.txt"), quality: None, warnings: false
//! algorithms: [Fifo, Lifo]
//!
//! $ example in.txt FIFO bad
//! Parse error: 'bad' does not match the custom criteria of 'algorithm': expected FIFO or LIFO
//! in.txt FIFO bad
//!             ^
//! Usage: example [OPTIONS] [FLAGS] <input_file> <algorithm>...
//! Process the input file with each algorithm, in order.
//!   Arguments:
//!     input_file            : The input file.
//!     algorithm             : The algorithms to use. (custom[])
//!   Options:
//!     -o, --output <FILE>   : The output file.
//!     -q, --quality <LEVEL> : The sample quality. (uint8)
//!   Flags:
//!     -w                    : Print warnings.
//!     -h, --help            : Print this help dialog.
//! ```
//!
//! # Builder Api
//! Configure `clags` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! Each parameter takes a *field*, which binds it to a program variable:
//! * [`Scalar`]: a single value, for [`Parameter::positional`] and [`Parameter::valued_flag`].
//! * [`List`]: many values, for [`Parameter::positional_list`].
//! The [`Nargs`] decides whether the list may be left empty.
//! Lists may be any [Collectable](./prelude/trait.Collectable.html); `clags` provides `Vec<T>` and `HashSet<T>`.
//! * [`Switch`]: a `bool`, for [`Parameter::switch`] and [`Parameter::help_switch`].
//!
//! Values are converted by their [`Value`] implementation: `String` (verbatim), `bool` (`true` or `false`), `i8`, `u8`, `i32`, `u32`, `f64`, and `Option<T>` of these.
//! Alternatively, `Scalar::custom` and `List::custom` accept a converter closure `(identity, token) -> Result<T, String>`.
//!
//! ### Matching
//! Each token is checked against the valued-flags, then the switches, and only then against the positionals.
//! So a positional value cannot literally equal a declared spelling.
//! Any other token beginning with `-` is an unknown option.
//!
//! ### Errors
//! Misconfigurations (ex: a repeated option spelling) are detected when building, as a [`ConfigError`].
//! Parsing stops at the first [`ParseError`], which is printed along with the tokens and a marker under the token at fault.
//! Variables written before the error keep their values.
//!
//! # Features
//! * `tracing_debug`: emit debug events, via `tracing`, as tokens are matched.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{Action, ConfigError, GeneralParser, ParseError, Usage};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {{
            let base = &$base;
            let sub = $sub;
            assert!(
                base.contains(sub),
                "'{b}' does not contain '{s}'",
                b = base,
                s = sub,
            );
        }};
    }

    pub(crate) use assert_contains;
}
