mod base;
pub(crate) mod classify;
mod interface;
mod middleware;
mod printer;

pub use base::{Action, ConfigError, ParseError};
pub(crate) use base::{AnonymousCapturable, Parser};
pub(crate) use classify::{classify, Classified};
pub(crate) use interface::*;
pub use middleware::GeneralParser;
pub(crate) use printer::ErrorContext;
pub use printer::Usage;
