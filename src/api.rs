mod convert;
mod core;
mod field;
mod parameter;

pub use self::core::*;
pub use convert::*;
pub use field::*;
pub use parameter::*;
