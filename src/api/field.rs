use std::collections::HashSet;

use crate::api::convert::{Conversion, InvalidValue, Value};
use crate::constant::INITIAL_LIST_CAPACITY;
use crate::model::{Nargs, ValueKind};
use crate::parser::AnonymousCapturable;
use crate::prelude::Collectable;

/// A parameter that binds precisely one value (applies to positionals & valued-flags).
///
/// Each match overwrites the variable, so a repeated valued-flag keeps its final value.
pub struct Scalar<'a, T> {
    variable: &'a mut T,
    conversion: Conversion<T>,
}

impl<'a, T: Value> Scalar<'a, T> {
    /// Create a scalar parameter, converted by the [`Value`] implementation of `T`.
    ///
    /// ### Example
    /// ```
    /// use clags::Scalar;
    ///
    /// let mut level: u8 = 0;
    /// Scalar::new(&mut level);
    /// ```
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            variable,
            conversion: Conversion::typed(),
        }
    }
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar parameter, converted by a custom function.
    ///
    /// The converter receives the parameter identity and the token.
    /// It returns its own diagnostic on failure.
    ///
    /// ### Example
    /// ```
    /// use clags::Scalar;
    ///
    /// let mut even: u32 = 0;
    /// Scalar::custom(&mut even, |identity, token| match token.parse::<u32>() {
    ///     Ok(value) if value % 2 == 0 => Ok(value),
    ///     _ => Err(format!("{identity} must be an even number")),
    /// });
    /// ```
    pub fn custom(
        variable: &'a mut T,
        converter: impl Fn(&str, &str) -> Result<T, String> + 'static,
    ) -> Self {
        Self {
            variable,
            conversion: Conversion::custom(converter),
        }
    }

    pub(crate) fn kind(&self) -> ValueKind {
        self.conversion.kind()
    }
}

impl<'a, T> AnonymousCapturable for Scalar<'a, T> {
    fn capture(&mut self, identity: &str, token: &str) -> Result<(), InvalidValue> {
        *self.variable = self.conversion.apply(identity, token)?;
        Ok(())
    }
}

/// A repeating positional parameter, which accumulates every remaining positional token.
///
/// The items are added to the variable via [`Collectable`].
/// Anything already in the variable is kept (the tokens extend, rather than replace, it).
pub struct List<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: &'a mut C,
    conversion: Conversion<T>,
    nargs: Nargs,
}

impl<'a, C, T> List<'a, C, T>
where
    C: 'a + Collectable<T>,
    T: Value,
{
    /// Create a list parameter, converting each item by the [`Value`] implementation of `T`.
    ///
    /// ### Example
    /// ```
    /// use clags::{List, Nargs};
    ///
    /// let mut items: Vec<i32> = Vec::default();
    /// List::new(&mut items, Nargs::AtLeastOne);
    /// ```
    pub fn new(variable: &'a mut C, nargs: Nargs) -> Self {
        Self {
            variable,
            conversion: Conversion::typed(),
            nargs,
        }
    }
}

impl<'a, C, T> List<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a list parameter, converting each item by a custom function.
    ///
    /// Items converted before a rejected token remain in the variable.
    pub fn custom(
        variable: &'a mut C,
        nargs: Nargs,
        converter: impl Fn(&str, &str) -> Result<T, String> + 'static,
    ) -> Self {
        Self {
            variable,
            conversion: Conversion::custom(converter),
            nargs,
        }
    }

    pub(crate) fn kind(&self) -> ValueKind {
        self.conversion.kind()
    }

    pub(crate) fn nargs(&self) -> Nargs {
        self.nargs
    }
}

impl<'a, C, T> AnonymousCapturable for List<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    fn capture(&mut self, identity: &str, token: &str) -> Result<(), InvalidValue> {
        let item = self.conversion.apply(identity, token)?;
        self.variable.add(item);
        Ok(())
    }
}

/// A boolean parameter that takes no value; matching it sets the variable to `true`.
pub struct Switch<'a> {
    variable: &'a mut bool,
}

impl<'a> Switch<'a> {
    /// Create a switch parameter.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }

    pub(crate) fn matched(&mut self) {
        *self.variable = true;
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        if self.len() == self.capacity() {
            let grown = std::cmp::max(INITIAL_LIST_CAPACITY, self.capacity() * 2);
            self.reserve_exact(grown - self.len());
        }

        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
