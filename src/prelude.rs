//! Traits which, typically, may be imported without concern: `use clags::prelude::*`.

/// Behaviour for multiple (0 to many) items T to be collected together.
///
/// A repeating positional argument adds each of its converted tokens, in order, via [`Collectable::add`].
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);
}
