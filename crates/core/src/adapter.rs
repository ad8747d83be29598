//! Argument-order adapters.
//!
//! The traversal primitives in [`crate::iterate`] call visitors as
//! `(this, element, index)`. The public methods promise `(index, element)`.
//! One adapter per call site keeps that translation in a single place.

/// Turn an `(this, index, element)` callback into an `(this, element, index)` visitor.
///
/// The adapter swaps the two positional arguments and does nothing else.
pub fn index_first<C, E, R, F>(mut callback: F) -> impl FnMut(&mut C, E, usize) -> R
where
    F: FnMut(&mut C, usize, E) -> R,
{
    move |this: &mut C, element: E, index: usize| callback(this, index, element)
}

/// Turn an element-only test into an `(this, element, index)` visitor that ignores
/// both the context and the index.
pub fn element_only<C, E, R, F>(mut test: F) -> impl FnMut(&mut C, E, usize) -> R
where
    F: FnMut(E) -> R,
{
    move |_: &mut C, element: E, _: usize| test(element)
}
