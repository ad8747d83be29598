//! The wrapped element collection and its `filter`, `each` and `map` methods.
//!
//! Callbacks use the `(index, element)` order. The `_with` variants also lend
//! a context value (`this`) to every invocation of a single call, the way a
//! `thisArg` is bound in the library this API mirrors.

use std::borrow::Cow;

use scraper::{ElementRef, Html};

use crate::adapter::{element_only, index_first};
use crate::error::Error;
use crate::iterate::{filter_ordered, iterate, map_ordered};
use crate::selector::Matcher;
use crate::summary::ElementSummary;

/// Boxed `(this, index, element)` predicate accepted by [`Filter::Predicate`].
pub type Predicate<'f, 'a, C> = Box<dyn FnMut(&mut C, usize, ElementRef<'a>) -> bool + 'f>;

/// What [`Collection::filter`] keeps: elements passing a predicate, or elements
/// matching a CSS selector.
pub enum Filter<'f, 'a, C = ()> {
    Predicate(Predicate<'f, 'a, C>),
    Selector(Cow<'f, str>),
}

impl<'f, 'a> Filter<'f, 'a, ()> {
    /// Build a predicate filter from an `(index, element)` closure.
    pub fn predicate<F>(mut predicate: F) -> Self
    where
        F: FnMut(usize, ElementRef<'a>) -> bool + 'f,
    {
        Filter::Predicate(Box::new(move |_: &mut (), index, element| {
            predicate(index, element)
        }))
    }
}

impl<'f, 'a, C> Filter<'f, 'a, C> {
    /// Build a predicate filter that also receives the call's context.
    pub fn predicate_with<F>(predicate: F) -> Self
    where
        F: FnMut(&mut C, usize, ElementRef<'a>) -> bool + 'f,
    {
        Filter::Predicate(Box::new(predicate))
    }

    pub fn selector(selector: impl Into<Cow<'f, str>>) -> Self {
        Filter::Selector(selector.into())
    }
}

impl<'f, 'a, C> From<&'f str> for Filter<'f, 'a, C> {
    fn from(selector: &'f str) -> Self {
        Filter::Selector(Cow::Borrowed(selector))
    }
}

impl<'f, 'a, C> From<String> for Filter<'f, 'a, C> {
    fn from(selector: String) -> Self {
        Filter::Selector(Cow::Owned(selector))
    }
}

impl<C> std::fmt::Debug for Filter<'_, '_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Predicate(_) => f.write_str("Filter::Predicate(..)"),
            Filter::Selector(selector) => {
                f.debug_tuple("Filter::Selector").field(selector).finish()
            }
        }
    }
}

/// An ordered collection of elements borrowed from a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection<'a> {
    elements: Vec<ElementRef<'a>>,
}

/// Wrap an ordered sequence of elements into a [`Collection`].
pub fn wrap<'a, I>(elements: I) -> Collection<'a>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let elements: Vec<_> = elements.into_iter().collect();
    log::trace!("wrapping {} element(s)", elements.len());
    Collection { elements }
}

impl<'a> Collection<'a> {
    /// Every element of `document` matching `selector`, in document order.
    pub fn select(document: &'a Html, selector: &str) -> Result<Self, Error> {
        let matcher = Matcher::parse(selector)?;
        Ok(wrap(document.select(matcher.css())))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ElementRef<'a>> {
        self.elements.get(index).copied()
    }

    pub fn first(&self) -> Option<ElementRef<'a>> {
        self.get(0)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, ElementRef<'a>>> {
        self.elements.iter().copied()
    }

    pub fn as_slice(&self) -> &[ElementRef<'a>] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<ElementRef<'a>> {
        self.elements
    }

    /// Keep the elements accepted by `selector`, returning them as a new collection.
    ///
    /// A string is tested with the CSS matcher; a string that does not parse
    /// keeps nothing. A predicate is called as `(index, element)`.
    ///
    /// ```rust,ignore
    /// let active = items.filter(".active");
    /// let odd = items.filter(Filter::predicate(|index, _| index % 2 == 1));
    /// ```
    pub fn filter<'f>(&self, selector: impl Into<Filter<'f, 'a>>) -> Collection<'a> {
        self.filter_with(selector, &mut ())
    }

    /// [`Collection::filter`] with `this` lent to every predicate invocation.
    ///
    /// Selector filters never look at `this`.
    pub fn filter_with<'f, C>(
        &self,
        selector: impl Into<Filter<'f, 'a, C>>,
        this: &mut C,
    ) -> Collection<'a> {
        let kept = match selector.into() {
            Filter::Predicate(mut predicate) => filter_ordered(
                &self.elements,
                this,
                index_first(|this: &mut C, index: usize, element: ElementRef<'a>| {
                    predicate(this, index, element)
                }),
            ),
            Filter::Selector(selector) => {
                let matcher = Matcher::lenient(&selector);
                filter_ordered(
                    &self.elements,
                    this,
                    element_only(|element: ElementRef<'a>| {
                        matcher.as_ref().is_some_and(|m| m.matches(&element))
                    }),
                )
            }
        };

        wrap(kept)
    }

    /// Call `callback(index, element)` for every element, in order.
    ///
    /// Returns the receiver for chaining.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(usize, ElementRef<'a>),
    {
        self.each_with(&mut (), |_, index, element| callback(index, element))
    }

    /// [`Collection::each`] with `this` lent to every invocation.
    pub fn each_with<C, F>(&self, this: &mut C, callback: F) -> &Self
    where
        F: FnMut(&mut C, usize, ElementRef<'a>),
    {
        iterate(&self.elements, this, index_first(callback));
        self
    }

    /// Collect `callback(index, element)` for every element, in order.
    pub fn map<R, F>(&self, mut callback: F) -> Vec<R>
    where
        F: FnMut(usize, ElementRef<'a>) -> R,
    {
        self.map_with(&mut (), |_, index, element| callback(index, element))
    }

    /// [`Collection::map`] with `this` lent to every invocation.
    pub fn map_with<C, R, F>(&self, this: &mut C, callback: F) -> Vec<R>
    where
        F: FnMut(&mut C, usize, ElementRef<'a>) -> R,
    {
        map_ordered(&self.elements, this, index_first(callback))
    }

    /// One [`ElementSummary`] per element.
    pub fn summaries(&self) -> Vec<ElementSummary> {
        self.map(ElementSummary::from_element)
    }
}

impl<'a> FromIterator<ElementRef<'a>> for Collection<'a> {
    fn from_iter<I: IntoIterator<Item = ElementRef<'a>>>(iter: I) -> Self {
        wrap(iter)
    }
}

impl<'a> From<Vec<ElementRef<'a>>> for Collection<'a> {
    fn from(elements: Vec<ElementRef<'a>>) -> Self {
        Collection { elements }
    }
}

impl<'a> IntoIterator for Collection<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = std::vec::IntoIter<ElementRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'c, 'a> IntoIterator for &'c Collection<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'c, ElementRef<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter().copied()
    }
}
