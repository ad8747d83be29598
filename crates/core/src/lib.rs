//! Core library for jqshim
//!
//! This crate implements the **Functional Core** of jqshim: a jQuery-style
//! `filter` / `each` / `map` surface over elements of a parsed HTML document.
//! It performs no I/O; the `jqshim` binary is the Imperative Shell that reads
//! documents and prints results.
//!
//! # Calling convention
//!
//! A plain walk over a slice naturally produces `(element, index)`. The public
//! methods promise `(index, element)` instead, the order jQuery callbacks use.
//! The translation lives in one place, [`adapter`], and is applied once per
//! call site:
//!
//! - [`iterate`]: ordered traversal primitives with `(element, index)` visitors
//! - [`adapter`]: argument-order adapters between the two conventions
//! - [`collection`]: the [`Collection`] type and its `filter` / `each` / `map`
//! - [`selector`]: CSS matching on top of `scraper`
//! - [`summary`]: serializable projections of elements
//!
//! # Context (`this`)
//!
//! Every method has a `_with` form taking `this: &mut C`. The value is lent to
//! each callback invocation of that one call and never retained.
//!
//! # Example Usage
//!
//! ```rust
//! use jqshim_core::{Collection, Filter};
//! use scraper::Html;
//!
//! let doc = Html::parse_fragment(
//!     r#"<ul><li id="a">A</li><li id="b" class="active">B</li><li id="c" class="active">C</li></ul>"#,
//! );
//! let items = Collection::select(&doc, "li").unwrap();
//!
//! let active = items.filter(".active");
//! assert_eq!(active.len(), 2);
//!
//! let mut seen = Vec::new();
//! items.each(|index, element| seen.push((index, element.value().id().unwrap().to_string())));
//! assert_eq!(seen[0], (0, "a".to_string()));
//!
//! let even = items.filter(Filter::predicate(|index, _| index % 2 == 0));
//! let ids = even.map(|_, element| element.value().id().unwrap().to_string());
//! assert_eq!(ids, vec!["a", "c"]);
//! ```

pub mod adapter;
pub mod collection;
pub mod error;
pub mod iterate;
pub mod selector;
pub mod summary;

pub use collection::{wrap, Collection, Filter, Predicate};
pub use error::Error;
pub use selector::{matches, Matcher};
pub use summary::{ElementSummary, MapField};
