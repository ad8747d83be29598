//! CSS selector matching over parsed elements.
//!
//! Matching semantics belong to [`scraper::Selector`]; this module only decides
//! what happens when a selector string does not parse.

use scraper::{ElementRef, Selector as CssSelector};

use crate::error::Error;

/// A parsed selector, ready to test elements against.
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    selector: CssSelector,
}

impl Matcher {
    /// Parse `selector`, reporting unparsable input as [`Error::InvalidSelector`].
    pub fn parse(selector: &str) -> Result<Self, Error> {
        let parsed = CssSelector::parse(selector).map_err(|e| Error::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{e:?}"),
        })?;

        Ok(Self {
            source: selector.to_string(),
            selector: parsed,
        })
    }

    /// Parse `selector`, logging and discarding the error.
    ///
    /// Callers treat `None` as "matches nothing".
    pub fn lenient(selector: &str) -> Option<Self> {
        match Self::parse(selector) {
            Ok(matcher) => Some(matcher),
            Err(err) => {
                log::warn!("{err}; no element will match");
                None
            }
        }
    }

    pub fn matches(&self, element: &ElementRef) -> bool {
        self.selector.matches(element)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn css(&self) -> &CssSelector {
        &self.selector
    }
}

/// Whether `element` satisfies `selector`.
///
/// An unparsable selector matches nothing.
pub fn matches(element: &ElementRef, selector: &str) -> bool {
    Matcher::lenient(selector).is_some_and(|matcher| matcher.matches(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = CssSelector::parse(css).unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn test_matches_class_selector() {
        let doc = Html::parse_fragment(r#"<p class="lead intro">Hi</p>"#);
        let p = first(&doc, "p");
        assert!(matches(&p, ".lead"));
        assert!(matches(&p, "p.intro"));
        assert!(!matches(&p, ".other"));
    }

    #[test]
    fn test_matches_attribute_selector() {
        let doc = Html::parse_fragment(r#"<ul><li active>One</li><li>Two</li></ul>"#);
        let li = first(&doc, "li");
        assert!(matches(&li, "[active]"));
        assert!(!matches(&li, "[hidden]"));
    }

    #[test]
    fn test_matches_invalid_selector_is_false() {
        let doc = Html::parse_fragment("<div>x</div>");
        let div = first(&doc, "div");
        assert!(!matches(&div, "div[[["));
    }

    #[test]
    fn test_parse_invalid_selector_errors() {
        let err = Matcher::parse(">>>").unwrap_err();
        match err {
            Error::InvalidSelector { selector, .. } => assert_eq!(selector, ">>>"),
        }
    }

    #[test]
    fn test_lenient_keeps_source() {
        let matcher = Matcher::lenient("ul > li").unwrap();
        assert_eq!(matcher.as_str(), "ul > li");
        assert!(Matcher::lenient("").is_none());
    }
}
