/// Errors raised by the collaborators of the collection methods.
///
/// `filter`, `each` and `map` never return these themselves.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}
