use crate::prelude::*;
use jqshim_core::Collection;
use scraper::Html;
use std::io::Read;
use std::path::Path;

/// Read the whole input, from `path` or from stdin when it is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let (html, source) = match path {
        Some(path) if path != Path::new("-") => {
            let html = std::fs::read_to_string(path)
                .wrap_err_with(|| f!("Failed to read {}", path.display()))?;
            (html, path.display().to_string())
        }
        _ => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .wrap_err("Failed to read stdin")?;
            (html, "stdin".to_string())
        }
    };

    if html.trim().is_empty() {
        return Err(Error::EmptyInput(source).into());
    }

    log::debug!("read {} bytes from {}", html.len(), source);

    Ok(html)
}

pub fn parse(html: &str, fragment: bool) -> Html {
    if fragment {
        Html::parse_fragment(html)
    } else {
        Html::parse_document(html)
    }
}

/// `$(selector)` over the parsed document.
pub fn select<'a>(document: &'a Html, selector: &str) -> Result<Collection<'a>> {
    let collection = Collection::select(document, selector)?;
    log::debug!("'{}' selected {} element(s)", selector, collection.len());
    Ok(collection)
}
