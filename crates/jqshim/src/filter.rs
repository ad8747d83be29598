use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use jqshim_core::{summary::element_text, Collection, ElementSummary, Filter};
use scraper::Html;
use serde::Serialize;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct FilterOptions {
    /// CSS selector building the initial collection
    #[clap(env = "JQSHIM_SELECTOR")]
    pub selector: String,

    /// Keep only elements matching this CSS selector
    #[arg(long, env = "JQSHIM_FILTER_BY")]
    pub by: Option<String>,

    /// Keep only elements carrying this attribute
    #[arg(long)]
    pub has_attr: Option<String>,

    /// Keep only elements whose text contains this string
    #[arg(long)]
    pub contains: Option<String>,

    /// Keep only elements at even positions (applied last)
    #[arg(long, conflicts_with = "odd")]
    pub even: bool,

    /// Keep only elements at odd positions (applied last)
    #[arg(long)]
    pub odd: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct FilterOutput {
    pub selector: String,
    pub filters: Vec<String>,
    pub elements_found: usize,
    pub elements_kept: usize,
    pub elements: Vec<ElementSummary>,
}

pub fn run(options: FilterOptions, document: &Html) -> Result<()> {
    let collection = crate::input::select(document, &options.selector)?;
    let (kept, filters) = apply_filters(&collection, &options);

    let output = FilterOutput {
        selector: options.selector.clone(),
        filters,
        elements_found: collection.len(),
        elements_kept: kept.len(),
        elements: kept.summaries(),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Run every requested filter in turn, returning the survivors and a label per stage.
pub fn apply_filters<'a>(
    collection: &Collection<'a>,
    options: &FilterOptions,
) -> (Collection<'a>, Vec<String>) {
    let mut kept = collection.clone();
    let mut filters = Vec::new();

    if let Some(by) = &options.by {
        kept = kept.filter(by.as_str());
        filters.push(f!("by {by}"));
    }

    if let Some(name) = &options.has_attr {
        kept = kept.filter(Filter::predicate(|_, element| {
            element.value().attr(name).is_some()
        }));
        filters.push(f!("has-attr {name}"));
    }

    if let Some(needle) = &options.contains {
        kept = kept.filter(Filter::predicate(|_, element| {
            element_text(&element).contains(needle.as_str())
        }));
        filters.push(f!("contains {needle:?}"));
    }

    if options.even || options.odd {
        let remainder = usize::from(options.odd);
        kept = kept.filter(Filter::predicate(|index, _| index % 2 == remainder));
        filters.push(if options.odd { "odd" } else { "even" }.to_string());
    }

    log::debug!(
        "kept {} of {} element(s) after {} filter(s)",
        kept.len(),
        collection.len(),
        filters.len()
    );

    (kept, filters)
}

fn output_formatted(output: &FilterOutput) {
    println!(
        "\n{} {} ({} of {} kept)\n",
        "FILTER".bold(),
        output.selector.cyan(),
        output.elements_kept,
        output.elements_found
    );

    if output.elements.is_empty() {
        eprintln!("{}", "No elements passed the filters.".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Tag", "Id", "Text"]);
    for element in &output.elements {
        table.add_row(prettytable::row![
            element.index,
            element.tag,
            element.id.as_deref().unwrap_or("-"),
            truncate(&element.text, 60)
        ]);
    }
    table.printstd();
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        f!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"
        <ul>
            <li id="one" class="item">First apple</li>
            <li id="two" class="item active" data-pinned>Second pear</li>
            <li id="three" class="item active">Third apple</li>
            <li id="four" class="item active" data-pinned>Fourth apple</li>
        </ul>
    "#;

    fn ids(collection: &Collection) -> Vec<String> {
        collection.map(|_, element| element.value().id().unwrap().to_string())
    }

    fn options(selector: &str) -> FilterOptions {
        FilterOptions {
            selector: selector.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_filters_without_criteria_keeps_everything() {
        let doc = Html::parse_fragment(LIST);
        let collection = Collection::select(&doc, "li").unwrap();

        let (kept, filters) = apply_filters(&collection, &options("li"));
        assert_eq!(kept, collection);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_apply_filters_by_selector() {
        let doc = Html::parse_fragment(LIST);
        let collection = Collection::select(&doc, "li").unwrap();
        let options = FilterOptions {
            by: Some(".active".to_string()),
            ..options("li")
        };

        let (kept, filters) = apply_filters(&collection, &options);
        assert_eq!(ids(&kept), vec!["two", "three", "four"]);
        assert_eq!(filters, vec!["by .active"]);
    }

    #[test]
    fn test_apply_filters_chains_predicates() {
        let doc = Html::parse_fragment(LIST);
        let collection = Collection::select(&doc, "li").unwrap();
        let options = FilterOptions {
            has_attr: Some("data-pinned".to_string()),
            contains: Some("apple".to_string()),
            ..options("li")
        };

        let (kept, filters) = apply_filters(&collection, &options);
        assert_eq!(ids(&kept), vec!["four"]);
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn test_apply_filters_parity_uses_positions_after_other_filters() {
        let doc = Html::parse_fragment(LIST);
        let collection = Collection::select(&doc, "li").unwrap();

        let even = FilterOptions {
            by: Some(".active".to_string()),
            even: true,
            ..options("li")
        };
        let (kept, _) = apply_filters(&collection, &even);
        assert_eq!(ids(&kept), vec!["two", "four"]);

        let odd = FilterOptions {
            odd: true,
            ..options("li")
        };
        let (kept, filters) = apply_filters(&collection, &odd);
        assert_eq!(ids(&kept), vec!["two", "four"]);
        assert_eq!(filters, vec!["odd"]);
    }

    #[test]
    fn test_apply_filters_invalid_by_selector_keeps_nothing() {
        let doc = Html::parse_fragment(LIST);
        let collection = Collection::select(&doc, "li").unwrap();
        let options = FilterOptions {
            by: Some("li[[".to_string()),
            ..options("li")
        };

        let (kept, _) = apply_filters(&collection, &options);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
