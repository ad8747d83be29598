use crate::prelude::{println, *};
use colored::Colorize;
use jqshim_core::{summary::element_text, Collection};
use scraper::Html;
use serde::Serialize;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct EachOptions {
    /// CSS selector building the collection
    #[clap(env = "JQSHIM_SELECTOR")]
    pub selector: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One visit, as seen by the callback.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Visit {
    pub index: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
}

pub fn run(options: EachOptions, document: &Html) -> Result<()> {
    let collection = crate::input::select(document, &options.selector)?;

    if options.json {
        let visits = collect_visits(&collection);
        println!("{}", serde_json::to_string_pretty(&visits)?);
    } else {
        println!(
            "\n{} {} ({} elements)\n",
            "EACH".bold(),
            options.selector.cyan(),
            collection.len()
        );

        let mut table = new_table();
        table.add_row(prettytable::row!["#", "Tag", "Id", "Text"]);
        collection.each_with(&mut table, |table, index, element| {
            table.add_row(prettytable::row![
                index,
                element.value().name(),
                element.value().id().unwrap_or("-"),
                crate::filter::truncate(&element_text(&element), 60)
            ]);
        });
        table.printstd();
    }

    Ok(())
}

/// Visit the collection, recording every `(index, element)` pair in order.
pub fn collect_visits(collection: &Collection) -> Vec<Visit> {
    let mut visits = Vec::with_capacity(collection.len());

    collection.each_with(&mut visits, |visits, index, element| {
        visits.push(Visit {
            index,
            tag: element.value().name().to_string(),
            id: element.value().id().map(str::to_string),
            text: element_text(&element),
        });
    });

    visits
}
