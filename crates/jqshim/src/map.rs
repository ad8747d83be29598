use crate::prelude::{println, *};
use colored::Colorize;
use jqshim_core::{Collection, MapField};
use scraper::Html;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Tag name
    Tag,
    /// Text content, whitespace collapsed (default)
    #[default]
    Text,
    /// Outer HTML
    Html,
    /// Attribute value, named by --attr
    Attr,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct MapOptions {
    /// CSS selector building the collection
    #[clap(env = "JQSHIM_SELECTOR")]
    pub selector: String,

    /// What to extract from each element
    #[arg(long, env = "JQSHIM_FIELD", default_value = "text")]
    pub field: Field,

    /// Attribute to extract (implies --field attr)
    #[arg(long)]
    pub attr: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct MapOutput {
    pub selector: String,
    pub field: MapField,
    pub values: Vec<Option<String>>,
}

/// Resolve the command-line choice into the projection applied to each element.
pub fn resolve_field(field: Field, attr: Option<String>) -> Result<MapField> {
    match (field, attr) {
        (_, Some(name)) => Ok(MapField::Attr(name)),
        (Field::Attr, None) => Err(Error::MissingAttribute.into()),
        (Field::Tag, None) => Ok(MapField::Tag),
        (Field::Text, None) => Ok(MapField::Text),
        (Field::Html, None) => Ok(MapField::Html),
    }
}

pub fn map_values(collection: &Collection, field: &MapField) -> Vec<Option<String>> {
    collection.map(|_, element| field.project(&element))
}

pub fn run(options: MapOptions, document: &Html) -> Result<()> {
    let field = resolve_field(options.field, options.attr)?;
    let collection = crate::input::select(document, &options.selector)?;
    let values = map_values(&collection, &field);

    if options.json {
        let output = MapOutput {
            selector: options.selector,
            field,
            values,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for value in values {
            match value {
                Some(value) => println!("{value}"),
                None => println!("{}", "(none)".dimmed()),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_field_attr_name_wins() {
        let field = resolve_field(Field::Text, Some("href".to_string())).unwrap();
        assert_eq!(field, MapField::Attr("href".to_string()));
    }

    #[test]
    fn test_resolve_field_attr_requires_name() {
        let err = resolve_field(Field::Attr, None).unwrap_err();
        assert!(err.to_string().contains("--attr"));
    }

    #[test]
    fn test_resolve_field_plain_choices() {
        assert_eq!(resolve_field(Field::Tag, None).unwrap(), MapField::Tag);
        assert_eq!(resolve_field(Field::Html, None).unwrap(), MapField::Html);
        assert_eq!(resolve_field(Field::default(), None).unwrap(), MapField::Text);
    }

    #[test]
    fn test_map_values_returns_ids_in_order() {
        let doc = Html::parse_fragment(r#"<p id="x">x</p><p id="y">y</p><p>z</p>"#);
        let collection = Collection::select(&doc, "p").unwrap();

        let values = map_values(&collection, &MapField::Attr("id".to_string()));
        assert_eq!(
            values,
            vec![Some("x".to_string()), Some("y".to_string()), None]
        );
    }

    #[test]
    fn test_map_values_text() {
        let doc = Html::parse_fragment("<li> ever </li><li>green</li>");
        let collection = Collection::select(&doc, "li").unwrap();

        let values = map_values(&collection, &MapField::Text);
        assert_eq!(
            values,
            vec![Some("ever".to_string()), Some("green".to_string())]
        );
    }
}
