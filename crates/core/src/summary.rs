use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of one element of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSummary {
    pub index: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub classes: Vec<String>,
    pub text: String,
    pub html: String,
}

impl ElementSummary {
    pub fn from_element(index: usize, element: ElementRef<'_>) -> Self {
        let value = element.value();

        Self {
            index,
            tag: value.name().to_string(),
            id: value.id().map(str::to_string),
            classes: value.classes().map(str::to_string).collect(),
            text: element_text(&element),
            html: element.html(),
        }
    }
}

/// What to extract from each element when mapping a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapField {
    Tag,
    Text,
    Html,
    Attr(String),
}

impl MapField {
    /// Extract this field from `element`; `None` only for a missing attribute.
    pub fn project(&self, element: &ElementRef) -> Option<String> {
        match self {
            MapField::Tag => Some(element.value().name().to_string()),
            MapField::Text => Some(element_text(element)),
            MapField::Html => Some(element.html()),
            MapField::Attr(name) => element.value().attr(name).map(str::to_string),
        }
    }
}

/// Text content with runs of whitespace collapsed to single spaces.
pub fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
