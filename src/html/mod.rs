//! HTML tree queries
//!
//! Thin helpers over `scraper` for the page shapes the parsers rely on:
//! - first descendant matching a tag and an optional attribute filter
//! - all descendants matching such a query
//! - the value next to a label in a definition list
//!
//! A required element that is missing means the page template changed, so
//! [`find_tag`] logs it and returns an error that ends the run.

mod query;

pub use query::{AttrMatch, TagQuery};

use crate::ScraperError;
use scraper::ElementRef;
use url::Url;

/// Returns the first descendant of `scope` matching `query`
///
/// # Example
///
/// ```
/// use pydocs_scraper::html::{element_text, find_tag, TagQuery};
/// use scraper::Html;
///
/// let document = Html::parse_document(r#"<div class="a b"><p>hi</p></div>"#);
/// let div = find_tag(document.root_element(), &TagQuery::tag("div").with_attr("class", "b")).unwrap();
/// assert_eq!(element_text(div), "hi");
/// ```
pub fn find_tag<'a>(scope: ElementRef<'a>, query: &TagQuery) -> Result<ElementRef<'a>, ScraperError> {
    match descendants(scope).find(|element| query.matches(element)) {
        Some(element) => Ok(element),
        None => {
            tracing::error!("Tag not found: {}", query);
            Err(ScraperError::TagNotFound {
                tag: query.name().to_string(),
                filter: query.filter_description(),
            })
        }
    }
}

/// Returns every descendant of `scope` matching `query`, in document order
pub fn find_all<'a>(scope: ElementRef<'a>, query: &TagQuery) -> Vec<ElementRef<'a>> {
    descendants(scope)
        .filter(|element| query.matches(element))
        .collect()
}

fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// All text below `element`, concatenated without trimming
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Reads a required attribute
pub fn required_attr<'a>(element: ElementRef<'a>, name: &str) -> Result<&'a str, ScraperError> {
    element.value().attr(name).ok_or_else(|| {
        tracing::error!(
            "Attribute '{}' missing on <{}>",
            name,
            element.value().name()
        );
        ScraperError::Structure(format!(
            "<{}> has no '{}' attribute",
            element.value().name(),
            name
        ))
    })
}

/// Resolves `href` against `base`
pub fn resolve_link(base: &Url, href: &str) -> Result<Url, ScraperError> {
    Ok(base.join(href.trim())?)
}

/// Finds the text node equal to `label` and returns the text of its
/// parent's next sibling element
///
/// On `<dt>Status<span>:</span></dt><dd>Final</dd>` the label `Status`
/// yields `Final`.
pub fn definition_value(scope: ElementRef<'_>, label: &str) -> Option<String> {
    let label_node = scope.descendants().find(|node| {
        node.value()
            .as_text()
            .map(|text| &**text == label)
            .unwrap_or(false)
    })?;

    label_node
        .parent()?
        .next_siblings()
        .find_map(ElementRef::wrap)
        .map(element_text)
}
