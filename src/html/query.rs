//! Tag + attribute filters

use regex::Regex;
use scraper::ElementRef;
use std::fmt;

/// How an attribute value is matched
#[derive(Debug, Clone)]
pub enum AttrMatch {
    /// Equal to the whole value. For `class`, equal to any single class also matches.
    Exact(String),

    /// Regex found anywhere in the value
    Pattern(Regex),
}

/// A tag name with at most one attribute filter
#[derive(Debug, Clone)]
pub struct TagQuery {
    name: String,
    attr: Option<(String, AttrMatch)>,
}

impl TagQuery {
    /// Matches any element named `name`
    pub fn tag(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attr: None,
        }
    }

    /// Requires attribute `attr` to equal `value`
    pub fn with_attr(mut self, attr: &str, value: &str) -> Self {
        self.attr = Some((attr.to_string(), AttrMatch::Exact(value.to_string())));
        self
    }

    /// Requires attribute `attr` to contain a match of `pattern`
    pub fn with_pattern(mut self, attr: &str, pattern: Regex) -> Self {
        self.attr = Some((attr.to_string(), AttrMatch::Pattern(pattern)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute filter as text, empty when there is none
    pub fn filter_description(&self) -> String {
        match &self.attr {
            None => String::new(),
            Some((attr, AttrMatch::Exact(value))) => format!("{}=\"{}\"", attr, value),
            Some((attr, AttrMatch::Pattern(pattern))) => format!("{}~/{}/", attr, pattern),
        }
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        if value.name() != self.name {
            return false;
        }

        let Some((attr, matcher)) = &self.attr else {
            return true;
        };
        let Some(actual) = value.attr(attr) else {
            return false;
        };

        match matcher {
            AttrMatch::Exact(expected) => {
                actual == expected
                    || (attr == "class" && actual.split_whitespace().any(|c| c == expected))
            }
            AttrMatch::Pattern(pattern) => pattern.is_match(actual),
        }
    }
}

impl fmt::Display for TagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attr {
            None => write!(f, "<{}>", self.name),
            Some(_) => write!(f, "<{} {}>", self.name, self.filter_description()),
        }
    }
}
