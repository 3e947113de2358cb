//! Python versions listed in the documentation sidebar

use crate::html::{element_text, find_all, find_tag, required_attr, TagQuery};
use crate::http::{get_response, Fetcher};
use crate::output::ResultTable;
use crate::parsers::ScrapeContext;
use crate::ScraperError;
use regex::Regex;
use scraper::Html;
use url::Url;

const HEADER: [&str; 3] = ["Documentation link", "Version", "Status"];

/// Text that identifies the version list in the sidebar
const VERSION_LIST_MARKER: &str = "All versions";

/// Link text such as `Python 3.13 (stable)`
pub const VERSION_PATTERN: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";

/// Builds the version table from the documentation start page
///
/// Links whose text does not look like `Python X.Y (status)` keep their raw
/// text as the version and an empty status. A sidebar without the version
/// list is an error.
pub fn parse_versions(html: &str) -> Result<ResultTable, ScraperError> {
    let document = Html::parse_document(html);
    let sidebar = find_tag(
        document.root_element(),
        &TagQuery::tag("div").with_attr("class", "sphinxsidebarwrapper"),
    )?;

    let version_list = find_all(sidebar, &TagQuery::tag("ul"))
        .into_iter()
        .find(|ul| element_text(*ul).contains(VERSION_LIST_MARKER))
        .ok_or_else(|| {
            tracing::error!("Version list not found in the sidebar");
            ScraperError::Structure("Python version list not found".to_string())
        })?;

    let pattern = Regex::new(VERSION_PATTERN)?;
    let mut results = ResultTable::with_header(HEADER);
    for anchor in find_all(version_list, &TagQuery::tag("a")) {
        let link = required_attr(anchor, "href")?;
        let text = element_text(anchor);
        let (version, status) = match pattern.captures(&text) {
            Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
            None => (text.clone(), String::new()),
        };
        results.push_row([link.to_string(), version, status]);
    }

    Ok(results)
}

/// Lists documentation versions and their status
pub async fn latest_versions<F: Fetcher>(
    ctx: &mut ScrapeContext<'_, F>,
) -> Result<Option<ResultTable>, ScraperError> {
    let main_url = Url::parse(&ctx.config.site.main_doc_url)?;
    let Some(response) = get_response(&mut ctx.fetcher, &main_url).await? else {
        return Ok(None);
    };

    parse_versions(&response.text()).map(Some)
}
