//! "What's New" articles

use crate::html::{element_text, find_all, find_tag, required_attr, resolve_link, TagQuery};
use crate::http::{get_response, Fetcher};
use crate::output::ResultTable;
use crate::parsers::ScrapeContext;
use crate::ScraperError;
use scraper::Html;
use url::Url;

const HEADER: [&str; 3] = ["Article link", "Title", "Editor, Author"];

/// Collects the article links from the "What's New" landing page
pub fn parse_whats_new_index(html: &str, base_url: &Url) -> Result<Vec<Url>, ScraperError> {
    let document = Html::parse_document(html);
    let main_section = find_tag(
        document.root_element(),
        &TagQuery::tag("section").with_attr("id", "what-s-new-in-python"),
    )?;
    let toc = find_tag(
        main_section,
        &TagQuery::tag("div").with_attr("class", "toctree-wrapper"),
    )?;

    find_all(toc, &TagQuery::tag("li").with_attr("class", "toctree-l1"))
        .into_iter()
        .map(|item| {
            let anchor = find_tag(item, &TagQuery::tag("a"))?;
            resolve_link(base_url, required_attr(anchor, "href")?)
        })
        .collect()
}

/// Reads an article's heading and its first definition list
///
/// Newlines inside the definition list are replaced by spaces.
pub fn parse_article(html: &str) -> Result<(String, String), ScraperError> {
    let document = Html::parse_document(html);
    let heading = find_tag(document.root_element(), &TagQuery::tag("h1"))?;
    let details = find_tag(document.root_element(), &TagQuery::tag("dl"))?;

    Ok((
        element_text(heading),
        element_text(details).replace('\n', " "),
    ))
}

/// Fetches every "What's New" article
///
/// An article that cannot be fetched is skipped; a page missing its heading
/// or definition list ends the run.
pub async fn whats_new<F: Fetcher>(
    ctx: &mut ScrapeContext<'_, F>,
) -> Result<Option<ResultTable>, ScraperError> {
    let whats_new_url = Url::parse(&ctx.config.site.main_doc_url)?.join("whatsnew/")?;
    let Some(response) = get_response(&mut ctx.fetcher, &whats_new_url).await? else {
        return Ok(None);
    };

    let links = parse_whats_new_index(&response.text(), &whats_new_url)?;
    tracing::info!("Found {} articles", links.len());

    let total = links.len();
    let mut results = ResultTable::with_header(HEADER);
    for (i, link) in links.into_iter().enumerate() {
        tracing::debug!("[{}/{}] {}", i + 1, total, link);
        let Some(article) = get_response(&mut ctx.fetcher, &link).await? else {
            continue;
        };

        let (title, editors) = parse_article(&article.text())?;
        results.push_row([link.to_string(), title, editors]);
    }

    Ok(Some(results))
}
