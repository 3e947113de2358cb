//! PEP status counts
//!
//! Walks the numerical index, opens every PEP page and hands the pair of
//! statuses to the [`StatusReconciler`].

use crate::html::{
    definition_value, element_text, find_all, find_tag, required_attr, resolve_link, TagQuery,
};
use crate::http::{get_response, Fetcher};
use crate::output::ResultTable;
use crate::parsers::ScrapeContext;
use crate::status::StatusReconciler;
use crate::ScraperError;
use scraper::Html;
use url::Url;

/// One entry of the PEP numerical index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    /// Status letter from the index, empty for drafts
    pub preview_code: String,

    /// The PEP's own page
    pub link: Url,
}

/// Reads every row of the numerical index
///
/// The `abbr` text holds the type letter followed by the status letter;
/// the first character is dropped.
pub fn parse_index_rows(html: &str, base_url: &Url) -> Result<Vec<IndexRow>, ScraperError> {
    let document = Html::parse_document(html);
    let index = find_tag(
        document.root_element(),
        &TagQuery::tag("section").with_attr("id", "numerical-index"),
    )?;
    let body = find_tag(index, &TagQuery::tag("tbody"))?;

    find_all(body, &TagQuery::tag("tr"))
        .into_iter()
        .map(|row| -> Result<IndexRow, ScraperError> {
            let abbr = find_tag(row, &TagQuery::tag("abbr"))?;
            let preview_code = element_text(abbr).chars().skip(1).collect();
            let anchor = find_tag(row, &TagQuery::tag("a"))?;
            let link = resolve_link(base_url, required_attr(anchor, "href")?)?;
            Ok(IndexRow { preview_code, link })
        })
        .collect()
}

/// Reads the `Status` field from a PEP page header
pub fn parse_detail_status(html: &str) -> Result<String, ScraperError> {
    let document = Html::parse_document(html);
    let header = find_tag(
        document.root_element(),
        &TagQuery::tag("dl").with_attr("class", "rfc2822 field-list simple"),
    )?;

    definition_value(header, "Status").ok_or_else(|| {
        tracing::error!("Status field not found in PEP header");
        ScraperError::Structure("PEP header has no Status field".to_string())
    })
}

/// Counts PEPs by status and reports index/page disagreements
///
/// PEP pages that cannot be fetched are left out of every count.
pub async fn pep<F: Fetcher>(
    ctx: &mut ScrapeContext<'_, F>,
) -> Result<Option<ResultTable>, ScraperError> {
    let config = ctx.config;
    let pep_url = Url::parse(&config.site.pep_url)?;
    let Some(response) = get_response(&mut ctx.fetcher, &pep_url).await? else {
        return Ok(None);
    };

    let rows = parse_index_rows(&response.text(), &pep_url)?;
    tracing::info!("Found {} PEPs in the index", rows.len());

    let mut reconciler = StatusReconciler::new(&config.expected_status);
    for (i, row) in rows.iter().enumerate() {
        tracing::debug!("[{}/{}] {}", i + 1, rows.len(), row.link);
        let Some(page) = get_response(&mut ctx.fetcher, &row.link).await? else {
            reconciler.skip(&row.link);
            continue;
        };

        let status = parse_detail_status(&page.text())?;
        reconciler.record(&row.link, &row.preview_code, &status);
    }

    let report = reconciler.finish();
    report.log();
    Ok(Some(report.to_table()))
}
