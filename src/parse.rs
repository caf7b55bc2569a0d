use scraper::{Html, Selector};
use tokio::task::spawn_blocking;

use crate::{Error, Result};

/// Body paragraphs on the blog carry no class; styled ones (captions, footers, ...) do.
const PARAGRAPH_SELECTOR: &str = "p:not([class])";

/// Parses the page on the blocking pool and returns its paragraph text.
pub async fn parse_page(html: String) -> Result<String> {
    let text = spawn_blocking(move || extract_paragraphs(&html)).await??;
    Ok(text)
}

/// Returns the text of every `<p>` without a `class` attribute, in document order,
/// joined with single spaces.
pub fn extract_paragraphs(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let p_selector = create_selector(PARAGRAPH_SELECTOR)?;

    let paragraphs = doc
        .select(&p_selector)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>();

    Ok(paragraphs.join(" "))
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
