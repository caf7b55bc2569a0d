use chrono::Local;
use reqwest::{Client, StatusCode};
use tokio::{fs::File, io::AsyncWriteExt};

use crate::normalize::{join_pages, normalize};
use crate::parse::parse_page;
use crate::request::{page_url, request_page_html, Fetched};
use crate::{info_time, Result, BASE_URL, FILE_PATH, PAGE_OFFSETS};

/// What happened to a single listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Fetched and normalized. `text` may be empty if the page had no Cyrillic paragraphs.
    Scraped { offset: usize, text: String },
    /// The server didn't answer `200 OK`; the page adds nothing to the corpus.
    Skipped { offset: usize, status: StatusCode },
}

impl PageOutcome {
    pub fn offset(&self) -> usize {
        match self {
            PageOutcome::Scraped { offset, .. } | PageOutcome::Skipped { offset, .. } => *offset,
        }
    }
}

/// Per-page outcomes of a run plus the joined corpus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    outcomes: Vec<PageOutcome>,
    text: String,
}

impl Corpus {
    fn from_outcomes(outcomes: Vec<PageOutcome>) -> Self {
        let texts = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                PageOutcome::Scraped { text, .. } => Some(text.as_str()),
                PageOutcome::Skipped { .. } => None,
            })
            .collect::<Vec<_>>();
        let text = join_pages(&texts);

        Self { outcomes, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn outcomes(&self) -> &[PageOutcome] {
        &self.outcomes
    }

    pub fn scraped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PageOutcome::Scraped { .. }))
            .count()
    }

    /// `(offset, status)` of every page that was left out.
    pub fn skipped(&self) -> Vec<(usize, StatusCode)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                PageOutcome::Skipped { offset, status } => Some((*offset, *status)),
                PageOutcome::Scraped { .. } => None,
            })
            .collect()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Scrapes the blog at `BASE_URL` and writes the corpus to `FILE_PATH`.
pub async fn process_site() -> Result<()> {
    let start_time = Local::now();
    let client = reqwest::Client::new();

    info_time!("Started scraping");
    let corpus = scrape_site(&client, BASE_URL).await?;
    info_time!(
        start_time,
        "Finished scraping: {} of {} pages, {} chars.",
        corpus.scraped_count(),
        PAGE_OFFSETS.len(),
        corpus.text().chars().count()
    );

    let local_now = Local::now();
    let mut file = File::create(FILE_PATH).await?;
    file.write_all(corpus.text().as_bytes()).await?;
    file.flush().await?;
    info_time!(local_now, "Wrote the corpus to file: {FILE_PATH}");

    Ok(())
}

/// Fetches, parses and normalizes every listing page, one after another.
/// Pages that don't return `200 OK` are skipped; any other failure ends the run.
pub async fn scrape_site(client: &Client, base: &str) -> Result<Corpus> {
    let mut outcomes = Vec::with_capacity(PAGE_OFFSETS.len());
    for offset in PAGE_OFFSETS {
        let start_page_time = Local::now();
        let outcome = scrape_page(client, base, offset).await?;
        match &outcome {
            PageOutcome::Scraped { text, .. } => {
                info_time!(start_page_time, "Scraped page skip={offset}: LEN: {}", text.len())
            }
            PageOutcome::Skipped { status, .. } => {
                info_time!("Skipped page skip={offset}: status {status}")
            }
        }
        outcomes.push(outcome);
    }

    Ok(Corpus::from_outcomes(outcomes))
}

/// Runs the fetch -> extract -> normalize chain for a single offset.
pub async fn scrape_page(client: &Client, base: &str, offset: usize) -> Result<PageOutcome> {
    let url = page_url(base, offset);
    let html = match request_page_html(client, &url).await? {
        Fetched::Html(html) => html,
        Fetched::Status(status) => return Ok(PageOutcome::Skipped { offset, status }),
    };

    let paragraphs = parse_page(html).await?;
    Ok(PageOutcome::Scraped {
        offset,
        text: normalize(&paragraphs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraped(offset: usize, text: &str) -> PageOutcome {
        PageOutcome::Scraped {
            offset,
            text: text.into(),
        }
    }

    #[test]
    fn corpus_joins_scraped_pages_in_order() {
        let corpus = Corpus::from_outcomes(vec![
            scraped(0, "раз"),
            PageOutcome::Skipped {
                offset: 10,
                status: StatusCode::NOT_FOUND,
            },
            scraped(20, "два"),
        ]);

        assert_eq!(corpus.text(), "раз два");
        assert_eq!(corpus.scraped_count(), 2);
        assert_eq!(corpus.skipped(), vec![(10, StatusCode::NOT_FOUND)]);
        assert_eq!(
            corpus.outcomes().iter().map(PageOutcome::offset).collect::<Vec<_>>(),
            vec![0, 10, 20]
        );
    }

    #[test]
    fn corpus_of_only_skipped_pages_is_empty() {
        let corpus = Corpus::from_outcomes(vec![PageOutcome::Skipped {
            offset: 0,
            status: StatusCode::SERVICE_UNAVAILABLE,
        }]);
        assert_eq!(corpus.into_text(), "");
    }
}
