use std::path::Path;

use job_scraper::browser::{self, webdriver::WebDriverPage};
use job_scraper::hh::{self, pager::Pager};
use persistence::RunStamp;
use thiserror::Error;

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Browser error: '{0}'")]
    Browser(#[from] browser::Error),
    #[error("Export error: '{0}'")]
    Export(#[from] persistence::Error),
}

/// Walks the hh.ru search results and exports them into the working
/// directory. The browser session is closed before exporting.
pub async fn run() -> Result<(), Error> {
    let stamp = RunStamp::now();
    let webdriver_url =
        std::env::var("WEBDRIVER_URL").unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_owned());
    let page = WebDriverPage::connect(&webdriver_url).await?;
    log::info!("Connected to webdriver at {}", webdriver_url);

    let harvest = hh::scraper::scrape(&page, hh::SEARCH_URL, &Pager::default()).await;
    if let Err(e) = page.quit().await {
        log::warn!("Failed to close browser session: {}", e);
    }
    let harvest = harvest?;
    if !harvest.failures.is_empty() {
        log::warn!(
            "Skipped {} vacancies that could not be extracted",
            harvest.failures.len()
        );
    }

    let summary = persistence::export(&harvest.listings, &stamp, Path::new(".")).await?;
    log::info!(
        "Saved {} vacancies ({} without salary) to {}",
        summary.total,
        summary.without_salary,
        summary.spreadsheet.display()
    );
    Ok(())
}
