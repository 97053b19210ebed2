use std::time::Duration;

use tokio::time::sleep;

use crate::browser::{Error, Page, Result};
use crate::hh::{ACTIVE_PAGER_SELECTOR, PAGER_SELECTOR, VACANCY_SELECTOR};

/// Time given to the results to finish rendering after switching pages.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    Advanced,
    NoNextPage,
}

/// Index of the control following the first one labelled like the active
/// control, if there is one.
fn next_control(labels: &[String], active: &str) -> Option<usize> {
    let index = labels.iter().position(|label| label == active)?;
    (index + 1 < labels.len()).then_some(index + 1)
}

/// Walks the numbered pager at the bottom of the search results.
pub struct Pager {
    settle: Duration,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(SETTLE_DELAY)
    }
}

impl Pager {
    pub fn new(settle: Duration) -> Self {
        Self { settle }
    }

    /// Clicks the control after the active one and waits for the next page of
    /// results. Reports `NoNextPage` when the active page is the last one or
    /// the pager is missing. A pager without an active control is an error.
    pub async fn advance<P: Page>(&self, page: &P) -> Result<Pagination> {
        let controls = page.locate(PAGER_SELECTOR).await?;
        if controls.is_empty() {
            log::debug!("no pager on page");
            return Ok(Pagination::NoNextPage);
        }
        let active = match page.locate(ACTIVE_PAGER_SELECTOR).await?.into_iter().next() {
            Some(active) => page.text(&active).await?,
            None => {
                log::error!("pager has no active control");
                return Err(Error::SelectorTimeout(ACTIVE_PAGER_SELECTOR.to_owned()));
            }
        };

        let mut labels = Vec::with_capacity(controls.len());
        for control in &controls {
            labels.push(page.text(control).await?);
        }
        let next = match next_control(&labels, &active) {
            Some(next) => next,
            None => {
                log::debug!("page '{}' is the last one", active.trim());
                return Ok(Pagination::NoNextPage);
            }
        };

        log::info!(
            "moving from page '{}' to page '{}'",
            active.trim(),
            labels[next].trim()
        );
        page.click(&controls[next]).await?;
        page.wait_for(VACANCY_SELECTOR).await?;
        sleep(self.settle).await;
        Ok(Pagination::Advanced)
    }
}
