use crate::browser::{self, Page};
use crate::hh::extract::extract_listing;
use crate::hh::pager::{Pager, Pagination};
use crate::hh::types::Listing;
use crate::hh::{Error, VACANCY_SELECTOR};

/// A vacancy card that was skipped because extraction failed.
#[derive(Debug)]
pub struct ItemFailure {
    /// 1-based number of the results page.
    pub page: usize,
    /// Position of the card on its page.
    pub index: usize,
    pub error: Error,
}

/// Everything collected over one walk through the search results.
#[derive(Debug, Default)]
pub struct Harvest {
    pub listings: Vec<Listing>,
    pub failures: Vec<ItemFailure>,
    pub pages: usize,
}

impl Harvest {
    /// Extracts every vacancy card on the loaded page, in document order.
    async fn collect_page<P: Page>(&mut self, page: &P) -> browser::Result<()> {
        page.wait_for(VACANCY_SELECTOR).await?;
        self.pages += 1;
        let cards = page.locate(VACANCY_SELECTOR).await?;
        let mut extracted = 0;
        for (index, card) in cards.iter().enumerate() {
            match extract_listing(page, card).await {
                Ok(listing) => {
                    self.listings.push(listing);
                    extracted += 1;
                }
                Err(error) => {
                    log::error!(
                        "failed to extract vacancy {} on page {}: {}",
                        index,
                        self.pages,
                        error
                    );
                    self.failures.push(ItemFailure {
                        page: self.pages,
                        index,
                        error,
                    });
                }
            }
        }
        log::info!(
            "page {}: extracted {} of {} vacancies",
            self.pages,
            extracted,
            cards.len()
        );
        Ok(())
    }
}

/// Opens the search results at `url` and collects vacancies from every page
/// until the pager runs out. Navigation failures abort the walk.
pub async fn scrape<P: Page>(page: &P, url: &str, pager: &Pager) -> browser::Result<Harvest> {
    let mut harvest = Harvest::default();
    page.navigate(url).await?;
    loop {
        harvest.collect_page(page).await?;
        if pager.advance(page).await? == Pagination::NoNextPage {
            break;
        }
    }
    log::info!(
        "collected {} vacancies from {} pages, {} skipped",
        harvest.listings.len(),
        harvest.pages,
        harvest.failures.len()
    );
    Ok(harvest)
}
