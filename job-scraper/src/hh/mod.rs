//! Vacancy search results on hh.ru.
pub mod extract;
pub mod pager;
pub mod scraper;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

use crate::browser;

/// Search for "python backend" vacancies in Moscow (area 1).
pub const SEARCH_URL: &str = "https://omsk.hh.ru/search/vacancy?text=python+backend&area=1";

pub const VACANCY_SELECTOR: &str = r#"[data-qa="vacancy-serp__vacancy"]"#;
pub const TITLE_SELECTOR: &str = r#"[data-qa="serp-item__title-text"]"#;
pub const EMPLOYER_SELECTOR: &str = r#"[data-qa="vacancy-serp__vacancy-employer-text"]"#;
pub const SALARY_SELECTOR: &str =
    "div.narrow-container--HaV4hduxPuElpx0V > span.magritte-text___pbpft_3-0-41";
pub const LINK_SELECTOR: &str = r#"[data-qa="serp-item__title"]"#;
pub const ADDRESS_SELECTOR: &str = r#"[data-qa="vacancy-serp__vacancy-address"]"#;
pub const PAGER_SELECTOR: &str = r#"[data-qa="pager-page"]"#;
pub const ACTIVE_PAGER_SELECTOR: &str = r#"[data-qa="pager-page"][aria-current="true"]"#;

/// Salary value for vacancies without a rouble amount.
pub const SALARY_NOT_SPECIFIED: &str = "Не указана";
pub const CURRENCY_MARKER: char = '₽';

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to extract a single vacancy card.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Browser error: '{0}'")]
    Browser(#[from] browser::Error),
    #[error("Content not found in vacancy card: '{0}'")]
    ContentNotFound(&'static str),
}
