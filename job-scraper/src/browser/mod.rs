pub mod snapshot;
pub mod webdriver;

use async_trait::async_trait;
use thiserror::Error;
use thirtyfour::error::WebDriverError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("WebDriver error: '{0}'")]
    WebDriver(#[from] WebDriverError),
    #[error("Invalid css selector: '{0}'")]
    InvalidSelector(String),
    #[error("No document for url: '{0}'")]
    UnknownUrl(String),
    #[error("Selector never appeared on page: '{0}'")]
    SelectorTimeout(String),
    #[error("Element belongs to a page that is no longer loaded: '{0}'")]
    StaleElement(String),
    #[error("Element has no href to follow")]
    NotNavigable,
    #[error("No page loaded")]
    NoPage,
}

/// A rendered page that can be navigated and queried by css selector.
///
/// Handles returned by `locate`/`locate_within` are only valid for the
/// document that was loaded when they were located.
#[async_trait]
pub trait Page: Send + Sync {
    type Element: Send + Sync;

    async fn navigate(&self, url: &str) -> Result<()>;

    /// Resolves once `selector` matches at least one element on the page.
    async fn wait_for(&self, selector: &str) -> Result<()>;

    /// All elements matching `selector`, in document order.
    async fn locate(&self, selector: &str) -> Result<Vec<Self::Element>>;

    async fn locate_within(
        &self,
        scope: &Self::Element,
        selector: &str,
    ) -> Result<Vec<Self::Element>>;

    async fn text(&self, element: &Self::Element) -> Result<String>;

    async fn attribute(&self, element: &Self::Element, name: &str) -> Result<Option<String>>;

    async fn click(&self, element: &Self::Element) -> Result<()>;
}
