use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::browser::{Page, Result};

/// Headless chrome session driven through a WebDriver server (chromedriver,
/// selenium, ...).
pub struct WebDriverPage {
    driver: WebDriver,
}

impl WebDriverPage {
    pub async fn connect(server_url: &str) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;
        log::debug!("connecting to webdriver at {}", server_url);
        let driver = WebDriver::new(server_url, caps).await?;
        Ok(Self { driver })
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

#[async_trait]
impl Page for WebDriverPage {
    type Element = WebElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        log::info!("GET {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str) -> Result<()> {
        // polls with the query's default timeout
        self.driver.query(By::Css(selector)).first().await?;
        Ok(())
    }

    async fn locate(&self, selector: &str) -> Result<Vec<WebElement>> {
        Ok(self.driver.find_all(By::Css(selector)).await?)
    }

    async fn locate_within(&self, scope: &WebElement, selector: &str) -> Result<Vec<WebElement>> {
        Ok(scope.find_all(By::Css(selector)).await?)
    }

    async fn text(&self, element: &WebElement) -> Result<String> {
        // textContent, hidden text included
        Ok(element.prop("textContent").await?.unwrap_or_default())
    }

    async fn attribute(&self, element: &WebElement, name: &str) -> Result<Option<String>> {
        Ok(element.attr(name).await?)
    }

    async fn click(&self, element: &WebElement) -> Result<()> {
        element.click().await?;
        Ok(())
    }
}
