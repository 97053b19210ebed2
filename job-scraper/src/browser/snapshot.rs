use std::collections::HashMap;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tokio::sync::Mutex;

use crate::browser::{Error, Page, Result};

/// Handle to an element of a snapshot document, identified by its position
/// among all elements of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotElement {
    url: String,
    ordinal: usize,
}

/// Serves pre-rendered html documents keyed by url.
///
/// Clicking an element follows its `href` to another stored document, so a
/// paginated result set can be replayed offline.
#[derive(Default)]
pub struct SnapshotPage {
    documents: HashMap<String, String>,
    current: Mutex<Option<String>>,
    clicks: Mutex<Vec<String>>,
}

impl SnapshotPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.documents.insert(url.into(), html.into());
        self
    }

    /// Urls followed by `click`, oldest first.
    pub async fn clicks(&self) -> Vec<String> {
        self.clicks.lock().await.clone()
    }

    pub async fn current_url(&self) -> Option<String> {
        self.current.lock().await.clone()
    }

    async fn loaded(&self) -> Result<(String, &str)> {
        let url = self.current.lock().await.clone().ok_or(Error::NoPage)?;
        let html = self
            .documents
            .get(&url)
            .ok_or_else(|| Error::UnknownUrl(url.clone()))?;
        Ok((url, html.as_str()))
    }

    async fn loaded_for(&self, element: &SnapshotElement) -> Result<&str> {
        let (url, html) = self.loaded().await?;
        if url != element.url {
            return Err(Error::StaleElement(element.url.clone()));
        }
        Ok(html)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| Error::InvalidSelector(selector.to_owned()))
}

fn elements(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element().descendants().filter_map(ElementRef::wrap)
}

fn nth_element(doc: &Html, ordinal: usize) -> Result<ElementRef<'_>> {
    elements(doc)
        .nth(ordinal)
        .ok_or_else(|| Error::StaleElement(format!("element #{}", ordinal)))
}

/// Ordinals of the elements matching `selector`, restricted to descendants of
/// the element at `scope` when given.
fn select_ordinals(html: &str, scope: Option<usize>, selector: &str) -> Result<Vec<usize>> {
    let selector = parse_selector(selector)?;
    let doc = Html::parse_document(html);
    let scope = scope.map(|ordinal| nth_element(&doc, ordinal)).transpose()?;
    let ordinals = elements(&doc)
        .enumerate()
        .filter(|(_, el)| selector.matches(el))
        .filter(|(_, el)| match scope {
            Some(scope) => el.ancestors().any(|node| node.id() == scope.id()),
            None => true,
        })
        .map(|(ordinal, _)| ordinal)
        .collect();
    Ok(ordinals)
}

fn element_text(html: &str, ordinal: usize) -> Result<String> {
    let doc = Html::parse_document(html);
    Ok(nth_element(&doc, ordinal)?.text().collect())
}

fn element_attribute(html: &str, ordinal: usize, name: &str) -> Result<Option<String>> {
    let doc = Html::parse_document(html);
    let attr = nth_element(&doc, ordinal)?.value().attr(name).map(String::from);
    Ok(attr)
}

#[async_trait]
impl Page for SnapshotPage {
    type Element = SnapshotElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        if !self.documents.contains_key(url) {
            return Err(Error::UnknownUrl(url.to_owned()));
        }
        log::debug!("loading snapshot {}", url);
        *self.current.lock().await = Some(url.to_owned());
        Ok(())
    }

    async fn wait_for(&self, selector: &str) -> Result<()> {
        // a snapshot never changes, so the selector either matches now or never
        let (_, html) = self.loaded().await?;
        if select_ordinals(html, None, selector)?.is_empty() {
            return Err(Error::SelectorTimeout(selector.to_owned()));
        }
        Ok(())
    }

    async fn locate(&self, selector: &str) -> Result<Vec<SnapshotElement>> {
        let (url, html) = self.loaded().await?;
        let ordinals = select_ordinals(html, None, selector)?;
        Ok(ordinals
            .into_iter()
            .map(|ordinal| SnapshotElement {
                url: url.clone(),
                ordinal,
            })
            .collect())
    }

    async fn locate_within(
        &self,
        scope: &SnapshotElement,
        selector: &str,
    ) -> Result<Vec<SnapshotElement>> {
        let html = self.loaded_for(scope).await?;
        let ordinals = select_ordinals(html, Some(scope.ordinal), selector)?;
        Ok(ordinals
            .into_iter()
            .map(|ordinal| SnapshotElement {
                url: scope.url.clone(),
                ordinal,
            })
            .collect())
    }

    async fn text(&self, element: &SnapshotElement) -> Result<String> {
        let html = self.loaded_for(element).await?;
        element_text(html, element.ordinal)
    }

    async fn attribute(&self, element: &SnapshotElement, name: &str) -> Result<Option<String>> {
        let html = self.loaded_for(element).await?;
        element_attribute(html, element.ordinal, name)
    }

    async fn click(&self, element: &SnapshotElement) -> Result<()> {
        let html = self.loaded_for(element).await?;
        let href = element_attribute(html, element.ordinal, "href")?.ok_or(Error::NotNavigable)?;
        self.clicks.lock().await.push(href.clone());
        self.navigate(&href).await
    }
}
