//! The page being inspected.
//!
//! A [`Page`] pairs the parsed document with the URL it was loaded from.
//! Resolvers only read from it; the highlight markers are the one mutation.

use std::cell::OnceCell;

use dom_query::NodeId;
use url::Url;

use crate::dom::{self, Document, Selection};
use crate::encoding;
use crate::error::{Error, Result};

/// A parsed web page and its location.
pub struct Page {
    document: Document,
    url: Url,
    /// Element ids in document order, built on first use.
    order: OnceCell<Vec<NodeId>>,
}

impl Page {
    /// Parse HTML loaded from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when `url` is not an absolute URL.
    pub fn parse(html: &str, url: &str) -> Result<Self> {
        let url = Url::parse(url.trim()).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self::from_document(dom::parse(html), url))
    }

    /// Decode raw bytes (see [`encoding::decode_html`]) and parse them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when `url` is not an absolute URL.
    pub fn from_bytes(bytes: &[u8], content_type: Option<&str>, url: &str) -> Result<Self> {
        Self::parse(&encoding::decode_html(bytes, content_type), url)
    }

    /// Wrap an already parsed document.
    #[must_use]
    pub fn from_document(document: Document, url: Url) -> Self {
        Self {
            document,
            url,
            order: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Full page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Host part of the URL, empty when there is none.
    #[must_use]
    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Serialized HTML of the page, including any highlight markers.
    #[must_use]
    pub fn html(&self) -> String {
        self.document.html().to_string()
    }

    /// All elements matching `selector`, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Selection<'_>> {
        dom::try_query_all(&self.document, selector)
    }

    /// First element matching `selector`.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Selection<'_>> {
        dom::try_query(&self.document, selector)
    }

    /// Vertical rank of an element: 0 is the top of the page.
    ///
    /// Static HTML has no layout, so the rank is the element's position in
    /// document order. Elements not found in the page sort last.
    #[must_use]
    pub fn vertical_position(&self, sel: &Selection) -> usize {
        let Some(node) = sel.nodes().first() else {
            return usize::MAX;
        };
        self.order()
            .iter()
            .position(|id| *id == node.id)
            .unwrap_or(usize::MAX)
    }

    fn order(&self) -> &[NodeId] {
        self.order.get_or_init(|| {
            self.document
                .select("*")
                .nodes()
                .iter()
                .map(|node| node.id)
                .collect()
        })
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("url", &self.url.as_str()).finish_non_exhaustive()
    }
}
