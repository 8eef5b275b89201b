//! Fragment documents: the per-page input handed over by a PDF text extractor.
//!
//! The JSON shape mirrors what pdf.js `getTextContent()` yields per page.
//! Both a wrapped form and a bare form are accepted:
//!
//! ```text
//! {"pages": [{"items": [{"str": "Hi", "transform": [...], "width": 9}]}]}
//! [[{"text": "Hi", "transform": [...], "width": 9}]]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::RawFragment;

/// Text fragments of a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PageRepr")]
pub struct PageFragments {
    /// Fragments in extraction order
    pub items: Vec<RawFragment>,
}

impl PageFragments {
    /// Wrap a list of fragments.
    pub fn new(items: Vec<RawFragment>) -> Self {
        Self { items }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr {
    Wrapped { items: Vec<RawFragment> },
    Bare(Vec<RawFragment>),
}

impl From<PageRepr> for PageFragments {
    fn from(repr: PageRepr) -> Self {
        match repr {
            PageRepr::Wrapped { items } | PageRepr::Bare(items) => Self { items },
        }
    }
}

/// All pages of a document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentRepr")]
pub struct FragmentDocument {
    /// Pages; page `n` (one-based) is `pages[n - 1]`
    pub pages: Vec<PageFragments>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Wrapped { pages: Vec<PageFragments> },
    Bare(Vec<PageFragments>),
}

impl From<DocumentRepr> for FragmentDocument {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Wrapped { pages } | DocumentRepr::Bare(pages) => Self { pages },
        }
    }
}

impl FragmentDocument {
    /// Build a document from per-page fragment lists.
    pub fn from_pages(pages: Vec<Vec<RawFragment>>) -> Self {
        Self {
            pages: pages.into_iter().map(PageFragments::new).collect(),
        }
    }

    /// Parse a document from a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::document::FragmentDocument;
    ///
    /// let doc = FragmentDocument::from_json_str(
    ///     r#"[[{"str": "Hi", "transform": [12, 0, 0, 12, 72, 700], "width": 11}], []]"#,
    /// ).unwrap();
    /// assert_eq!(doc.page_count(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Open and parse a JSON fragment file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let doc = Self::from_reader(BufReader::new(file))?;
        log::debug!("Loaded {} page(s) from {}", doc.page_count(), path.display());
        Ok(doc)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Fragments of page `number` (one-based).
    pub fn page(&self, number: usize) -> Result<&[RawFragment]> {
        number
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .map(|p| p.items.as_slice())
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "page {} out of range (document has {} page(s))",
                    number,
                    self.page_count()
                ))
            })
    }

    /// Per-page fragment lists, borrowed.
    pub fn page_items(&self) -> Vec<&[RawFragment]> {
        self.pages.iter().map(|p| p.items.as_slice()).collect()
    }
}
