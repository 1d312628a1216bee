//! # Paged Resources
//!
//! A paged resource is a [`Resource`] whose base record is `{ page }` and
//! whose links carry the navigation relations `first`, `last`, `next` and
//! `prev` beside the reserved `self`/`curies`. The page's items live in
//! `_embedded` under caller-defined keys.
//!
//! [`Page`] values are taken as given. Whether `number` is 0- or 1-based,
//! and whether `total_pages` agrees with `total_elements / size`, is the
//! caller's business. [`Page::from_totals`] is available for callers that
//! want the ceiling computed for them.

use serde::{Deserialize, Serialize};

use crate::document::Resource;
use crate::link::{Link, LinkRef};
use crate::links::{Links, Relations};

/// Pagination metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Current page index.
    pub number: u64,
    /// Items per page.
    pub size: u64,
    /// Item count across all pages.
    pub total_elements: u64,
    /// Page count.
    pub total_pages: u64,
}

impl Page {
    pub fn new(number: u64, size: u64, total_elements: u64, total_pages: u64) -> Self {
        Self {
            number,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Build a page with `total_pages = ceil(total_elements / size)`.
    ///
    /// A zero `size` yields zero pages.
    pub fn from_totals(number: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        Self::new(number, size, total_elements, total_pages)
    }
}

/// Base record of a paged resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

/// Navigation relations of a paged resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRelations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

impl PageRelations {
    pub fn with_first(mut self, link: impl Into<Link>) -> Self {
        self.first = Some(link.into());
        self
    }

    pub fn with_last(mut self, link: impl Into<Link>) -> Self {
        self.last = Some(link.into());
        self
    }

    pub fn with_next(mut self, link: impl Into<Link>) -> Self {
        self.next = Some(link.into());
        self
    }

    pub fn with_prev(mut self, link: impl Into<Link>) -> Self {
        self.prev = Some(link.into());
        self
    }
}

impl Relations for PageRelations {
    fn relation(&self, rel: &str) -> Option<LinkRef<'_>> {
        let link = match rel {
            "first" => self.first.as_ref(),
            "last" => self.last.as_ref(),
            "next" => self.next.as_ref(),
            "prev" => self.prev.as_ref(),
            _ => None,
        };
        link.map(LinkRef::One)
    }
}

/// Links map of a paged resource.
pub type PageLinks = Links<PageRelations>;

/// One page of a larger collection.
pub type PagedResource<E> = Resource<PageInfo, E, PageRelations>;

/// Creates a paged HAL resource.
///
/// `_embedded` is always present: an empty page is an empty collection, not
/// an absent member. `_links` is omitted when `links` is `None`.
pub fn create_paged_resource<E>(
    embedded: E,
    page: Page,
    links: Option<PageLinks>,
) -> PagedResource<E> {
    Resource::new(PageInfo { page: Some(page) }, Some(embedded), links)
}

/// Returns the page metadata of a paged resource.
pub fn get_page<E>(doc: &PagedResource<E>) -> Option<&Page> {
    doc.base.page.as_ref()
}

pub fn get_page_number<E>(doc: &PagedResource<E>) -> Option<u64> {
    get_page(doc).map(|page| page.number)
}

pub fn get_page_size<E>(doc: &PagedResource<E>) -> Option<u64> {
    get_page(doc).map(|page| page.size)
}

pub fn get_page_total_elements<E>(doc: &PagedResource<E>) -> Option<u64> {
    get_page(doc).map(|page| page.total_elements)
}

pub fn get_page_total_pages<E>(doc: &PagedResource<E>) -> Option<u64> {
    get_page(doc).map(|page| page.total_pages)
}
