//! # Link Objects
//!
//! A [`Link`] is one hypermedia reference inside a `_links` map. Only `href`
//! is required. No member is validated: `href` may be a URI or a URI
//! template, and `templated` is a hint the caller keeps consistent.
//!
//! A relation maps to either a single link or an ordered list of links.
//! [`OneOrMany`] is the owned form stored in a map; [`LinkRef`] is the
//! borrowed form handed out by accessors.

use serde::{Deserialize, Serialize};

/// A single HAL link object.
///
/// Absent members are omitted from the serialized form, never written as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// URL indicating the link is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
    /// Target URI, or a URI template when `templated` is true.
    pub href: String,
    /// Language of the target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    /// Secondary key for selecting among links sharing a relation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URI hinting at the profile of the target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// True when `href` is a URI template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    /// Human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Expected media type of the target resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl Link {
    /// Create a link with only `href` set.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// Mark `href` as a URI template.
    pub fn templated(mut self) -> Self {
        self.templated = Some(true);
        self
    }

    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the media type (serialized as `type`).
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Returns true only when `templated` is explicitly `true`.
    pub fn is_templated(&self) -> bool {
        self.templated.unwrap_or(false)
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Self::new(href)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Self::new(href)
    }
}

/// The value stored under a relation: one link, or a list of links.
///
/// Collection relations conventionally use the list form, even with a single
/// element. The distinction is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A single link object.
    One(Link),
    /// An ordered array of link objects.
    Many(Vec<Link>),
}

impl OneOrMany {
    /// Borrow as a [`LinkRef`].
    pub fn as_link_ref(&self) -> LinkRef<'_> {
        match self {
            OneOrMany::One(link) => LinkRef::One(link),
            OneOrMany::Many(links) => LinkRef::Many(links),
        }
    }
}

impl From<Link> for OneOrMany {
    fn from(link: Link) -> Self {
        OneOrMany::One(link)
    }
}

impl From<Vec<Link>> for OneOrMany {
    fn from(links: Vec<Link>) -> Self {
        OneOrMany::Many(links)
    }
}

/// Borrowed view of whatever is stored under a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRef<'a> {
    One(&'a Link),
    Many(&'a [Link]),
}

impl<'a> LinkRef<'a> {
    /// The link, if the relation holds a single link object.
    pub fn as_single(&self) -> Option<&'a Link> {
        match *self {
            LinkRef::One(link) => Some(link),
            LinkRef::Many(_) => None,
        }
    }

    /// All links under the relation. A single link reads as a one-element slice.
    pub fn as_slice(&self) -> &'a [Link] {
        match *self {
            LinkRef::One(link) => std::slice::from_ref(link),
            LinkRef::Many(links) => links,
        }
    }

    /// The first link under the relation, if any.
    pub fn first(&self) -> Option<&'a Link> {
        self.as_slice().first()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Link> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True for an empty link array. A single link is never empty.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Clone into the owned [`OneOrMany`] form, keeping the single/array shape.
    pub fn cloned(&self) -> OneOrMany {
        match *self {
            LinkRef::One(link) => OneOrMany::One(link.clone()),
            LinkRef::Many(links) => OneOrMany::Many(links.to_vec()),
        }
    }
}

impl<'a> From<&'a Link> for LinkRef<'a> {
    fn from(link: &'a Link) -> Self {
        LinkRef::One(link)
    }
}

impl<'a> From<&'a OneOrMany> for LinkRef<'a> {
    fn from(value: &'a OneOrMany) -> Self {
        value.as_link_ref()
    }
}
