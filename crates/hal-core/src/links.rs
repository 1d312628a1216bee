//! # Links Maps
//!
//! The `_links` member of a HAL document. Two relations are reserved and
//! typed here: `self` (a single link, the canonical address of the owning
//! document) and `curies` (a list of links defining compact-URI prefixes).
//! Every other relation belongs to the caller type `L`, flattened beside
//! the reserved pair.
//!
//! `L` is usually one of:
//!
//! - [`LinkMap`], a free-form map from relation name to link(s);
//! - [`NoRelations`], when only `self`/`curies` are expected;
//! - a caller struct implementing [`Relations`], e.g.
//!   [`PageRelations`](crate::page::PageRelations).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::link::{Link, LinkRef, OneOrMany};

/// Reserved relation naming the canonical address of a document.
pub const SELF_REL: &str = "self";

/// Reserved relation holding compact-URI prefix definitions.
pub const CURIES_REL: &str = "curies";

/// Lookup of caller-defined relations by name.
///
/// Implementations return exactly what is stored under `rel`, or `None`
/// when the relation is unknown or unpopulated. They must not resolve the
/// reserved `self`/`curies` relations; [`Links`] does that.
pub trait Relations {
    fn relation(&self, rel: &str) -> Option<LinkRef<'_>>;
}

/// Free-form relations keyed by name.
pub type LinkMap = BTreeMap<String, OneOrMany>;

impl Relations for LinkMap {
    fn relation(&self, rel: &str) -> Option<LinkRef<'_>> {
        self.get(rel).map(OneOrMany::as_link_ref)
    }
}

/// Relations type for documents that carry only `self` and `curies`.
///
/// Unknown relations are ignored on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoRelations {}

impl Relations for NoRelations {
    fn relation(&self, _rel: &str) -> Option<LinkRef<'_>> {
        None
    }
}

/// A HAL links map: reserved relations plus caller relations `L`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links<L = LinkMap> {
    /// The `self` relation.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    /// The `curies` relation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curies: Option<Vec<Link>>,
    /// Caller-defined relations.
    #[serde(flatten)]
    pub relations: L,
}

impl<L: Default> Links<L> {
    /// An empty links map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A links map holding only `self`.
    pub fn self_only(link: impl Into<Link>) -> Self {
        Self::new().with_self(link)
    }
}

impl<L> Links<L> {
    /// Wrap caller relations with no reserved relations set.
    pub fn from_relations(relations: L) -> Self {
        Self {
            self_link: None,
            curies: None,
            relations,
        }
    }

    pub fn with_self(mut self, link: impl Into<Link>) -> Self {
        self.self_link = Some(link.into());
        self
    }

    /// Append a CURIE definition.
    pub fn with_curie(mut self, curie: Link) -> Self {
        self.curies.get_or_insert_with(Vec::new).push(curie);
        self
    }

    pub fn with_relations(mut self, relations: L) -> Self {
        self.relations = relations;
        self
    }

    pub fn self_link(&self) -> Option<&Link> {
        self.self_link.as_ref()
    }

    pub fn curies(&self) -> Option<&[Link]> {
        self.curies.as_deref()
    }

    pub fn relations(&self) -> &L {
        &self.relations
    }
}

impl<L: Relations> Links<L> {
    /// Look up a relation by name, reserved or caller-defined.
    pub fn get(&self, rel: &str) -> Option<LinkRef<'_>> {
        match rel {
            SELF_REL => self.self_link.as_ref().map(LinkRef::One),
            CURIES_REL => self.curies.as_deref().map(LinkRef::Many),
            _ => self.relations.relation(rel),
        }
    }
}

impl Links<LinkMap> {
    /// Insert a caller relation, replacing any previous value.
    ///
    /// `self` and `curies` are routed to their reserved members so they are
    /// never duplicated in the flattened map.
    pub fn with_relation(mut self, rel: impl Into<String>, value: impl Into<OneOrMany>) -> Self {
        let rel = rel.into();
        match (rel.as_str(), value.into()) {
            (SELF_REL, OneOrMany::One(link)) => self.self_link = Some(link),
            (SELF_REL, OneOrMany::Many(links)) => self.self_link = links.into_iter().next(),
            (CURIES_REL, OneOrMany::One(link)) => self.curies = Some(vec![link]),
            (CURIES_REL, OneOrMany::Many(links)) => self.curies = Some(links),
            (_, value) => {
                self.relations.insert(rel, value);
            }
        }
        self
    }
}

impl<L: Relations> Relations for Links<L> {
    fn relation(&self, rel: &str) -> Option<LinkRef<'_>> {
        self.get(rel)
    }
}
