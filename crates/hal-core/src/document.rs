//! # Documents and Resources
//!
//! [`Document`] is the hypermedia envelope shared by every HAL resource: an
//! optional `_embedded` member of caller shape `E` and an optional `_links`
//! member of shape [`Links<L>`]. Absence of either means "no embedded
//! content" / "no links", never an error.
//!
//! [`Resource`] composes a caller base record `R` with that envelope. On the
//! wire the base record's members and the envelope members sit side by side
//! in one JSON object. `R` must serialize as a map or struct and must not
//! define `_embedded` or `_links` itself; [`crate::json`] checks this on
//! encode.
//!
//! ## Omission
//!
//! Optional envelope members are skipped when `None`, so a resource built
//! without embedded content serializes with no `_embedded` key at all.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::link::LinkRef;
use crate::links::{LinkMap, Links, Relations};

/// Member name of the embedded envelope.
pub const EMBEDDED_FIELD: &str = "_embedded";

/// Member name of the links envelope.
pub const LINKS_FIELD: &str = "_links";

/// The HAL envelope: embedded content and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<E, L = LinkMap> {
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<E>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links<L>>,
}

impl<E, L> Document<E, L> {
    /// Build an envelope. `None` members are omitted on output.
    pub fn new(embedded: Option<E>, links: Option<Links<L>>) -> Self {
        Self { embedded, links }
    }

    /// An envelope with neither embedded content nor links.
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    pub fn with_embedded(mut self, embedded: E) -> Self {
        self.embedded = Some(embedded);
        self
    }

    pub fn with_links(mut self, links: Links<L>) -> Self {
        self.links = Some(links);
        self
    }
}

impl<E, L> Default for Document<E, L> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A caller base record `R` merged with the HAL envelope.
///
/// Base fields are reachable directly through `Deref`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource<R, E, L = LinkMap> {
    /// The caller's own record.
    #[serde(flatten)]
    pub base: R,
    /// The `_embedded` / `_links` envelope.
    #[serde(flatten)]
    pub document: Document<E, L>,
}

impl<R, E, L> Resource<R, E, L> {
    /// Merge `base` with optional embedded content and links.
    ///
    /// Absent parts leave no key behind in the serialized form.
    pub fn new(base: R, embedded: Option<E>, links: Option<Links<L>>) -> Self {
        Self {
            base,
            document: Document::new(embedded, links),
        }
    }

    pub fn with_embedded(mut self, embedded: E) -> Self {
        self.document.embedded = Some(embedded);
        self
    }

    pub fn with_links(mut self, links: Links<L>) -> Self {
        self.document.links = Some(links);
        self
    }

    /// Split into base record and envelope.
    pub fn into_parts(self) -> (R, Document<E, L>) {
        (self.base, self.document)
    }
}

impl<R, E, L> Deref for Resource<R, E, L> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.base
    }
}

impl<R, E, L> DerefMut for Resource<R, E, L> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.base
    }
}

/// Anything that carries a HAL envelope.
///
/// The accessor functions in this module are generic over this trait so the
/// same calls work on a bare [`Document`] and on any [`Resource`].
pub trait HalDocument {
    type Embedded;
    type Relations;

    fn document(&self) -> &Document<Self::Embedded, Self::Relations>;
}

impl<E, L> HalDocument for Document<E, L> {
    type Embedded = E;
    type Relations = L;

    fn document(&self) -> &Document<E, L> {
        self
    }
}

impl<R, E, L> HalDocument for Resource<R, E, L> {
    type Embedded = E;
    type Relations = L;

    fn document(&self) -> &Document<E, L> {
        &self.document
    }
}

/// Creates a HAL resource from a base record, optional embedded content,
/// and optional links.
///
/// `base` is moved in unchanged. `embedded` and `links` are moved in as-is,
/// not deep-copied.
pub fn create_resource<R, E, L>(
    base: R,
    embedded: Option<E>,
    links: Option<Links<L>>,
) -> Resource<R, E, L> {
    Resource::new(base, embedded, links)
}

/// Returns the `_embedded` content of a document.
pub fn get_embedded<D: HalDocument>(doc: &D) -> Option<&D::Embedded> {
    doc.document().embedded.as_ref()
}

/// Returns the `_links` map of a document.
pub fn get_links<D: HalDocument>(doc: &D) -> Option<&Links<D::Relations>> {
    doc.document().links.as_ref()
}

/// Returns the link(s) stored under relation `rel`.
///
/// `None` when the document has no `_links` or the relation is unpopulated.
pub fn get_link<'a, D>(doc: &'a D, rel: &str) -> Option<LinkRef<'a>>
where
    D: HalDocument,
    D::Relations: Relations,
{
    get_links(doc).and_then(|links| links.get(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Link;
    use crate::links::NoRelations;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        username: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Role {
        name: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct EmbeddedRoles {
        roles: Vec<Resource<Role, (), NoRelations>>,
    }

    fn admin() -> User {
        User {
            username: "admin".to_string(),
        }
    }

    #[test]
    fn test_create_resource_sets_all_parts() {
        let embedded = EmbeddedRoles {
            roles: vec![create_resource(
                Role {
                    name: "administrator".to_string(),
                },
                None,
                Some(Links::self_only("http://localhost/roles/administrator")),
            )],
        };
        let links: Links = Links::self_only("http://localhost/users/admin");
        let res = create_resource(admin(), Some(embedded.clone()), Some(links.clone()));

        assert_eq!(res.username, "admin");
        assert_eq!(get_embedded(&res), Some(&embedded));
        assert_eq!(get_links(&res), Some(&links));
    }

    #[test]
    fn test_create_resource_omits_absent_members() {
        let res: Resource<User, EmbeddedRoles> = create_resource(admin(), None, None);
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value, json!({"username": "admin"}));
        let object = value.as_object().unwrap();
        assert!(!object.contains_key(EMBEDDED_FIELD));
        assert!(!object.contains_key(LINKS_FIELD));
    }

    #[test]
    fn test_create_resource_omits_only_links() {
        let res: Resource<User, serde_json::Value> =
            create_resource(admin(), Some(json!({"roles": []})), None);
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value, json!({"username": "admin", "_embedded": {"roles": []}}));
    }

    #[test]
    fn test_get_link_reads_named_relation() {
        let links = Links::<LinkMap>::self_only("http://localhost/users/admin")
            .with_relation("profile", Link::new("http://localhost/users/admin/profile"));
        let res: Resource<User, ()> = create_resource(admin(), None, Some(links));

        assert_eq!(
            get_link(&res, "profile"),
            Some(LinkRef::One(&Link::new("http://localhost/users/admin/profile")))
        );
        assert_eq!(
            get_link(&res, "self").and_then(|r| r.as_single()).map(|l| l.href.as_str()),
            Some("http://localhost/users/admin")
        );
        assert!(get_link(&res, "missing").is_none());
    }

    #[test]
    fn test_accessors_on_bare_document() {
        let doc: Document<serde_json::Value> = Document::empty();
        assert!(get_embedded(&doc).is_none());
        assert!(get_links(&doc).is_none());
        assert!(get_link(&doc, "self").is_none());
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({}));
    }

    #[test]
    fn test_deserialize_resource_splits_base_and_envelope() {
        let res: Resource<User, EmbeddedRoles> = serde_json::from_value(json!({
            "username": "admin",
            "_embedded": {
                "roles": [{
                    "name": "administrator",
                    "_links": {"self": {"href": "http://localhost/roles/administrator"}}
                }]
            },
            "_links": {
                "self": {"href": "http://localhost/users/admin"},
                "profile": {"href": "http://localhost/users/admin/profile"}
            }
        }))
        .unwrap();

        assert_eq!(res.base, admin());
        let roles = &get_embedded(&res).unwrap().roles;
        assert_eq!(roles[0].name, "administrator");
        assert_eq!(
            get_link(&roles[0], "self").and_then(|r| r.as_single()),
            Some(&Link::new("http://localhost/roles/administrator"))
        );
        assert!(get_link(&res, "profile").is_some());
    }

    #[test]
    fn test_deserialize_without_envelope() {
        let res: Resource<User, EmbeddedRoles> =
            serde_json::from_value(json!({"username": "member"})).unwrap();
        assert_eq!(res.username, "member");
        assert!(get_embedded(&res).is_none());
        assert!(get_links(&res).is_none());
    }

    #[test]
    fn test_into_parts() {
        let res: Resource<User, ()> = create_resource(admin(), Some(()), None);
        let (base, doc) = res.into_parts();
        assert_eq!(base, admin());
        assert_eq!(doc.embedded, Some(()));
    }
}
