//! # hal-core — Typed HAL Documents
//!
//! Structural types for documents that follow the HAL (Hypertext Application
//! Language) convention: a caller-defined record, optionally carrying
//! embedded sub-resources under `_embedded` and hypermedia links under
//! `_links`, plus the pagination envelope used for paged listings.
//!
//! The crate shapes and reads in-memory values. Turning them into bytes is
//! left to `serde_json`; the [`json`] module is a thin bridge that adds the
//! reserved-member check on the way out.
//!
//! ## Key Design Principles
//!
//! 1. **Composition over structural typing.** A [`Resource`] is a base record
//!    `R` flattened beside a [`Document`] envelope. The envelope members are
//!    reserved and always serialize as `_embedded` / `_links`.
//!
//! 2. **Omit, never null.** Every optional member is skipped on serialization
//!    when absent. A resource built without links has no `_links` key at all.
//!
//! 3. **Total accessors.** `get_*` functions never fail. A missing member at
//!    any level reads as `None`.
//!
//! 4. **Typed relations.** Link relations are either a free-form [`LinkMap`]
//!    or a caller struct implementing [`Relations`], such as
//!    [`PageRelations`] for `first`/`last`/`next`/`prev`.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod document;
pub mod error;
pub mod json;
pub mod link;
pub mod links;
pub mod page;

// Re-export primary types for ergonomic imports.
pub use document::{
    create_resource, get_embedded, get_link, get_links, Document, HalDocument, Resource,
};
pub use error::HalError;
pub use link::{Link, LinkRef, OneOrMany};
pub use links::{LinkMap, Links, NoRelations, Relations};
pub use page::{
    create_paged_resource, get_page, get_page_number, get_page_size, get_page_total_elements,
    get_page_total_pages, Page, PageInfo, PageLinks, PageRelations, PagedResource,
};
