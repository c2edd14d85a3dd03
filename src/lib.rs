//! blog-content: typed editorial content for the blog
//!
//! This crate carries the blog's post data and the rules around it: the
//! record shapes for previews and full posts, a consistency lint over the
//! hand-edited collections, a slug-indexed catalog for lookup and ordering,
//! and a resolver that turns a post plus its link metadata into a flat
//! render sequence. The seven shipped posts are embedded as struct literals
//! and exposed through [`data::catalog`].

pub mod catalog;
pub mod content;
pub mod data;
pub mod helpers;
pub mod layout;
pub mod lint;

pub use catalog::Catalog;
pub use content::{
    ContentBlock, ExternalLinks, InternalLinks, PanelPosition, PostContent, PostLinks,
    PostSummary, SocialLinks,
};
pub use data::catalog;
pub use layout::{resolve_layout, RenderItem};
pub use lint::{validate_collection, Collection, Violation};
