//! Content module - the typed record shapes for posts

mod block;
mod links;
mod post;

pub use block::ContentBlock;
pub use links::{ExternalLinks, InternalLinks, PanelPosition, PostLinks, SocialLinks};
pub use post::{PostContent, PostSummary};
