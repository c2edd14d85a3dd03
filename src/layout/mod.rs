//! Render-sequence resolution
//!
//! A detail page renders a post as one flat sequence: the rich-content
//! blocks in declared order, with the link panel spliced in at the position
//! the record asks for. Resolving that sequence here keeps the placement
//! rules (midpoint arithmetic, clamping, defaults) out of every renderer.

use crate::content::{ContentBlock, PanelPosition, PostContent, PostLinks};

/// One item of the resolved render sequence, borrowing from the post record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderItem<'a> {
    /// A rich-content block, in declared order
    Block(&'a ContentBlock),
    /// The post's link panel; present at most once
    LinkPanel(&'a PostLinks),
}

/// Resolve the flat render sequence for a post
///
/// Every declared block appears exactly once and in order. The link panel is
/// inserted at the declared position: `top` before the first block, `middle`
/// at the floor midpoint, `bottom` (or no declared position) after the last
/// block, and `custom` at the given index clamped to the sequence bounds.
/// Posts without link metadata yield their blocks alone.
pub fn resolve_layout(post: &PostContent) -> Vec<RenderItem<'_>> {
    let blocks = post.blocks();

    let links = match &post.links {
        Some(links) => links,
        None => return blocks.iter().map(RenderItem::Block).collect(),
    };

    let panel_index = match links.position {
        Some(PanelPosition::Top) => 0,
        Some(PanelPosition::Middle) => blocks.len() / 2,
        Some(PanelPosition::Bottom) | None => blocks.len(),
        // A missing index falls back to the bottom; an oversized one clamps.
        Some(PanelPosition::Custom) => links
            .custom_position
            .map_or(blocks.len(), |p| p.min(blocks.len())),
    };

    let mut items = Vec::with_capacity(blocks.len() + 1);
    items.extend(blocks[..panel_index].iter().map(RenderItem::Block));
    items.push(RenderItem::LinkPanel(links));
    items.extend(blocks[panel_index..].iter().map(RenderItem::Block));
    items
}
