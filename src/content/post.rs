//! Post record models
//!
//! Two related shapes describe every post: a lightweight [`PostSummary`] for
//! listing surfaces and a full [`PostContent`] for detail pages. The shapes
//! share their identifying fields, and a slug present in both collections
//! denotes the same logical post.

use serde::{Deserialize, Serialize};

use super::{ContentBlock, PostLinks};
use crate::helpers::date::parse_date;

/// A preview-index entry: what a listing or overview surface needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostSummary {
    /// Unique URL-safe identifier, the primary key across both collections
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as an ISO 8601 calendar date (e.g. "2025-07-24")
    pub date: String,

    /// Author display names, in display order; never empty
    pub authors: Vec<String>,

    /// Free-text labels; order may carry display significance
    pub tags: Vec<String>,

    /// Path or URL of the cover asset (opaque to this layer)
    pub image: String,

    /// Marks the one featured post of the preview index
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,

    /// Short summary shown on listing surfaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl PostSummary {
    /// Parse the publication date, if it is a valid calendar date
    pub fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.date)
    }
}

/// A content-store entry: the full record a detail page renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostContent {
    /// Unique URL-safe identifier, the primary key across both collections
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as an ISO 8601 calendar date
    pub date: String,

    /// Author display names, in display order; never empty
    pub authors: Vec<String>,

    /// Free-text labels
    pub tags: Vec<String>,

    /// Path or URL of the cover asset (opaque to this layer)
    pub image: String,

    /// Featured flag as carried on the detail record
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,

    /// Cross-reference and social metadata, with panel placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PostLinks>,

    /// Short summary, mirrored from the preview surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Plain-text body, used when no rich content is declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Supplementary closing text (e.g. a final remark)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<String>,

    /// Ordered rich-content blocks, rendered top to bottom; non-empty when present
    #[serde(
        default,
        rename = "richContent",
        skip_serializing_if = "Option::is_none"
    )]
    pub rich_content: Option<Vec<ContentBlock>>,
}

impl PostContent {
    /// The rich-content blocks, or an empty slice when none are declared
    pub fn blocks(&self) -> &[ContentBlock] {
        self.rich_content.as_deref().unwrap_or_default()
    }

    /// Parse the publication date, if it is a valid calendar date
    pub fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.date)
    }
}
