//! Slug-indexed access to the post collections
//!
//! The catalog is the read side of the crate: both collections keyed by slug
//! with declared order preserved, so listing surfaces iterate in authoring
//! order and detail surfaces resolve a slug in one lookup. Construction never
//! fails; malformed records are a matter for the lint pass, and duplicate
//! slugs collapse to their first occurrence.

use anyhow::{anyhow, Result};
use indexmap::IndexMap;

use crate::content::{PostContent, PostSummary};
use crate::helpers::date::newest_first;
use crate::lint::{self, Violation};

/// Order-preserving, slug-indexed view over the preview and content records
#[derive(Debug, Clone)]
pub struct Catalog {
    previews: IndexMap<String, PostSummary>,
    contents: IndexMap<String, PostContent>,
}

impl Catalog {
    /// Build a catalog from declared record lists
    ///
    /// Declared order is preserved. On a duplicate slug the first record
    /// wins and later ones are dropped with a warning; the lint pass reports
    /// the duplication as a finding.
    pub fn new(previews: Vec<PostSummary>, contents: Vec<PostContent>) -> Self {
        let mut preview_index = IndexMap::with_capacity(previews.len());
        for preview in previews {
            if preview_index.contains_key(&preview.slug) {
                tracing::warn!("Dropping duplicate preview slug: {}", preview.slug);
                continue;
            }
            preview_index.insert(preview.slug.clone(), preview);
        }

        let mut content_index = IndexMap::with_capacity(contents.len());
        for content in contents {
            if content_index.contains_key(&content.slug) {
                tracing::warn!("Dropping duplicate content slug: {}", content.slug);
                continue;
            }
            content_index.insert(content.slug.clone(), content);
        }

        Catalog {
            previews: preview_index,
            contents: content_index,
        }
    }

    /// Parse a catalog from two JSON arrays, previews and contents
    ///
    /// Records that do not match the schema (an unknown block kind, a
    /// malformed panel position) are rejected here rather than silently
    /// coerced.
    pub fn from_json(previews_json: &str, contents_json: &str) -> Result<Self> {
        let previews: Vec<PostSummary> = serde_json::from_str(previews_json)
            .map_err(|e| anyhow!("Failed to parse preview records: {}", e))?;
        let contents: Vec<PostContent> = serde_json::from_str(contents_json)
            .map_err(|e| anyhow!("Failed to parse content records: {}", e))?;
        Ok(Catalog::new(previews, contents))
    }

    /// Look up a preview record by slug
    pub fn preview_by_slug(&self, slug: &str) -> Option<&PostSummary> {
        self.previews.get(slug)
    }

    /// Look up a content record by slug
    pub fn content_by_slug(&self, slug: &str) -> Option<&PostContent> {
        self.contents.get(slug)
    }

    /// Preview records in declared display order
    pub fn previews(&self) -> impl Iterator<Item = &PostSummary> {
        self.previews.values()
    }

    /// Preview records sorted newest first
    ///
    /// Declared order usually matches this already; sorting here keeps
    /// date-ordered surfaces correct when the two drift apart. Equal and
    /// unparseable dates keep their declared relative order, with
    /// unparseable ones last.
    pub fn previews_by_date(&self) -> Vec<&PostSummary> {
        let mut previews: Vec<&PostSummary> = self.previews.values().collect();
        previews.sort_by(|a, b| newest_first(a.parsed_date(), b.parsed_date()));
        previews
    }

    /// Content records in declared order
    pub fn contents(&self) -> impl Iterator<Item = &PostContent> {
        self.contents.values()
    }

    /// The featured preview, if any
    ///
    /// At most one preview is expected to carry the flag; when several do,
    /// the first declared wins and the extras are logged.
    pub fn featured(&self) -> Option<&PostSummary> {
        let mut flagged = self.previews.values().filter(|preview| preview.featured);
        let first = flagged.next();
        for extra in flagged {
            tracing::warn!("Ignoring extra featured preview: {}", extra.slug);
        }
        first
    }

    /// Number of preview records
    pub fn preview_count(&self) -> usize {
        self.previews.len()
    }

    /// Number of content records
    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    /// Run the consistency checks over the catalog's records
    pub fn validate(&self) -> Vec<Violation> {
        let previews: Vec<PostSummary> = self.previews.values().cloned().collect();
        let contents: Vec<PostContent> = self.contents.values().cloned().collect();
        lint::validate_collection(&previews, &contents)
    }

    /// Serialize the preview collection to pretty-printed JSON
    pub fn previews_to_json(&self) -> Result<String> {
        let previews: Vec<&PostSummary> = self.previews.values().collect();
        Ok(serde_json::to_string_pretty(&previews)?)
    }

    /// Serialize the content collection to pretty-printed JSON
    pub fn contents_to_json(&self) -> Result<String> {
        let contents: Vec<&PostContent> = self.contents.values().collect();
        Ok(serde_json::to_string_pretty(&contents)?)
    }
}
