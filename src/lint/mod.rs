//! Collection consistency checks
//!
//! The two collections are edited by hand, so the invariants the rest of the
//! crate leans on (unique slugs, matching preview/content pairs, resolvable
//! cross-references) are enforced here rather than assumed. A check run
//! returns every finding at once instead of stopping at the first one, so an
//! editor can fix a batch of records in a single pass.
//!
//! Findings are advisory: the embedded collections are expected to produce
//! none (a test pins that), while externally loaded data may log findings and
//! keep serving.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::content::{PanelPosition, PostContent, PostSummary};
use crate::helpers;

/// Which collection a finding points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Previews,
    Contents,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Previews => write!(f, "previews"),
            Collection::Contents => write!(f, "contents"),
        }
    }
}

/// A single consistency finding, keyed to the record that caused it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("duplicate slug `{slug}` in {collection}")]
    DuplicateSlug { collection: Collection, slug: String },

    #[error("slug `{slug}` in {collection} is not in canonical form")]
    MalformedSlug { collection: Collection, slug: String },

    #[error("preview `{slug}` has no matching content record")]
    MissingContent { slug: String },

    #[error("content record `{slug}` has no matching preview")]
    MissingPreview { slug: String },

    #[error("preview and content for `{slug}` disagree on {field}")]
    FieldMismatch { slug: String, field: &'static str },

    #[error("record `{slug}` in {collection} has no authors")]
    EmptyAuthors { collection: Collection, slug: String },

    #[error("record `{slug}` in {collection} has unparseable date `{date}`")]
    InvalidDate {
        collection: Collection,
        slug: String,
        date: String,
    },

    #[error("preview `{slug}` is featured but an earlier preview already is")]
    MultipleFeatured { slug: String },

    #[error("record `{slug}` references related post `{target}` which does not exist")]
    DanglingRelatedPost { slug: String, target: String },

    #[error("record `{slug}` asks for custom link placement but carries no position index")]
    MissingCustomPosition { slug: String },

    #[error("record `{slug}` places its links at index {position} but has only {len} blocks")]
    CustomPositionOutOfRange {
        slug: String,
        position: usize,
        len: usize,
    },

    #[error("record `{slug}` declares an empty rich content list")]
    EmptyRichContent { slug: String },
}

impl Violation {
    /// The slug of the offending record
    pub fn slug(&self) -> &str {
        match self {
            Violation::DuplicateSlug { slug, .. }
            | Violation::MalformedSlug { slug, .. }
            | Violation::MissingContent { slug }
            | Violation::MissingPreview { slug }
            | Violation::FieldMismatch { slug, .. }
            | Violation::EmptyAuthors { slug, .. }
            | Violation::InvalidDate { slug, .. }
            | Violation::MultipleFeatured { slug }
            | Violation::DanglingRelatedPost { slug, .. }
            | Violation::MissingCustomPosition { slug }
            | Violation::CustomPositionOutOfRange { slug, .. }
            | Violation::EmptyRichContent { slug } => slug,
        }
    }
}

/// Run every consistency check over a preview/content collection pair
///
/// Slug comparisons are first-occurrence-wins: a duplicated slug yields one
/// finding per extra occurrence, and the cross-collection checks see only the
/// first record under that slug.
pub fn validate_collection(
    previews: &[PostSummary],
    contents: &[PostContent],
) -> Vec<Violation> {
    let mut findings = Vec::new();

    let mut preview_index: IndexMap<&str, &PostSummary> = IndexMap::new();
    for preview in previews {
        if preview_index.contains_key(preview.slug.as_str()) {
            findings.push(Violation::DuplicateSlug {
                collection: Collection::Previews,
                slug: preview.slug.clone(),
            });
        } else {
            preview_index.insert(&preview.slug, preview);
        }
        check_record(
            &mut findings,
            Collection::Previews,
            &preview.slug,
            &preview.date,
            &preview.authors,
        );
    }

    let mut content_index: IndexMap<&str, &PostContent> = IndexMap::new();
    for content in contents {
        if content_index.contains_key(content.slug.as_str()) {
            findings.push(Violation::DuplicateSlug {
                collection: Collection::Contents,
                slug: content.slug.clone(),
            });
        } else {
            content_index.insert(&content.slug, content);
        }
        check_record(
            &mut findings,
            Collection::Contents,
            &content.slug,
            &content.date,
            &content.authors,
        );
    }

    // The preview index carries at most one featured entry. Content records
    // keep their own featured flag for detail surfaces and are not counted.
    let mut featured_seen = false;
    for preview in preview_index.values() {
        if preview.featured {
            if featured_seen {
                findings.push(Violation::MultipleFeatured {
                    slug: preview.slug.clone(),
                });
            }
            featured_seen = true;
        }
    }

    // Every slug resolves on both surfaces, and the identifying fields agree.
    // Tags, image and the featured flag may legitimately differ per surface.
    for (slug, preview) in &preview_index {
        match content_index.get(slug) {
            None => findings.push(Violation::MissingContent {
                slug: (*slug).to_string(),
            }),
            Some(content) => {
                if content.title != preview.title {
                    findings.push(Violation::FieldMismatch {
                        slug: (*slug).to_string(),
                        field: "title",
                    });
                }
                if content.date != preview.date {
                    findings.push(Violation::FieldMismatch {
                        slug: (*slug).to_string(),
                        field: "date",
                    });
                }
            }
        }
    }
    for slug in content_index.keys() {
        if !preview_index.contains_key(slug) {
            findings.push(Violation::MissingPreview {
                slug: (*slug).to_string(),
            });
        }
    }

    // Link metadata and rich-content shape.
    for content in contents {
        if let Some(links) = &content.links {
            if let Some(target) = links.related_post() {
                if !content_index.contains_key(target) {
                    findings.push(Violation::DanglingRelatedPost {
                        slug: content.slug.clone(),
                        target: target.to_string(),
                    });
                }
            }
            if links.position == Some(PanelPosition::Custom) {
                // Bounds only apply against a declared block list; records
                // without rich content leave placement to the renderer.
                match (links.custom_position, &content.rich_content) {
                    (None, _) => findings.push(Violation::MissingCustomPosition {
                        slug: content.slug.clone(),
                    }),
                    (Some(position), Some(blocks)) if position > blocks.len() => {
                        findings.push(Violation::CustomPositionOutOfRange {
                            slug: content.slug.clone(),
                            position,
                            len: blocks.len(),
                        });
                    }
                    _ => {}
                }
            }
        }
        if let Some(blocks) = &content.rich_content {
            if blocks.is_empty() {
                findings.push(Violation::EmptyRichContent {
                    slug: content.slug.clone(),
                });
            }
        }
    }

    findings
}

fn check_record(
    findings: &mut Vec<Violation>,
    collection: Collection,
    slug: &str,
    date: &str,
    authors: &[String],
) {
    if !helpers::slug::is_canonical(slug) {
        findings.push(Violation::MalformedSlug {
            collection,
            slug: slug.to_string(),
        });
    }
    if authors.is_empty() {
        findings.push(Violation::EmptyAuthors {
            collection,
            slug: slug.to_string(),
        });
    }
    if helpers::date::parse_date(date).is_none() {
        findings.push(Violation::InvalidDate {
            collection,
            slug: slug.to_string(),
            date: date.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentBlock, InternalLinks, PostLinks};

    fn preview(slug: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            title: format!("The {} story", slug),
            date: "2025-07-01".to_string(),
            authors: vec!["Arthur".to_string()],
            tags: vec!["Business".to_string()],
            image: "/main-dashboard.png".to_string(),
            featured: false,
            excerpt: None,
        }
    }

    fn body(slug: &str) -> PostContent {
        PostContent {
            slug: slug.to_string(),
            title: format!("The {} story", slug),
            date: "2025-07-01".to_string(),
            authors: vec!["Arthur".to_string()],
            tags: vec!["Business".to_string()],
            image: "/main-dashboard.png".to_string(),
            featured: false,
            links: None,
            excerpt: None,
            content: Some("Body text.".to_string()),
            others: None,
            rich_content: None,
        }
    }

    fn text_block(text: &str) -> ContentBlock {
        ContentBlock::Text {
            content: text.to_string(),
            class_name: None,
        }
    }

    fn fixture() -> (Vec<PostSummary>, Vec<PostContent>) {
        let mut first = preview("first-post");
        first.featured = true;
        (
            vec![first, preview("second-post"), preview("third-post")],
            vec![body("first-post"), body("second-post"), body("third-post")],
        )
    }

    #[test]
    fn test_consistent_collections_have_no_findings() {
        let (previews, contents) = fixture();
        assert!(validate_collection(&previews, &contents).is_empty());
    }

    #[test]
    fn test_duplicate_slug_is_a_single_finding() {
        let (mut previews, contents) = fixture();
        previews.push(previews[1].clone());
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::DuplicateSlug {
                collection: Collection::Previews,
                slug: "second-post".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_authors_is_a_single_finding() {
        let (mut previews, contents) = fixture();
        previews[2].authors.clear();
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::EmptyAuthors {
                collection: Collection::Previews,
                slug: "third-post".to_string(),
            }]
        );
    }

    #[test]
    fn test_second_featured_preview_is_a_single_finding() {
        let (mut previews, contents) = fixture();
        previews[2].featured = true;
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::MultipleFeatured {
                slug: "third-post".to_string(),
            }]
        );
    }

    #[test]
    fn test_featured_content_records_are_not_counted() {
        let (previews, mut contents) = fixture();
        contents[0].featured = true;
        contents[1].featured = true;
        assert!(validate_collection(&previews, &contents).is_empty());
    }

    #[test]
    fn test_renamed_slug_breaks_coverage_both_ways() {
        let (previews, mut contents) = fixture();
        contents[2].slug = "third-post-renamed".to_string();
        let findings = validate_collection(&previews, &contents);
        assert_eq!(findings.len(), 2);
        assert!(findings.contains(&Violation::MissingContent {
            slug: "third-post".to_string(),
        }));
        assert!(findings.contains(&Violation::MissingPreview {
            slug: "third-post-renamed".to_string(),
        }));
    }

    #[test]
    fn test_title_and_date_must_agree_across_surfaces() {
        let (previews, mut contents) = fixture();
        contents[0].title = "A different title".to_string();
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::FieldMismatch {
                slug: "first-post".to_string(),
                field: "title",
            }]
        );
    }

    #[test]
    fn test_unparseable_date_is_flagged_per_collection() {
        let (mut previews, mut contents) = fixture();
        previews[1].date = "July 1st".to_string();
        contents[1].date = "July 1st".to_string();
        let findings = validate_collection(&previews, &contents);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.slug() == "second-post"));
        assert!(matches!(
            findings[0],
            Violation::InvalidDate {
                collection: Collection::Previews,
                ..
            }
        ));
        assert!(matches!(
            findings[1],
            Violation::InvalidDate {
                collection: Collection::Contents,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_slug_is_flagged() {
        let (mut previews, mut contents) = fixture();
        previews[0].slug = "First Post".to_string();
        contents[0].slug = "First Post".to_string();
        let findings = validate_collection(&previews, &contents);
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| matches!(f, Violation::MalformedSlug { .. })));
    }

    #[test]
    fn test_dangling_related_post_is_flagged() {
        let (previews, mut contents) = fixture();
        contents[0].links = Some(PostLinks {
            internal: Some(InternalLinks {
                related_post: Some("does-not-exist".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::DanglingRelatedPost {
                slug: "first-post".to_string(),
                target: "does-not-exist".to_string(),
            }]
        );
    }

    #[test]
    fn test_resolvable_related_post_is_clean() {
        let (previews, mut contents) = fixture();
        contents[0].links = Some(PostLinks {
            internal: Some(InternalLinks {
                related_post: Some("second-post".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(validate_collection(&previews, &contents).is_empty());
    }

    #[test]
    fn test_custom_position_past_the_blocks_is_flagged() {
        let (previews, mut contents) = fixture();
        contents[0].rich_content = Some(vec![text_block("one"), text_block("two")]);
        contents[0].links = Some(PostLinks {
            position: Some(PanelPosition::Custom),
            custom_position: Some(5),
            ..Default::default()
        });
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::CustomPositionOutOfRange {
                slug: "first-post".to_string(),
                position: 5,
                len: 2,
            }]
        );
    }

    #[test]
    fn test_custom_position_after_the_last_block_is_allowed() {
        let (previews, mut contents) = fixture();
        contents[0].rich_content = Some(vec![text_block("one"), text_block("two")]);
        contents[0].links = Some(PostLinks {
            position: Some(PanelPosition::Custom),
            custom_position: Some(2),
            ..Default::default()
        });
        assert!(validate_collection(&previews, &contents).is_empty());
    }

    #[test]
    fn test_custom_without_position_index_is_flagged() {
        let (previews, mut contents) = fixture();
        contents[0].rich_content = Some(vec![text_block("one")]);
        contents[0].links = Some(PostLinks {
            position: Some(PanelPosition::Custom),
            custom_position: None,
            ..Default::default()
        });
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::MissingCustomPosition {
                slug: "first-post".to_string(),
            }]
        );
    }

    #[test]
    fn test_custom_position_without_declared_blocks_is_not_checked() {
        // Plain-text records may still declare a panel position for the
        // renderer; there is no block list to bound the index against.
        let (previews, mut contents) = fixture();
        contents[0].links = Some(PostLinks {
            position: Some(PanelPosition::Custom),
            custom_position: Some(3),
            ..Default::default()
        });
        assert!(validate_collection(&previews, &contents).is_empty());
    }

    #[test]
    fn test_empty_rich_content_is_flagged() {
        let (previews, mut contents) = fixture();
        contents[1].rich_content = Some(vec![]);
        let findings = validate_collection(&previews, &contents);
        assert_eq!(
            findings,
            vec![Violation::EmptyRichContent {
                slug: "second-post".to_string(),
            }]
        );
    }

    #[test]
    fn test_findings_render_readable_messages() {
        let finding = Violation::DuplicateSlug {
            collection: Collection::Previews,
            slug: "second-post".to_string(),
        };
        assert_eq!(
            finding.to_string(),
            "duplicate slug `second-post` in previews"
        );
        assert_eq!(finding.slug(), "second-post");
    }
}
