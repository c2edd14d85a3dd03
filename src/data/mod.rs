//! The embedded collections
//!
//! The seven posts ship inside the crate as plain struct literals: no file
//! I/O, no parse step, no startup failure mode. The catalog view over them
//! is built once on first access and lives for the program's lifetime. A
//! test pins the embedded records to zero lint findings, so edits that break
//! an invariant fail in CI rather than on a rendered page.

mod contents;
mod previews;

pub use contents::contents;
pub use previews::previews;

use lazy_static::lazy_static;

use crate::catalog::Catalog;

lazy_static! {
    static ref CATALOG: Catalog = Catalog::new(previews(), contents());
}

/// The embedded catalog, built on first access
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve_layout, RenderItem};
    use crate::lint::{validate_collection, Violation};

    #[test]
    fn test_embedded_collections_have_no_findings() {
        assert_eq!(catalog().validate(), vec![]);
    }

    #[test]
    fn test_every_preview_resolves_to_a_content_record() {
        let catalog = catalog();
        assert_eq!(catalog.preview_count(), 7);
        assert_eq!(catalog.content_count(), 7);
        for preview in catalog.previews() {
            let content = catalog.content_by_slug(&preview.slug).unwrap();
            assert_eq!(content.slug, preview.slug);
            assert_eq!(content.title, preview.title);
            assert_eq!(content.date, preview.date);
        }
    }

    #[test]
    fn test_unknown_slug_resolves_to_none() {
        assert!(catalog().preview_by_slug("does-not-exist").is_none());
        assert!(catalog().content_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_featured_preview_is_the_tutoring_guide() {
        assert_eq!(
            catalog().featured().unwrap().slug,
            "private-tutoring-hkdse-booster"
        );
    }

    #[test]
    fn test_by_date_view_is_newest_first() {
        let slugs: Vec<&str> = catalog()
            .previews_by_date()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(
            slugs,
            vec![
                "chatjupas-whatsapp-ai",
                "social-media-relationships-sales",
                "crypto-volatility-regulatory",
                "data-analytics-decision-making",
                "dse-chinese-12-prescribed-texts-high-score-strategy",
                "dse-maths-quadratic-functions-inequalities",
                "private-tutoring-hkdse-booster",
            ]
        );
    }

    #[test]
    fn test_related_posts_resolve() {
        let catalog = catalog();
        for content in catalog.contents() {
            if let Some(links) = &content.links {
                if let Some(target) = links.related_post() {
                    assert!(
                        catalog.content_by_slug(target).is_some(),
                        "dangling related post in {}",
                        content.slug
                    );
                }
            }
        }
        let analytics = catalog
            .content_by_slug("data-analytics-decision-making")
            .unwrap();
        assert_eq!(
            analytics.links.as_ref().unwrap().related_post(),
            Some("crypto-volatility-regulatory")
        );
    }

    #[test]
    fn test_chatjupas_panel_lands_midway() {
        let post = catalog().content_by_slug("chatjupas-whatsapp-ai").unwrap();
        let items = resolve_layout(post);
        assert_eq!(items.len(), 15);
        assert!(matches!(items[7], RenderItem::LinkPanel(_)));
    }

    #[test]
    fn test_business_posts_are_plain_text() {
        let post = catalog()
            .content_by_slug("crypto-volatility-regulatory")
            .unwrap();
        assert!(post.blocks().is_empty());
        assert!(post.content.is_some());
    }

    #[test]
    fn test_flagging_a_second_preview_is_caught_and_tie_broken() {
        let mut previews = previews();
        previews
            .iter_mut()
            .find(|p| p.slug == "chatjupas-whatsapp-ai")
            .unwrap()
            .featured = true;

        let findings = validate_collection(&previews, &contents());
        assert_eq!(
            findings,
            vec![Violation::MultipleFeatured {
                slug: "chatjupas-whatsapp-ai".to_string(),
            }]
        );

        // First declared still wins for display until the data is fixed.
        let catalog = Catalog::new(previews.clone(), contents());
        assert_eq!(
            catalog.featured().unwrap().slug,
            "private-tutoring-hkdse-booster"
        );

        // Dropping the original flag leaves the newer post featured.
        previews
            .iter_mut()
            .find(|p| p.slug == "private-tutoring-hkdse-booster")
            .unwrap()
            .featured = false;
        let catalog = Catalog::new(previews, contents());
        assert_eq!(catalog.featured().unwrap().slug, "chatjupas-whatsapp-ai");
    }

    #[test]
    fn test_renaming_a_linked_post_is_caught() {
        let mut contents = contents();
        contents
            .iter_mut()
            .find(|c| c.slug == "crypto-volatility-regulatory")
            .unwrap()
            .slug = "crypto-volatility-renamed".to_string();
        let findings = validate_collection(&previews(), &contents);
        assert!(findings.contains(&Violation::DanglingRelatedPost {
            slug: "data-analytics-decision-making".to_string(),
            target: "crypto-volatility-regulatory".to_string(),
        }));
    }

    #[test]
    fn test_embedded_records_round_trip_through_json() {
        let catalog = catalog();
        let previews_json = catalog.previews_to_json().unwrap();
        let contents_json = catalog.contents_to_json().unwrap();
        let parsed = Catalog::from_json(&previews_json, &contents_json).unwrap();
        assert_eq!(parsed.preview_count(), 7);
        assert_eq!(parsed.content_count(), 7);
        let maths = parsed
            .content_by_slug("dse-maths-quadratic-functions-inequalities")
            .unwrap();
        assert_eq!(maths.blocks().len(), 50);
    }
}
