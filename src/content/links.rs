//! Cross-reference and social-link metadata
//!
//! A post may carry a link panel: social profiles, off-site references and
//! on-site references, plus a declared position for where the panel lands in
//! the rendered block sequence. All sub-structures are optional; the data
//! layer treats every URL and identifier as an opaque string except
//! `related_post`, which must name an existing content record.

use serde::{Deserialize, Serialize};

/// Where the link panel is injected into the rendered block sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    /// Before the first block
    Top,
    /// At the midpoint of the block sequence
    Middle,
    /// After the last block
    Bottom,
    /// At an explicit insertion index (`custom_position`)
    Custom,
}

/// Social profile and share URLs, keyed by platform
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

/// Off-site references, keyed by relation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
}

/// On-site references, keyed by relation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InternalLinks {
    /// Slug of a related post; must exist in the content store
    #[serde(default, rename = "relatedPost", skip_serializing_if = "Option::is_none")]
    pub related_post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// The link panel metadata attached to a post
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostLinks {
    #[serde(default, rename = "socialMedia", skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialLinks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalLinks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<InternalLinks>,

    /// Panel placement; absent means the renderer default (bottom)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PanelPosition>,

    /// Insertion index into the rich-content sequence; required when
    /// `position` is [`PanelPosition::Custom`], ignored otherwise
    #[serde(default, rename = "customPosition", skip_serializing_if = "Option::is_none")]
    pub custom_position: Option<usize>,
}

impl PostLinks {
    /// The related-post slug reference, if one is declared
    pub fn related_post(&self) -> Option<&str> {
        self.internal.as_ref()?.related_post.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_from_original_shape() {
        let json = r#"{
            "socialMedia": {
                "linkedin": "https://www.linkedin.com/posts/activity-987654321"
            },
            "external": {
                "download": "https://example.com/analytics-guide.pdf",
                "resource": "https://www.tableau.com/learn/articles/data-analytics"
            },
            "internal": {
                "relatedPost": "crypto-volatility-regulatory"
            },
            "position": "custom",
            "customPosition": 3
        }"#;
        let links: PostLinks = serde_json::from_str(json).unwrap();
        assert_eq!(links.position, Some(PanelPosition::Custom));
        assert_eq!(links.custom_position, Some(3));
        assert_eq!(links.related_post(), Some("crypto-volatility-regulatory"));
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        let json = r#"{ "position": "sidebar" }"#;
        assert!(serde_json::from_str::<PostLinks>(json).is_err());
    }
}
