//! Rich-content blocks
//!
//! The block kind set is closed on purpose: the layout resolver and the
//! consuming renderer match on it exhaustively, so a new kind is a deliberate
//! schema change, not a silent data drift. An earlier scaffold used a
//! `paragraph` kind; that vocabulary is not part of the schema and is
//! rejected at the serialization boundary.

use serde::{Deserialize, Serialize};

/// One unit of rich content within a post body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A paragraph of body text
    Text {
        content: String,
        /// Presentation-only styling hint, ignored by the data layer
        #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },

    /// An illustration with optional caption and alt text
    Image {
        /// Carried for shape compatibility; empty for images in practice
        #[serde(default)]
        content: String,
        #[serde(default, rename = "imageUrl", skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        #[serde(default, rename = "imageCaption", skip_serializing_if = "Option::is_none")]
        image_caption: Option<String>,
        #[serde(default, rename = "imageAlt", skip_serializing_if = "Option::is_none")]
        image_alt: Option<String>,
        #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },

    /// A pull quote, optionally attributed
    Quote {
        content: String,
        #[serde(default, rename = "quoteAuthor", skip_serializing_if = "Option::is_none")]
        quote_author: Option<String>,
        #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },

    /// A section heading within the body
    Subheading {
        content: String,
        #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
}

impl ContentBlock {
    /// The textual payload of the block (empty for most images)
    pub fn content(&self) -> &str {
        match self {
            ContentBlock::Text { content, .. }
            | ContentBlock::Image { content, .. }
            | ContentBlock::Quote { content, .. }
            | ContentBlock::Subheading { content, .. } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_kinds_deserialize() {
        let json = r#"[
            { "type": "text", "content": "Purple clouds drifted lazily." },
            { "type": "subheading", "content": "Unexpected Adventures Await" },
            {
                "type": "image",
                "content": "",
                "imageUrl": "/main-dashboard.png",
                "imageCaption": "ChatJupas AI interface.",
                "imageAlt": "ChatJupas AI Dashboard Interface"
            },
            {
                "type": "quote",
                "content": "Sometimes, the smallest pebble can cause the largest ripple.",
                "quoteAuthor": "Dr. Sarah Chen, Education Technology Expert"
            }
        ]"#;
        let blocks: Vec<ContentBlock> = serde_json::from_str(json).unwrap();
        assert_eq!(blocks.len(), 4);
        assert!(matches!(blocks[0], ContentBlock::Text { .. }));
        assert!(matches!(blocks[1], ContentBlock::Subheading { .. }));
        assert!(matches!(blocks[2], ContentBlock::Image { .. }));
        assert!(matches!(blocks[3], ContentBlock::Quote { .. }));
    }

    #[test]
    fn test_paragraph_kind_is_rejected() {
        // The stale scaffold vocabulary is not part of the schema
        let json = r#"{ "type": "paragraph", "content": "This is a paragraph of text." }"#;
        assert!(serde_json::from_str::<ContentBlock>(json).is_err());
    }

    #[test]
    fn test_image_keeps_empty_content_on_wire() {
        let block = ContentBlock::Image {
            content: String::new(),
            image_url: Some("/image.jpg".to_string()),
            image_caption: None,
            image_alt: Some("Image description".to_string()),
            class_name: None,
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""content":"""#));
        assert!(json.contains(r#""imageUrl":"/image.jpg""#));
        assert!(!json.contains("imageCaption"));
    }

    #[test]
    fn test_content_accessor() {
        let quote = ContentBlock::Quote {
            content: "換題不換法".to_string(),
            quote_author: Some("資深DSE中文導師".to_string()),
            class_name: None,
        };
        assert_eq!(quote.content(), "換題不換法");
    }
}
