//! The embedded preview collection

use crate::content::PostSummary;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Preview records for the overview surface, in authored display order
///
/// The order is not strictly date-descending (the study guides sit ahead of
/// the summer posts); date-ordered surfaces go through the catalog's by-date
/// view instead.
pub fn previews() -> Vec<PostSummary> {
    vec![
        PostSummary {
            slug: "dse-chinese-12-prescribed-texts-high-score-strategy".to_string(),
            title: "DSE 中文｜12篇指定範文高分實戰：三步讀、三步答、三步記".to_string(),
            date: "2025-01-16".to_string(),
            authors: strings(&["Examify Team"]),
            tags: strings(&["DSE", "Chinese", "Education", "Study Tips"]),
            image: "/learning.avif".to_string(),
            featured: false,
            excerpt: Some(
                "深入探討DSE中文指定範文的高分策略，提供三步讀、三步答、三步記的實戰技巧。"
                    .to_string(),
            ),
        },
        PostSummary {
            slug: "dse-maths-quadratic-functions-inequalities".to_string(),
            title: "DSE 數學｜二次函數與二次不等式高分技巧（判別式＋圖像＋參數題一網打盡）"
                .to_string(),
            date: "2025-01-16".to_string(),
            authors: strings(&["Examify Team"]),
            tags: strings(&["DSE", "Mathematics", "Education", "Study Tips"]),
            image: "/physics-dashboard.png".to_string(),
            featured: false,
            excerpt: Some(
                "掌握二次函數與二次不等式的核心技巧，透過判別式、圖像分析與參數題解題方法提升數學成績。"
                    .to_string(),
            ),
        },
        PostSummary {
            slug: "private-tutoring-hkdse-booster".to_string(),
            title: "私人補習，真係DSE嘅助推器｜心得blog".to_string(),
            date: "2025-01-15".to_string(),
            authors: strings(&["Examify Team"]),
            tags: strings(&[
                "Education",
                "HKDSE",
                "Tutoring",
                "Featured",
                "家長心得",
                "考試技巧",
                "升學資訊",
                "中文",
                "英文",
                "數學",
                "學習心得",
                "個人興趣",
            ]),
            image: "/learning.avif".to_string(),
            featured: true,
            excerpt: Some(
                "深入探討私人補習如何成為HKDSE考試的關鍵助推器，提供實用的選擇指南和學習策略。"
                    .to_string(),
            ),
        },
        PostSummary {
            slug: "chatjupas-whatsapp-ai".to_string(),
            title: "ChatJupas神器 喺WhatsApp度同你即刻對話，拎齊晒升學資料！📚".to_string(),
            date: "2025-08-01".to_string(),
            authors: strings(&["Nardo", "Bolly"]),
            tags: strings(&["AI Technology", "Trending"]),
            image: "/learning.avif".to_string(),
            featured: false,
            excerpt: Some(
                "Discover how ChatJupas AI on WhatsApp can help students get all the necessary information for university applications instantly."
                    .to_string(),
            ),
        },
        PostSummary {
            slug: "social-media-relationships-sales".to_string(),
            title: "Leveraging Social Media to Build Relationships and Drive Sales".to_string(),
            date: "2025-07-24".to_string(),
            authors: strings(&["Arthur"]),
            tags: strings(&["Business"]),
            image: "/main-dashboard.png".to_string(),
            featured: false,
            excerpt: Some(
                "Explore strategies for using social media platforms to foster meaningful connections with your audience."
                    .to_string(),
            ),
        },
        PostSummary {
            slug: "crypto-volatility-regulatory".to_string(),
            title: "Cryptocurrency Experiences Volatility as Regulatory Concerns Persist"
                .to_string(),
            date: "2025-07-14".to_string(),
            authors: strings(&["Nardo"]),
            tags: strings(&["Business", "Regulation"]),
            image: "/physics-dashboard.png".to_string(),
            featured: false,
            excerpt: Some(
                "An analysis of the recent fluctuations in the cryptocurrency market and regulatory discussions."
                    .to_string(),
            ),
        },
        PostSummary {
            slug: "data-analytics-decision-making".to_string(),
            title: "Leveraging Data Analytics for Better Decision-Making in Business".to_string(),
            date: "2025-07-13".to_string(),
            authors: strings(&["Matthew"]),
            tags: strings(&["Business", "Analytics"]),
            image: "/english-dashboard.png".to_string(),
            featured: false,
            excerpt: Some(
                "Discover how businesses can harness the power of data analytics to gain actionable insights."
                    .to_string(),
            ),
        },
    ]
}
