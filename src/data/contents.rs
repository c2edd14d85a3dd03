//! The embedded content collection

use crate::content::{
    ContentBlock, ExternalLinks, InternalLinks, PanelPosition, PostContent, PostLinks, SocialLinks,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn text(content: &str) -> ContentBlock {
    ContentBlock::Text {
        content: content.to_string(),
        class_name: None,
    }
}

fn subheading(content: &str) -> ContentBlock {
    ContentBlock::Subheading {
        content: content.to_string(),
        class_name: None,
    }
}

fn image(url: &str, caption: &str, alt: &str) -> ContentBlock {
    ContentBlock::Image {
        content: String::new(),
        image_url: Some(url.to_string()),
        image_caption: Some(caption.to_string()),
        image_alt: Some(alt.to_string()),
        class_name: None,
    }
}

fn quote(content: &str, author: &str) -> ContentBlock {
    ContentBlock::Quote {
        content: content.to_string(),
        quote_author: Some(author.to_string()),
        class_name: None,
    }
}

// The three study guides share one link panel: the site's own profiles.
fn examify_links() -> PostLinks {
    PostLinks {
        social_media: Some(SocialLinks {
            instagram: Some("https://www.instagram.com/examify.hk".to_string()),
            facebook: Some("https://www.facebook.com/examify.hk".to_string()),
            ..Default::default()
        }),
        external: Some(ExternalLinks {
            website: Some("https://examify.pro".to_string()),
            ..Default::default()
        }),
        internal: None,
        position: Some(PanelPosition::Bottom),
        custom_position: None,
    }
}

/// Content records for the detail surface, one per preview slug
pub fn contents() -> Vec<PostContent> {
    vec![
        chinese_prescribed_texts(),
        maths_quadratics(),
        private_tutoring(),
        chatjupas(),
        social_media_sales(),
        crypto_volatility(),
        data_analytics(),
    ]
}

fn chinese_prescribed_texts() -> PostContent {
    PostContent {
        slug: "dse-chinese-12-prescribed-texts-high-score-strategy".to_string(),
        title: "DSE 中文｜12篇指定範文高分實戰：三步讀、三步答、三步記".to_string(),
        date: "2025-01-16".to_string(),
        authors: strings(&["Examify Team"]),
        tags: strings(&["DSE", "Chinese", "Education", "Study Tips"]),
        image: "/learning.avif".to_string(),
        featured: false,
        links: Some(examify_links()),
        excerpt: Some(
            "深入探討DSE中文指定範文的高分策略，提供三步讀、三步答、三步記的實戰技巧。"
                .to_string(),
        ),
        content: Some(
            "想在指定範文拿高分，關鍵不在「背幾多」，而在「背得啱＋用得準」。".to_string(),
        ),
        others: Some(
            "最後，操卷請練「換題不換法」：換篇章但不換答題骨架，讓你在陌生題目中也能穩住節奏。"
                .to_string(),
        ),
        rich_content: Some(vec![
            text("想在指定範文拿高分，關鍵不在「背幾多」，而在「背得啱＋用得準」。"),
            subheading("讀時用「三步讀」"),
            text(
                "先看作者背景與體裁功能（論、記、表、傳），再標記結構轉折（如總分、層遞、以事證理），最後抓手法到作用（比喻、對比、排比、借景抒情如何推主題）。",
            ),
            subheading("先以主題分組"),
            text(
                "一是家國責任與治亂之道（出師表、六國論、廉頗藺相如列傳、曹劌論戰）二是修身與學習（師說、勸學、魚我所欲也）",
            ),
            text("三是山水與人生境界（岳陽樓記、始得西山宴游記、逍遙遊、桃花源記、陋室銘）。"),
            text(
                "每組各挑兩句「金句＋作用」建立連結，例如六國論「弊在賂秦也」對應「先總後分」論證法；岳陽樓記「先天下之憂而憂」對應「借景起議」。",
            ),
            subheading("答時用「三步答」"),
            text("引句不超兩行→解意不講故事→手法＋作用直擊題旨"),
            text(
                "例如問「作者如何表現政治理想」，你可先引「先天下之憂而憂」，解作「以公眾福祉為先」，再指出「借景抒情，由洞庭湖風景轉入天下興亡，完成由景至理的提升」，最後回扣「展現士大夫責任」。",
            ),
            subheading("記憶用「三步記」"),
            text("1）情境化背記（把金句放回故事或山水場景）"),
            text("2）對應題型口訣（人物德行→抓言行與抉擇；論證有效→抓例證種類與邏輯關係）"),
            text("3）混合練（同主題跨篇對讀，避免單篇孤立）。"),
            image(
                "/english-dashboard.png",
                "DSE中文指定範文學習策略圖解，展示三步讀、三步答、三步記的學習方法。",
                "DSE Chinese Prescribed Texts Study Strategy",
            ),
            subheading("常見失分位包括"),
            text("• 朝代體裁張冠李戴"),
            text("• 手法只點名不解效"),
            text("• 引用錯字漏標點"),
            subheading("改進方法"),
            text(
                "建立「小卡」——卡面寫金句，卡背寫「手法＋作用＋可回應的題型」，每天三分鐘過一遍。作文融合亦重要：議論文可巧用指定文金句作論據（如以「賂秦」比喻當代「短視交易」），既有文學積累，又與時事對話。",
            ),
            quote(
                "最後，操卷請練「換題不換法」：換篇章但不換答題骨架，讓你在陌生題目中也能穩住節奏。",
                "資深DSE中文導師",
            ),
        ]),
    }
}

fn maths_quadratics() -> PostContent {
    PostContent {
        slug: "dse-maths-quadratic-functions-inequalities".to_string(),
        title: "DSE 數學｜二次函數與二次不等式高分技巧（判別式＋圖像＋參數題一網打盡）"
            .to_string(),
        date: "2025-01-16".to_string(),
        authors: strings(&["Examify Team"]),
        tags: strings(&["DSE", "Mathematics", "Education", "Study Tips"]),
        image: "/physics-dashboard.png".to_string(),
        featured: false,
        links: Some(examify_links()),
        excerpt: Some(
            "掌握二次函數與二次不等式的核心技巧，透過判別式、圖像分析與參數題解題方法提升數學成績。"
                .to_string(),
        ),
        content: Some(
            "想在二次題型穩拿分，別只背公式，要把「判別式、頂點、號性圖」三件武器合成一套流程。"
                .to_string(),
        ),
        others: Some(
            "操作口訣：畫「根號線」標 r1、r2，再按 a 的正負標記區間號性，一眼讀出解集與是否包含端點（看 ≥ 或 >）。"
                .to_string(),
        ),
        rich_content: Some(vec![
            text(
                "想在二次題型穩拿分，別只背公式，要把「判別式、頂點、號性圖」三件武器合成一套流程。以下把高頻題型拆解為可操作的步驟，特別適用於選擇題與短題。",
            ),
            subheading("一、核心骨架（一定要內化）"),
            text("標準式：f(x)=ax²+bx+c（a≠0）"),
            text("判別式：Δ=b²−4ac（決定根的性質）"),
            text("Δ>0 兩相異實根；Δ=0 一重根；Δ<0 無實根"),
            text("頂點與對稱軸："),
            text("對稱軸 x=−b/(2a)"),
            text("頂點最值 fmin/max=f(−b/2a)"),
            text("配方法：f(x)=a(x−h)²+k，其中 h=−b/(2a), k=f(h)"),
            text("根與係數（Viète）："),
            text("根和 r₁+r₂=−b/a；根積 r₁r₂=c/a"),
            subheading("二、三大解題引擎（考場通用流程）"),
            text("判別式法（交點/根數/恆成立）"),
            text("「兩交點/相切/不相交」：直線代入二次，得二次方程，以 Δ 判斷數目。"),
            text("「恆正/恆負」："),
            text("對所有 x，f(x)>0 ⇔ a>0 且 Δ<0"),
            text("對所有 x，f(x)≥0 ⇔ a>0 且 Δ≤0"),
            text("對所有 x，f(x)<0 ⇔ a<0 且 Δ<0"),
            text("對所有 x，f(x)≤0 ⇔ a<0 且 Δ≤0"),
            text("「至少一實根」：Δ≥0；「重根」：Δ=0"),
            subheading("圖像號性法（不等式最速判）"),
            text("若 Δ>0，設 r₁<r₂："),
            text("a>0：外正內負（x<r₁ 或 x>r₂ 時 f>0；r₁<x<r₂ 時 f<0）"),
            text("a<0：外負內正（反之）"),
            text("若 Δ=0："),
            text("a>0：全域 ≥0，等號在重根"),
            text("a<0：全域 ≤0，等號在重根"),
            text("若 Δ<0：f 的號性與 a 相同（全域同號）"),
            image(
                "/main-dashboard.png",
                "二次函數圖像分析圖解，展示判別式、頂點與號性圖的關係。",
                "Quadratic Function Graph Analysis",
            ),
            subheading("頂點最值法（範圍/參數優化）"),
            text("求最小/最大值：直接算 h=−b/2a、k=f(h)，a>0 取最小值 k；a<0 取最大值 k。"),
            text("轉化不等式："),
            text("令 f(x)=a(x−h)²+k，則"),
            text("a>0：f(x)≥k，f(x)∈[k, +∞)"),
            text("a<0：f(x)≤k，f(x)∈(−∞, k]"),
            subheading("參數題常見套路"),
            text("使 f(x)≥m 對所有 x：先求最小值 k，令 k≥m"),
            text("使方程 f(x)=k 有兩實根：令 Δk>0（把 c 改為 c−k 再計 Δ）"),
            subheading("三、HKDSE 高頻題型與模板語句"),
            text("與直線/圓的關係（最常見）"),
            text("直線 y=mx+c 與拋物線 y=ax²+bx+d 相交：代入得 ax²+(b−m)x+(d−c)=0，以 Δ 判"),
            text("要「切線斜率 m」：令 Δ=0 解 m"),
            subheading("根位置判斷（在某區間內）"),
            text(
                "要兩根皆大於 p（且 a>0 時最易）：檢 f(p)>0 且 頂點 h>p；或作新變量 t=x−p，轉化為「兩根皆正」以號性圖判定",
            ),
            text("要一根在 (p,q) 內：可檢 f(p)·f(q)<0（介值與號性）"),
            subheading("參數不等式（MC 常用秒殺）"),
            text("f(x)>0 對所有 x：a>0 且 Δ<0"),
            text("f(x)≥0 對所有 x：a>0 且 Δ≤0"),
            text("f(x) 在 [L,U]：配方求 k，再以 a 的正負確定範圍端點"),
            quote(
                "操作口訣：畫「根號線」標 r₁、r₂，再按 a 的正負標記區間號性，一眼讀出解集與是否包含端點（看 ≥ 或 >）。",
                "資深DSE數學導師",
            ),
        ]),
    }
}

fn private_tutoring() -> PostContent {
    PostContent {
        slug: "private-tutoring-hkdse-booster".to_string(),
        title: "私人補習，真係DSE嘅助推器｜心得blog".to_string(),
        date: "2025-01-15".to_string(),
        authors: strings(&["Examify Team"]),
        // The detail surface keeps the short tag list; the preview carries
        // the full discovery set.
        tags: strings(&["Education", "HKDSE", "Tutoring", "Featured"]),
        image: "/learning.avif".to_string(),
        featured: true,
        links: Some(examify_links()),
        excerpt: Some(
            "深入探討私人補習如何成為HKDSE考試的關鍵助推器，提供實用的選擇指南和學習策略。"
                .to_string(),
        ),
        content: Some(
            "講真，香港教育節奏快、競爭大，校內老師要照顧成班人，要逐個執細位好難。到咗HKDSE呢段關鍵期，私人補習就好似幫你開咗「得分後台」：一對一對症下藥，唔使再喺大班度捱運氣。"
                .to_string(),
        ),
        others: Some("揀啱導師，搵啱方法，你嘅努力就會變成實打實嘅成績。".to_string()),
        rich_content: Some(vec![
            text(
                "講真，香港教育節奏快、競爭大，校內老師要照顧成班人，要逐個執細位好難。到咗HKDSE呢段關鍵期，私人補習就好似幫你開咗「得分後台」：一對一對症下藥，唔使再喺大班度捱運氣。",
            ),
            subheading("私人補習有幾貼地？"),
            text("私人補習唔係簡單嘅「補課」，而係一套完整嘅學習加速系統。佢嘅優勢可以分為幾個核心層面："),
            text(
                "• 極度針對：導師按你嘅校內進度、弱項同DSE評分準則度身訂做。英文Paper 2會幫你建立「主題句→例證→連接語」專屬模板；中文閱讀就用你易混淆嘅關鍵字做對位訓練；數學按你最常失分嘅題型（概率/統計/幾何）逐個拆。",
            ),
            text(
                "• 即時回饋：寫作現場改、口試即場糾正語調節奏；理科實驗題重點係步驟+數據解讀，導師會用考官口徑去改，避免不必要扣分。",
            ),
            text(
                "• 時間彈性：放學、補課、活動表逼爆？私人補習可以夜晚Zoom、周末面授、甚至考前密集，真係配合香港學生嘅生活節奏。",
            ),
            text(
                "• 數據化進步：唔係「操多就得」，而係用Past Paper記錄命中率、錯題類型同用時，清楚見到「由3→4→5」嘅梯級。",
            ),
            text("• SBA/校本支援：題材構思、資料整理、表達排練一條龍，避免臨尾爆煲。"),
            subheading("點解唔揀大班，偏要私人？"),
            text("大班補習有佢嘅優點，但係私人補習提供咗更精準嘅學習體驗："),
            text(
                "• 大班有氣氛但節奏一刀切；私人補習可以用你習慣嘅語言（粵/英/普）講解，補返你學校冇時間講嘅「為何如此」。",
            ),
            text("• 省通勤成本：唔駛周圍撲堂，專注度更高；每分鐘都用喺你弱點上，CP值其實更高。"),
            image(
                "/main-dashboard.png",
                "私人補習提供個性化學習體驗，針對每個學生的具體需求制定學習計劃。",
                "Personalized Learning Dashboard",
            ),
            subheading("揀私人導師清單（超實用！）"),
            text("揀啱導師係成功嘅關鍵，以下係實用嘅選擇指南："),
            text("• 要求試改：先畀一篇作文/一份數學卷，睇佢點改、點解釋、畀唔畀到可複製框架。"),
            text("• 睇證據唔聽神話：過往學生的前後對比、真實腳本/卷面，而唔係只曬獎狀。"),
            text("• 合約清晰：堂數、改功課次數、臨考加課安排寫明白。"),
            text("• 避雷訊號：只派筆記唔改功課；話「包5**」；成堂吹水；無跟進紀錄。"),
            quote(
                "私人補習唔係神藥，但係最貼地嘅提速器：用你聽得入耳嘅方法，針對你拎得返嘅分，建立可複製嘅答題流程同穩定臨場節奏。",
                "資深DSE導師",
            ),
            subheading("最後想講"),
            text(
                "DSE唔靠彩數；當你有清晰地圖、每日小步進，5、5*甚至5**都變成有跡可尋。揀啱導師，搵啱方法，你嘅努力就會變成實打實嘅成績。",
            ),
            text(
                "記住，私人補習係投資，唔係消費。揀啱導師，配合你嘅學習風格同目標，DSE之路就會變得更加清晰同有效率。",
            ),
        ]),
    }
}

fn chatjupas() -> PostContent {
    PostContent {
        slug: "chatjupas-whatsapp-ai".to_string(),
        title: "ChatJupas神器 喺WhatsApp度同你即刻對話，拎齊晒升學資料！📚".to_string(),
        date: "2025-08-01".to_string(),
        authors: strings(&["Nardo", "Bolly"]),
        tags: strings(&["AI Technology", "Trending", "Featured"]),
        image: "/learning.avif".to_string(),
        featured: true,
        links: Some(PostLinks {
            social_media: Some(SocialLinks {
                instagram: Some(
                    "https://www.instagram.com/p/DLzHXFNzSrk/?igsh=dTRtd2psOWd1NHd1".to_string(),
                ),
                threads: Some("https://www.threads.net/@examify.hk/post/CxYz1234567".to_string()),
                ..Default::default()
            }),
            external: Some(ExternalLinks {
                website: Some("https://examify.pro".to_string()),
                ..Default::default()
            }),
            internal: Some(InternalLinks {
                related_post: Some("social-media-relationships-sales".to_string()),
                ..Default::default()
            }),
            position: Some(PanelPosition::Middle),
            custom_position: None,
        }),
        excerpt: Some(
            "Discover how ChatJupas AI on WhatsApp can help students get all the necessary information for university applications instantly."
                .to_string(),
        ),
        content: Some(
            "This is some demo content for the featured blog post. It talks about how ChatJupas AI on WhatsApp can help students get all the necessary information for university applications instantly. This tool aims to simplify the JUPAS application process and provide personalized guidance."
                .to_string(),
        ),
        others: Some(
            "Additional demo content for the featured post. This section can contain more detailed information, tips, or related content that complements the main article."
                .to_string(),
        ),
        rich_content: Some(vec![
            text("Purple clouds drifted lazily over the silent city as a cat pondered the meaning of breakfast."),
            subheading("Unexpected Adventures Await"),
            text("Beneath the old oak tree, a group of squirrels debated the merits of acorn storage versus immediate consumption."),
            image(
                "/main-dashboard.png",
                "ChatJupas AI interface showing the intuitive dashboard design that helps students navigate university applications with ease.",
                "ChatJupas AI Dashboard Interface",
            ),
            text("A single red balloon escaped the grasp of a child, floating upward into the unknown with dreams of distant lands."),
            quote(
                "Sometimes, the smallest pebble can cause the largest ripple in the pond of life.",
                "Dr. Sarah Chen, Education Technology Expert",
            ),
            subheading("Whimsical Possibilities"),
            text("On Tuesdays, the library whispers secrets to those who listen closely between the stacks of forgotten books."),
            image(
                "/english-dashboard.png",
                "Students can access comprehensive information about English programmes through the intuitive ChatJupas interface.",
                "English Programme Dashboard",
            ),
            text("Rain tapped gently on the window as a dog dreamed of chasing butterflies through endless fields."),
            subheading("A Glimpse Into Tomorrow"),
            text("With every sunrise, a new story begins, waiting for someone curious enough to turn the first page."),
            image(
                "/physics-dashboard.png",
                "Specialized dashboard for science and physics programmes, demonstrating the platform's versatility across different academic disciplines.",
                "Physics Programme Dashboard",
            ),
            text("In the heart of the city, laughter echoed as strangers became friends over cups of steaming tea."),
        ]),
    }
}

fn social_media_sales() -> PostContent {
    PostContent {
        slug: "social-media-relationships-sales".to_string(),
        title: "Leveraging Social Media to Build Relationships and Drive Sales".to_string(),
        date: "2025-07-24".to_string(),
        authors: strings(&["Arthur"]),
        tags: strings(&["Business"]),
        image: "/main-dashboard.png".to_string(),
        featured: false,
        links: Some(PostLinks {
            social_media: Some(SocialLinks {
                linkedin: Some("https://www.linkedin.com/posts/activity-123456789".to_string()),
                twitter: Some("https://twitter.com/username/status/123456789".to_string()),
                ..Default::default()
            }),
            external: Some(ExternalLinks {
                article: Some("https://hbr.org/2025/social-media-marketing".to_string()),
                resource: Some("https://buffer.com/social-media-guide".to_string()),
                ..Default::default()
            }),
            internal: None,
            position: Some(PanelPosition::Middle),
            custom_position: None,
        }),
        excerpt: Some(
            "Explore strategies for using social media platforms to foster meaningful connections with your audience."
                .to_string(),
        ),
        content: Some(
            "Explore strategies for using social media platforms to foster meaningful connections with your audience, which can ultimately lead to increased sales and brand loyalty. This post delves into various social media marketing techniques and best practices."
                .to_string(),
        ),
        others: Some(
            "This post delves into various social media marketing techniques and provides actionable insights for businesses looking to improve their online presence."
                .to_string(),
        ),
        rich_content: None,
    }
}

fn crypto_volatility() -> PostContent {
    PostContent {
        slug: "crypto-volatility-regulatory".to_string(),
        title: "Cryptocurrency Experiences Volatility as Regulatory Concerns Persist".to_string(),
        date: "2025-07-14".to_string(),
        authors: strings(&["Nardo"]),
        tags: strings(&["Business", "Regulation"]),
        image: "/physics-dashboard.png".to_string(),
        featured: false,
        links: Some(PostLinks {
            social_media: None,
            external: Some(ExternalLinks {
                website: Some("https://coinmarketcap.com".to_string()),
                resource: Some("https://www.sec.gov/crypto".to_string()),
                ..Default::default()
            }),
            internal: None,
            position: Some(PanelPosition::Bottom),
            custom_position: None,
        }),
        excerpt: Some(
            "An analysis of the recent fluctuations in the cryptocurrency market and regulatory discussions."
                .to_string(),
        ),
        content: Some(
            "An analysis of the recent fluctuations in the cryptocurrency market and the ongoing discussions around regulatory frameworks that could impact its future. This comprehensive overview examines market trends and policy implications."
                .to_string(),
        ),
        others: Some(
            "Insights into market trends and policy implications for cryptocurrency investors and businesses operating in the digital asset space."
                .to_string(),
        ),
        rich_content: None,
    }
}

fn data_analytics() -> PostContent {
    PostContent {
        slug: "data-analytics-decision-making".to_string(),
        title: "Leveraging Data Analytics for Better Decision-Making in Business".to_string(),
        date: "2025-07-13".to_string(),
        authors: strings(&["Matthew"]),
        tags: strings(&["Business", "Analytics"]),
        image: "/english-dashboard.png".to_string(),
        featured: false,
        links: Some(PostLinks {
            social_media: Some(SocialLinks {
                linkedin: Some("https://www.linkedin.com/posts/activity-987654321".to_string()),
                ..Default::default()
            }),
            external: Some(ExternalLinks {
                download: Some("https://example.com/analytics-guide.pdf".to_string()),
                resource: Some("https://www.tableau.com/learn/articles/data-analytics".to_string()),
                ..Default::default()
            }),
            internal: Some(InternalLinks {
                related_post: Some("crypto-volatility-regulatory".to_string()),
                ..Default::default()
            }),
            // Plain-text record; the index only matters once blocks exist.
            position: Some(PanelPosition::Custom),
            custom_position: Some(3),
        }),
        excerpt: Some(
            "Discover how businesses can harness the power of data analytics to gain actionable insights."
                .to_string(),
        ),
        content: Some(
            "Discover how businesses can harness the power of data analytics to gain actionable insights, optimize operations, and make more informed strategic decisions. This guide provides practical tips for implementing data-driven strategies."
                .to_string(),
        ),
        others: Some(
            "Practical tips for implementing data-driven strategies and building a culture of analytics within your organization."
                .to_string(),
        ),
        rich_content: None,
    }
}
