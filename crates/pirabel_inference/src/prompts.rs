use pirabel_core::UserPlan;

/// Characters of page HTML embedded in the audit instruction. Anything past
/// this is cut, not summarized.
pub const HTML_SNAPSHOT_LIMIT: usize = 10_000;

pub const KEYWORD_COUNT: usize = 15;

pub const FAQ_ITEMS: usize = 10;

pub fn truncate_snapshot(html: &str) -> &str {
    match html.char_indices().nth(HTML_SNAPSHOT_LIMIT) {
        Some((cut, _)) => &html[..cut],
        None => html,
    }
}

pub fn audit(url: &str, html: &str) -> String {
    format!(
        "Act as a Senior SEO Engineer. Analyze the following HTML from {url}:\n\
         {html}\n\
         Perform a full technical audit including:\n\
         - Metadata quality (Title, Description, Canonical)\n\
         - Heading hierarchy and semantics\n\
         - Core Web Vitals (simulated/estimated based on structure)\n\
         - Security headers\n\
         - SSL certificate expiry information if available\n\
         - 20 actionable recommendations with impact scores (0-100)\n\
         - SEO score (0-100)",
        url = url,
        html = truncate_snapshot(html),
    )
}

pub fn keyword_set(seed: &str) -> String {
    format!(
        "Act as SEMrush Keyword Magic Tool. Generate {count} high-value keywords related to \"{seed}\".\n\
         Provide real-world estimated search volume, Keyword Difficulty (KD%), CPC in USD, and User Intent \
         (Informational, Commercial, Transactional or Navigational).",
        count = KEYWORD_COUNT,
        seed = seed.trim(),
    )
}

pub fn article(topic: &str, plan: UserPlan) -> String {
    format!(
        "Act as an Elite SEO Content Architect. Write a {words}-word definitive guide about \"{topic}\".\n\
         Structure it with high-impact H2 and H3 tags.\n\
         Include internal link placeholders, semantic clusters, and a FAQ section of {faq} items.\n\
         Use HTML format for the content. Output as JSON.",
        words = plan.article_word_count(),
        topic = topic.trim(),
        faq = FAQ_ITEMS,
    )
}
