use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlogPost, Category, CategoryResult, LinkDetails};

/// Anchors pointing at a site-relative path or an in-page fragment.
static INTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=["'](/[^"']*|#[^"']*)["']"#).expect("valid regex")
});
static EXTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=["']https?://[^"']*["']"#).expect("valid regex")
});

pub fn analyze(post: &BlogPost) -> CategoryResult {
    let content = post.content.as_str();
    if content.is_empty() {
        return CategoryResult::new(
            Category::Links,
            0,
            vec!["No content to analyze links".to_string()],
            LinkDetails {
                internal: 0,
                external: 0,
            },
        );
    }

    let mut score = 0;
    let mut issues = Vec::new();

    let internal = INTERNAL_LINK_RE.find_iter(content).count();
    if internal >= 3 {
        score += 5;
    } else if internal >= 1 {
        score += 3;
        issues.push("Add more internal links to related content".to_string());
    } else {
        issues.push("No internal links found".to_string());
    }

    let external = EXTERNAL_LINK_RE.find_iter(content).count();
    if external >= 2 {
        score += 5;
    } else if external >= 1 {
        score += 3;
        issues.push("Add more external links to authoritative sources".to_string());
    } else {
        issues.push("No external links found".to_string());
    }

    CategoryResult::new(
        Category::Links,
        score,
        issues,
        LinkDetails { internal, external },
    )
}
