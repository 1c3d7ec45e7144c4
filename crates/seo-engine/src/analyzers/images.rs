use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlogPost, Category, CategoryResult, ImageDetails};

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("valid regex"));
static ALT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)alt=["'][^"']+["']"#).expect("valid regex"));

pub fn analyze(post: &BlogPost) -> CategoryResult {
    let content = post.content.as_str();
    if content.is_empty() {
        return CategoryResult::new(
            Category::Images,
            0,
            vec!["No content to analyze images".to_string()],
            ImageDetails {
                total: 0,
                with_alt: 0,
            },
        );
    }

    let mut score = 0;
    let mut issues = Vec::new();

    let images: Vec<&str> = IMG_RE.find_iter(content).map(|m| m.as_str()).collect();
    let total = images.len();
    if total >= 3 {
        score += 4;
    } else if total >= 1 {
        score += 2;
        issues.push("Add more images to improve engagement".to_string());
    } else {
        issues.push("No images found. Add relevant images.".to_string());
    }

    let with_alt = images.iter().filter(|img| ALT_RE.is_match(img)).count();
    if total > 0 {
        let alt_percentage = with_alt as f64 / total as f64 * 100.0;
        if with_alt == total {
            score += 6;
        } else if alt_percentage >= 50.0 {
            score += 3;
            issues.push(format!("{} images missing alt text", total - with_alt));
        } else {
            issues.push("Most images missing alt text".to_string());
            score += 1;
        }
    }

    CategoryResult::new(
        Category::Images,
        score,
        issues,
        ImageDetails { total, with_alt },
    )
}
