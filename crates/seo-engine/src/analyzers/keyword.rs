use crate::model::{BlogPost, Category, CategoryResult, KeywordDetails};
use crate::text;

/// The keyword must start within this many characters of the title.
const TITLE_PREFIX_CHARS: usize = 30;
const DENSITY_MIN: f64 = 0.5;
const DENSITY_MAX: f64 = 2.5;

pub fn analyze(post: &BlogPost) -> CategoryResult {
    if post.focus_keyword.trim().is_empty() {
        return CategoryResult::new(
            Category::Keyword,
            0,
            vec!["No focus keyword provided".to_string()],
            KeywordDetails::default(),
        );
    }

    let keyword = post.focus_keyword.trim().to_lowercase();
    let title = post.title.to_lowercase();
    let content = post.content.to_lowercase();
    let description = post.meta_description.to_lowercase();
    let slug = post.slug.to_lowercase();

    let mut score = 0;
    let mut issues = Vec::new();

    let title_position = title.find(&keyword).map(|pos| title[..pos].chars().count());
    match title_position {
        Some(pos) if pos <= TITLE_PREFIX_CHARS => score += 8,
        Some(_) => {
            score += 5;
            issues.push("Keyword in title but not at beginning".to_string());
        }
        None => issues.push("Keyword not found in title".to_string()),
    }

    let in_meta = description.contains(&keyword);
    if in_meta {
        score += 5;
    } else {
        issues.push("Keyword not found in meta description".to_string());
    }

    let url_keyword = url_form(&keyword);
    let in_url = slug.contains(&url_keyword);
    if in_url {
        score += 4;
    } else {
        issues.push("Keyword not found in URL".to_string());
    }

    let density = if content.is_empty() {
        issues.push("No content to measure keyword density".to_string());
        None
    } else {
        let density = keyword_density(&content, &keyword);
        if (DENSITY_MIN..=DENSITY_MAX).contains(&density) {
            score += 8;
        } else if density < DENSITY_MIN {
            issues.push(format!(
                "Keyword density too low ({}%)",
                text::to_fixed(density, 2)
            ));
        } else {
            issues.push(format!(
                "Keyword density too high ({}%) - risk of keyword stuffing",
                text::to_fixed(density, 2)
            ));
            score += 3;
        }
        Some(density)
    };

    CategoryResult::new(
        Category::Keyword,
        score,
        issues,
        KeywordDetails {
            in_title: title_position.is_some(),
            in_meta,
            in_url,
            density: density.map_or_else(|| "0%".to_string(), text::format_percent),
        },
    )
}

/// Percentage of whitespace-separated tokens of `content` that are keyword
/// occurrences. Both arguments are expected lower-cased.
///
/// Occurrences are non-overlapping literal matches anywhere in the text, and
/// the token count is taken over the raw markup.
pub fn keyword_density(content: &str, keyword: &str) -> f64 {
    if keyword.is_empty() {
        return 0.0;
    }
    let occurrences = content.matches(keyword).count();
    text::percentage(occurrences, text::raw_split_count(content))
}

/// Keyword as it would appear in a URL slug: whitespace runs become `-`.
fn url_form(keyword: &str) -> String {
    text::words(keyword).join("-")
}
