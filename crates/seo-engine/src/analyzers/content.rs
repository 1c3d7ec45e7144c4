use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlogPost, Category, CategoryResult, ContentDetails};
use crate::text;

/// Paragraph boundaries: closing `</p>` or any `<br>` variant.
static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p>|<br\s*/?>").expect("valid regex"));

const TARGET_WORDS: usize = 600;
const LONG_PARAGRAPH_WORDS: usize = 150;

pub fn analyze(post: &BlogPost) -> CategoryResult {
    let content = post.content.as_str();
    if content.is_empty() {
        return CategoryResult::new(
            Category::Content,
            0,
            vec!["No content provided".to_string()],
            ContentDetails {
                word_count: 0,
                paragraphs: 0,
                sentences: 0,
                avg_sentence_length: "0.0".to_string(),
            },
        );
    }

    let mut score = 0;
    let mut issues = Vec::new();

    let plain = text::strip_tags(content);
    let word_count = text::words(plain.trim()).len();

    score += match word_count {
        n if n >= 1000 => 12,
        n if n >= TARGET_WORDS => 9,
        n if n >= 300 => 6,
        n => {
            issues.push(format!(
                "Content too short ({n} words). Aim for at least {TARGET_WORDS}."
            ));
            3
        }
    };

    let paragraphs: Vec<&str> = PARAGRAPH_BREAK_RE
        .split(content)
        .filter(|p| !p.trim().is_empty())
        .collect();
    let long_paragraphs = paragraphs
        .iter()
        .filter(|p| text::raw_split_count(&text::strip_tags(p)) > LONG_PARAGRAPH_WORDS)
        .count();
    if long_paragraphs == 0 {
        score += 4;
    } else {
        issues.push(format!(
            "{long_paragraphs} paragraphs are too long (>{LONG_PARAGRAPH_WORDS} words)"
        ));
        score += 2;
    }

    let sentences = text::sentences(&plain).len();
    let avg_sentence_length = if sentences > 0 {
        word_count as f64 / sentences as f64
    } else {
        0.0
    };
    if avg_sentence_length <= 20.0 {
        score += 4;
    } else if avg_sentence_length <= 25.0 {
        score += 2;
        issues.push("Some sentences are too long. Keep average under 20 words.".to_string());
    } else {
        issues.push("Sentences are too long. Reduce complexity.".to_string());
    }

    CategoryResult::new(
        Category::Content,
        score,
        issues,
        ContentDetails {
            word_count,
            paragraphs: paragraphs.len(),
            sentences,
            avg_sentence_length: text::to_fixed(avg_sentence_length, 1),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_content(content: &str) -> CategoryResult {
        analyze(&BlogPost {
            content: content.to_string(),
            ..Default::default()
        })
    }

    fn details(result: &CategoryResult) -> &ContentDetails {
        match &result.details {
            crate::model::CategoryDetails::Content(d) => d,
            other => panic!("unexpected details: {other:?}"),
        }
    }

    /// `n` paragraphs of ten words split into two five-word sentences.
    fn paragraphs(n: usize) -> String {
        "<p>One two three four five. Six seven eight nine ten.</p>".repeat(n)
    }

    #[test]
    fn empty_content() {
        let result = analyze_content("");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec!["No content provided"]);
        assert_eq!(details(&result).word_count, 0);
    }

    #[test]
    fn long_well_formed_content_gets_full_marks() {
        let result = analyze_content(&paragraphs(100));
        assert_eq!(details(&result).word_count, 1000);
        assert_eq!(details(&result).paragraphs, 100);
        assert_eq!(details(&result).sentences, 200);
        assert_eq!(details(&result).avg_sentence_length, "5.0");
        assert_eq!(result.score, 20);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn average_sentence_length_rounds_halves_up() {
        // 5 words over 4 sentences = 1.25
        let result = analyze_content("<p>One. Two. Three. Four five.</p>");
        assert_eq!(details(&result).sentences, 4);
        assert_eq!(details(&result).avg_sentence_length, "1.3");
    }

    #[test]
    fn length_bands() {
        assert_eq!(analyze_content(&paragraphs(60)).score, 9 + 4 + 4);
        assert_eq!(analyze_content(&paragraphs(30)).score, 6 + 4 + 4);

        let short = analyze_content(&paragraphs(5));
        assert_eq!(short.score, 3 + 4 + 4);
        assert_eq!(
            short.issues,
            vec!["Content too short (50 words). Aim for at least 600."]
        );
    }

    #[test]
    fn long_paragraphs_are_counted() {
        let long = format!("<p>{}.</p>", "word ".repeat(160));
        let content = format!("{long}{long}<br/>{}", paragraphs(2));
        let result = analyze_content(&content);
        assert!(result
            .issues
            .contains(&"2 paragraphs are too long (>150 words)".to_string()));
    }

    #[test]
    fn sentence_length_bands() {
        let medium = format!("<p>{}.</p>", "word ".repeat(22));
        let result = analyze_content(&medium);
        assert!(result
            .issues
            .contains(&"Some sentences are too long. Keep average under 20 words.".to_string()));

        let long = format!("<p>{}.</p>", "word ".repeat(40));
        let result = analyze_content(&long);
        assert!(result
            .issues
            .contains(&"Sentences are too long. Reduce complexity.".to_string()));
        assert_eq!(result.score, 3 + 4);
    }

    #[test]
    fn br_variants_split_paragraphs() {
        let result = analyze_content("one<br>two<BR/>three<br />four");
        assert_eq!(details(&result).paragraphs, 4);
    }
}
