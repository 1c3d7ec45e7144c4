use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlogPost, Category, CategoryResult, ReadabilityDetails, ReadingGrade};
use crate::readability::flesch_reading_ease;
use crate::text;

/// Transition words and phrases, matched as whole words with ASCII case
/// folding. Word boundaries are ASCII too, so "éalso" still counts.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "additionally",
    "consequently",
    "meanwhile",
    "nevertheless",
    "finally",
    "firstly",
    "also",
    "indeed",
    "in fact",
    "for example",
    "for instance",
    "in addition",
    "in conclusion",
    "on the other hand",
    "similarly",
];

static TRANSITION_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TRANSITION_WORDS
        .iter()
        .map(|word| {
            let pattern = format!(r"(?i-u)\b{}\b", regex::escape(word));
            Regex::new(&pattern).expect("valid regex")
        })
        .collect()
});

const MAX_WORDS_PER_SENTENCE: f64 = 20.0;

pub fn analyze(post: &BlogPost) -> CategoryResult {
    let content = post.content.as_str();
    if content.is_empty() {
        return CategoryResult::new(
            Category::Readability,
            0,
            vec!["No content to analyze readability".to_string()],
            ReadabilityDetails {
                transition_words: 0,
                transition_density: text::format_percent(0.0),
                flesch_score: 0.0,
                flesch_grade: ReadingGrade::NoContent,
                avg_words_per_sentence: "0.0".to_string(),
                avg_syllables_per_word: 0.0,
                total_words: 0,
                total_sentences: 0,
            },
        );
    }

    let mut score = 0;
    let mut issues = Vec::new();

    let stripped = text::strip_tags(content);
    let plain = stripped.trim();
    let sentences = text::sentences(plain).len();
    let words = text::words(plain).len();

    let flesch = flesch_reading_ease(plain);
    if flesch.score >= 60.0 {
        score += 2;
    } else if flesch.score >= 30.0 {
        score += 1;
        issues.push(format!(
            "Content could be easier to read (Flesch score: {})",
            text::to_fixed(flesch.score, 1)
        ));
    } else {
        issues.push(format!(
            "Content is very difficult to read (Flesch score: {})",
            text::to_fixed(flesch.score, 1)
        ));
    }

    let transition_words = count_transition_words(plain);
    let transition_density = text::percentage(transition_words, words);
    if transition_density >= 0.5 {
        score += 2;
    } else if transition_density >= 0.2 {
        score += 1;
        issues.push("Use more transition words for better flow".to_string());
    } else {
        issues.push("Add transition words to improve readability".to_string());
    }

    let avg_words_per_sentence = if sentences > 0 {
        words as f64 / sentences as f64
    } else {
        0.0
    };
    if avg_words_per_sentence <= MAX_WORDS_PER_SENTENCE {
        score += 1;
    } else {
        issues.push("Sentences are too long - aim for under 20 words per sentence".to_string());
    }

    CategoryResult::new(
        Category::Readability,
        score,
        issues,
        ReadabilityDetails {
            transition_words,
            transition_density: text::format_percent(transition_density),
            flesch_score: flesch.score,
            flesch_grade: flesch.grade,
            avg_words_per_sentence: text::to_fixed(avg_words_per_sentence, 1),
            avg_syllables_per_word: flesch.avg_syllables_per_word,
            total_words: words,
            total_sentences: sentences,
        },
    )
}

/// Total whole-word occurrences of every transition word in `text`.
pub fn count_transition_words(text: &str) -> usize {
    TRANSITION_RES
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum()
}
