/// Flesch Reading Ease and the syllable heuristic behind it.
///
/// ```text
/// score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
/// ```
///
/// The raw score is clamped to `[0, 100]`; the grade is taken from the raw
/// score so out-of-range texts still land in the outermost grade.
use crate::model::{FleschResult, ReadingGrade};
use crate::text;

const VOWELS: &[u8] = b"aeiouy";

fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Estimate the number of syllables in `word` by counting vowel groups.
///
/// Non-letters are ignored. Returns 0 only when no ASCII letters remain.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<u8> = word
        .to_lowercase()
        .bytes()
        .filter(u8::is_ascii_lowercase)
        .collect();

    match letters.len() {
        0 => return 0,
        1 => return 1,
        _ => {}
    }

    let mut count = 0;
    let mut previous_was_vowel = false;
    for &b in &letters {
        let vowel = is_vowel(b);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    // silent trailing e
    if letters.ends_with(b"e") && count > 1 {
        count -= 1;
    }

    // syllabic -le as in "table"
    let len = letters.len();
    if len >= 3 && letters.ends_with(b"le") && !is_vowel(letters[len - 3]) {
        count += 1;
    }

    count.max(1)
}

/// Compute Flesch Reading Ease for plain text.
pub fn flesch_reading_ease(text: &str) -> FleschResult {
    if text.trim().is_empty() {
        return FleschResult::no_content();
    }

    let sentences = text::sentences(text);
    let words = text::words(text);
    if sentences.is_empty() || words.is_empty() {
        return FleschResult::no_content();
    }

    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let avg_syllables_per_word = total_syllables as f64 / words.len() as f64;

    let score = 206.835 - (1.015 * avg_sentence_length) - (84.6 * avg_syllables_per_word);

    FleschResult {
        score: score.clamp(0.0, 100.0),
        grade: ReadingGrade::from_score(score),
        avg_syllables_per_word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllables_of_common_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("water"), 2);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("Rhythm!"), 1);
    }

    #[test]
    fn syllables_of_short_and_empty_words() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("I."), 1);
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("1234"), 0);
        assert_eq!(count_syllables("--"), 0);
    }

    #[test]
    fn syllables_never_zero_for_letters() {
        for word in ["b", "st", "the", "psst", "e", "ee", "ble", "crwth"] {
            assert!(count_syllables(word) >= 1, "{word}");
        }
    }

    #[test]
    fn flesch_empty_text_has_no_content() {
        assert_eq!(flesch_reading_ease(""), FleschResult::no_content());
        assert_eq!(flesch_reading_ease("   \n\t"), FleschResult::no_content());
        assert_eq!(flesch_reading_ease("..."), FleschResult::no_content());
    }

    #[test]
    fn flesch_matches_formula_inside_range() {
        let result = flesch_reading_ease("Water flows over the yellow garden today.");
        // 7 words, 1 sentence, 12 syllables
        let expected = 206.835 - 1.015 * 7.0 - 84.6 * (12.0 / 7.0);
        assert!((result.score - expected).abs() < 1e-9);
        assert_eq!(result.grade, ReadingGrade::FairlyDifficult);
        assert!((result.avg_syllables_per_word - 12.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn flesch_clamps_high_scores() {
        // one-word sentences of one syllable score above 100
        let result = flesch_reading_ease("Go. Run. Sit. Eat.");
        assert_eq!(result.score, 100.0);
        assert_eq!(result.grade, ReadingGrade::VeryEasy);
    }

    #[test]
    fn flesch_clamps_low_scores() {
        let sentence = "Internationalization organizational responsibilities \
                        unquestionably characterize administrative communication "
            .repeat(12);
        let result = flesch_reading_ease(&sentence);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.grade, ReadingGrade::VeryDifficult);
        assert!(result.avg_syllables_per_word > 4.0);
    }
}
