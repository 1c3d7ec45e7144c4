/// Regex-based text helpers shared by the analyzers.
///
/// Markup is never parsed: tags are whatever `<[^>]*>` matches, so malformed
/// or unterminated tags simply stay in the text instead of raising errors.
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Replace every tag with a single space.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, " ").into_owned()
}

/// Non-empty whitespace-separated words.
pub fn words(text: &str) -> Vec<&str> {
    WHITESPACE_RE.split(text).filter(|w| !w.is_empty()).collect()
}

/// Number of pieces produced by splitting on whitespace runs, counting the
/// empty pieces that leading or trailing whitespace produces.
///
/// Keyword density and paragraph length were tuned against this count.
pub fn raw_split_count(text: &str) -> usize {
    WHITESPACE_RE.split(text).count()
}

/// Sentences delimited by runs of `.`, `!` or `?`, ignoring blank pieces.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Words of the tag-stripped content.
pub fn word_count(html: &str) -> usize {
    words(strip_tags(html).trim()).len()
}

/// `part` as a percentage of `whole`, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point decimal string with `digits` fractional digits.
///
/// Values exactly halfway between two outputs round away from zero
/// (1.25 -> "1.3", 0.125 -> "0.13"); `{:.N}` alone would round those to even.
/// Everything else rounds to nearest on the exact binary value.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let fraction = exact.split_once('.').map_or("", |(_, f)| f);
    let rest = fraction.get(digits..).unwrap_or("");
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');

    if is_tie {
        // magnitude * 10^digits is exactly n + 0.5 here, so the product is exact
        let scale = 10f64.powi(digits as i32);
        let rounded = ((magnitude * scale).floor() + 1.0) / scale;
        format!("{sign}{rounded:.digits$}")
    } else {
        format!("{sign}{magnitude:.digits$}")
    }
}

/// Format a percentage the way details report it, e.g. "1.50%".
pub fn format_percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 2))
}
