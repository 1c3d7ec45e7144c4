/// Publish-time SEO service wrapping [`SeoScoreGenerator`].
///
/// Adds metadata (word count, reading time, slug), keyword suggestions and a
/// few standalone helpers used by the editor. This is the only layer that
/// absorbs unexpected engine failures: a panic inside the generator becomes
/// an `{error, message}` report instead of unwinding into the caller.
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::analyzers;
use crate::error::EngineError;
use crate::model::{AnalysisResult, BlogPost, CategoryResult, FleschResult};
use crate::readability::flesch_reading_ease;
use crate::scorer::SeoScoreGenerator;
use crate::text;

const WORDS_PER_MINUTE: usize = 200;
const MAX_SUGGESTIONS: usize = 10;

static SLUG_INVALID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid regex"));
static SLUG_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishMetadata {
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub analyzed_at: String,
    pub word_count: usize,
    /// Minutes at 200 words per minute, rounded up.
    pub reading_time: usize,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishAnalysis {
    pub seo_score: AnalysisResult,
    pub metadata: PublishMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub message: String,
}

/// Result of [`BlogSeoService::analyze_blog_before_publish`].
///
/// Serializes to either the analysis or the failure object, untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishReport {
    Completed(PublishAnalysis),
    Failed(AnalysisFailure),
}

impl PublishReport {
    pub fn analysis(&self) -> Option<&PublishAnalysis> {
        match self {
            PublishReport::Completed(analysis) => Some(analysis),
            PublishReport::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub word: String,
    pub count: usize,
}

/// Flesch result plus the counts it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleschReport {
    #[serde(flatten)]
    pub flesch: FleschResult,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Rounded to one decimal; 0 without sentences.
    pub avg_words_per_sentence: f64,
}

/// Writing guidance for a kind of post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeGuidance {
    pub min_words: usize,
    pub max_words: usize,
    pub recommended_sections: &'static [&'static str],
    pub seo_tips: &'static [&'static str],
}

const BLOG_GUIDANCE: ContentTypeGuidance = ContentTypeGuidance {
    min_words: 600,
    max_words: 2500,
    recommended_sections: &["Introduction", "Main Content", "Conclusion", "Call to Action"],
    seo_tips: &[
        "Include your focus keyword in the first paragraph",
        "Use H2 and H3 tags for section headers",
        "Add internal and external links",
        "Include relevant images with alt text",
        "End with a call to action",
    ],
};

const TUTORIAL_GUIDANCE: ContentTypeGuidance = ContentTypeGuidance {
    min_words: 800,
    max_words: 3000,
    recommended_sections: &["Overview", "Prerequisites", "Step-by-step Guide", "Conclusion"],
    seo_tips: &[
        "Use numbered lists for steps",
        "Include code examples if applicable",
        "Add screenshots or diagrams",
        "Link to related tutorials",
        "Include a summary at the end",
    ],
};

const REVIEW_GUIDANCE: ContentTypeGuidance = ContentTypeGuidance {
    min_words: 500,
    max_words: 2000,
    recommended_sections: &["Product Overview", "Features", "Pros and Cons", "Verdict"],
    seo_tips: &[
        "Include product specifications",
        "Add comparison with alternatives",
        "Use schema markup for ratings",
        "Include affiliate disclaimers if applicable",
        "Add purchase links",
    ],
};

#[derive(Debug, Clone, Default)]
pub struct BlogSeoService {
    generator: SeoScoreGenerator,
}

impl BlogSeoService {
    pub fn new(generator: SeoScoreGenerator) -> Self {
        Self { generator }
    }

    /// Score a post and attach publish metadata, stamped with the current time.
    pub fn analyze_blog_before_publish(&self, post: &BlogPost) -> PublishReport {
        match self.analyze_at(post, Utc::now()) {
            Ok(analysis) => {
                debug!(
                    overall_score = analysis.seo_score.overall_score,
                    passed = analysis.seo_score.passed,
                    "SEO analysis completed"
                );
                PublishReport::Completed(analysis)
            }
            Err(e) => {
                error!(error = %e, "SEO analysis failed");
                PublishReport::Failed(AnalysisFailure {
                    error: "SEO analysis failed".to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Same as [`Self::analyze_blog_before_publish`] with an explicit
    /// timestamp, returning the failure as an error.
    pub fn analyze_at(
        &self,
        post: &BlogPost,
        analyzed_at: DateTime<Utc>,
    ) -> Result<PublishAnalysis, EngineError> {
        let seo_score = panic::catch_unwind(AssertUnwindSafe(|| {
            self.generator.analyze_blog_post(post)
        }))
        .map_err(|payload| EngineError::Aborted(panic_message(payload.as_ref())))?;

        Ok(PublishAnalysis {
            seo_score,
            metadata: PublishMetadata {
                analyzed_at: analyzed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                word_count: word_count(&post.content),
                reading_time: calculate_reading_time(&post.content),
                slug: generate_slug(&post.title),
            },
        })
    }

    /// Run the readability analyzer on content alone.
    pub fn readability_analysis(&self, content: &str) -> CategoryResult {
        analyzers::readability::analyze(&BlogPost {
            content: content.to_string(),
            ..Default::default()
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// URL slug for a title, e.g. "Hello, World! 2024" -> "hello-world-2024".
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = SLUG_INVALID_RE.replace_all(lowered.trim(), "");
    let hyphenated = SLUG_SEPARATOR_RE.replace_all(&cleaned, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Words in the tag-stripped content.
pub fn word_count(content: &str) -> usize {
    text::word_count(content)
}

/// Reading time in whole minutes, rounded up. Empty content reads in 0 minutes.
pub fn calculate_reading_time(content: &str) -> usize {
    word_count(content).div_ceil(WORDS_PER_MINUTE)
}

/// Most frequent words of the title and content, at most ten.
///
/// Words must be longer than three characters and not purely numeric. Words
/// with equal counts keep the order in which they first appear.
pub fn extract_keyword_suggestions(content: &str, title: &str) -> Vec<KeywordSuggestion> {
    if content.is_empty() && title.is_empty() {
        return Vec::new();
    }

    let combined = format!("{title} {content}").to_lowercase();
    let plain = text::strip_tags(&combined);

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in text::words(&plain) {
        if word.chars().count() <= 3 || word.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut suggestions: Vec<KeywordSuggestion> = order
        .into_iter()
        .map(|word| KeywordSuggestion {
            word: word.to_string(),
            count: counts[word],
        })
        .collect();
    suggestions.sort_by(|a, b| b.count.cmp(&a.count));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Guidance for `content_type` ("blog", "tutorial" or "review"); anything
/// else gets the blog guidance.
pub fn content_type_guidance(content_type: &str) -> ContentTypeGuidance {
    match content_type {
        "tutorial" => TUTORIAL_GUIDANCE,
        "review" => REVIEW_GUIDANCE,
        _ => BLOG_GUIDANCE,
    }
}

/// Flesch reading ease of HTML content with the counts behind it.
pub fn flesch_report(content: &str) -> FleschReport {
    let stripped = text::strip_tags(content);
    let plain = stripped.trim();
    if plain.is_empty() {
        return FleschReport {
            flesch: FleschResult::no_content(),
            word_count: 0,
            sentence_count: 0,
            avg_words_per_sentence: 0.0,
        };
    }

    let word_count = text::words(plain).len();
    let sentence_count = text::sentences(plain).len();
    let avg_words_per_sentence = if sentence_count > 0 {
        text::to_fixed(word_count as f64 / sentence_count as f64, 1)
            .parse()
            .unwrap_or(0.0)
    } else {
        0.0
    };

    FleschReport {
        flesch: flesch_reading_ease(plain),
        word_count,
        sentence_count,
        avg_words_per_sentence,
    }
}
