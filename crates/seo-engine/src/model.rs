use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A blog post as submitted for analysis. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub title: String,
    /// Post body as HTML.
    pub content: String,
    pub meta_description: String,
    pub focus_keyword: String,
    pub slug: String,
}

/// One SEO dimension scored by its own analyzer.
///
/// Declaration order is the order categories appear in results and the order
/// recommendations are emitted before priority sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keyword,
    Content,
    Meta,
    Structure,
    Links,
    Images,
    Readability,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Keyword,
        Category::Content,
        Category::Meta,
        Category::Structure,
        Category::Links,
        Category::Images,
        Category::Readability,
    ];

    /// Lower-case key used in JSON maps, e.g. "keyword".
    pub fn key(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Content => "content",
            Category::Meta => "meta",
            Category::Structure => "structure",
            Category::Links => "links",
            Category::Images => "images",
            Category::Readability => "readability",
        }
    }

    /// Capitalized name used in recommendations, e.g. "Keyword".
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::Content => "Content",
            Category::Meta => "Meta",
            Category::Structure => "Structure",
            Category::Links => "Links",
            Category::Images => "Images",
            Category::Readability => "Readability",
        }
    }

    pub fn max_score(self) -> u32 {
        match self {
            Category::Keyword => 25,
            Category::Content => 20,
            Category::Meta => 15,
            Category::Structure => 15,
            Category::Links => 10,
            Category::Images => 10,
            Category::Readability => 5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of a single category analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub issues: Vec<String>,
    pub details: CategoryDetails,
}

impl CategoryResult {
    /// Build a result for `category`, capping `score` at the category maximum.
    pub fn new(
        category: Category,
        score: u32,
        issues: Vec<String>,
        details: impl Into<CategoryDetails>,
    ) -> Self {
        let max_score = category.max_score();
        let score = score.min(max_score);
        Self {
            score,
            max_score,
            percentage: f64::from(score) / f64::from(max_score) * 100.0,
            issues,
            details: details.into(),
        }
    }

    /// Score normalized to `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score)
    }
}

/// Category-specific facts behind a score.
///
/// Serialized without a tag; every variant has field names of its own so the
/// stored JSON reads back into the right variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryDetails {
    Keyword(KeywordDetails),
    Content(ContentDetails),
    Meta(MetaDetails),
    Structure(StructureDetails),
    Links(LinkDetails),
    Images(ImageDetails),
    Readability(ReadabilityDetails),
}

macro_rules! details_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CategoryDetails {
                fn from(details: $ty) -> Self {
                    CategoryDetails::$variant(details)
                }
            }
        )*
    };
}

details_from! {
    Keyword => KeywordDetails,
    Content => ContentDetails,
    Meta => MetaDetails,
    Structure => StructureDetails,
    Links => LinkDetails,
    Images => ImageDetails,
    Readability => ReadabilityDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDetails {
    pub in_title: bool,
    pub in_meta: bool,
    pub in_url: bool,
    /// Percentage with two decimals and a trailing `%`, e.g. "1.50%".
    pub density: String,
}

impl Default for KeywordDetails {
    fn default() -> Self {
        Self {
            in_title: false,
            in_meta: false,
            in_url: false,
            density: "0%".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub word_count: usize,
    pub paragraphs: usize,
    pub sentences: usize,
    /// One decimal, e.g. "14.2".
    pub avg_sentence_length: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDetails {
    pub title_length: usize,
    pub description_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDetails {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub lists: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDetails {
    pub internal: usize,
    pub external: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    pub total: usize,
    pub with_alt: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityDetails {
    pub transition_words: usize,
    pub transition_density: String,
    pub flesch_score: f64,
    pub flesch_grade: ReadingGrade,
    pub avg_words_per_sentence: String,
    pub avg_syllables_per_word: f64,
    pub total_words: usize,
    pub total_sentences: usize,
}

/// Recommendation urgency. Ordering is the sort order of recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Priority for a category scoring `percentage` of its maximum.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < 50.0 {
            Priority::High
        } else {
            Priority::Medium
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Capitalized category name, e.g. "Structure".
    pub category: String,
    pub priority: Priority,
    pub issues: Vec<String>,
}

/// Full result of `SeoScoreGenerator::analyze_blog_post`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub passed: bool,
    pub category_scores: BTreeMap<Category, CategoryResult>,
    pub recommendations: Vec<Recommendation>,
    pub details: BTreeMap<Category, CategoryDetails>,
}

/// Flesch Reading Ease grade label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingGrade {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "No content")]
    NoContent,
}

impl ReadingGrade {
    /// Grade for a raw (unclamped) Flesch score. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ReadingGrade::VeryEasy
        } else if score >= 80.0 {
            ReadingGrade::Easy
        } else if score >= 70.0 {
            ReadingGrade::FairlyEasy
        } else if score >= 60.0 {
            ReadingGrade::Standard
        } else if score >= 50.0 {
            ReadingGrade::FairlyDifficult
        } else if score >= 30.0 {
            ReadingGrade::Difficult
        } else {
            ReadingGrade::VeryDifficult
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleschResult {
    /// Reading ease clamped to `[0, 100]`.
    pub score: f64,
    pub grade: ReadingGrade,
    pub avg_syllables_per_word: f64,
}

impl FleschResult {
    pub fn no_content() -> Self {
        Self {
            score: 0.0,
            grade: ReadingGrade::NoContent,
            avg_syllables_per_word: 0.0,
        }
    }
}
