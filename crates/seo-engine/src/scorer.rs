/// Weighted composite SEO score.
///
/// ```text
/// overall = round( Σ (score / maxScore) × weight )   over the seven categories
/// ```
///
/// Weights sum to 100 by default, so a post that maxes every category scores
/// 100. A post passes at 70 or above.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analyzers;
use crate::model::{AnalysisResult, BlogPost, Category, CategoryResult, Priority, Recommendation};

pub const PASSING_SCORE: u32 = 70;

/// Per-category weights of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub content: f64,
    pub meta: f64,
    pub structure: f64,
    pub links: f64,
    pub images: f64,
    pub readability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: 25.0,
            content: 20.0,
            meta: 15.0,
            structure: 15.0,
            links: 10.0,
            images: 10.0,
            readability: 5.0,
        }
    }
}

impl ScoreWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Keyword => self.keyword,
            Category::Content => self.content,
            Category::Meta => self.meta,
            Category::Structure => self.structure,
            Category::Links => self.links,
            Category::Images => self.images,
            Category::Readability => self.readability,
        }
    }

    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|&c| self.weight(c)).sum()
    }
}

/// Runs every category analyzer over a post and combines the results.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct SeoScoreGenerator {
    weights: ScoreWeights,
}

impl SeoScoreGenerator {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn analyze_blog_post(&self, post: &BlogPost) -> AnalysisResult {
        let category_scores: BTreeMap<Category, CategoryResult> = Category::ALL
            .iter()
            .map(|&category| (category, analyzers::analyze(category, post)))
            .collect();

        let overall_score = self.total_score(&category_scores);
        let recommendations = recommendations(&category_scores);
        let details = category_scores
            .iter()
            .map(|(&category, result)| (category, result.details.clone()))
            .collect();

        AnalysisResult {
            overall_score,
            passed: overall_score >= PASSING_SCORE,
            category_scores,
            recommendations,
            details,
        }
    }

    /// Weighted sum of category ratios, rounded half away from zero and
    /// clamped to 0..=100.
    pub fn total_score(&self, scores: &BTreeMap<Category, CategoryResult>) -> u32 {
        let total: f64 = scores
            .iter()
            .map(|(&category, result)| result.ratio() * self.weights.weight(category))
            .sum();
        total.round().clamp(0.0, 100.0) as u32
    }
}

/// One recommendation per category with issues, high priority first.
///
/// Categories keep their declaration order within a priority.
pub fn recommendations(scores: &BTreeMap<Category, CategoryResult>) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = scores
        .iter()
        .filter(|(_, result)| !result.issues.is_empty())
        .map(|(category, result)| Recommendation {
            category: category.display_name().to_string(),
            priority: Priority::for_percentage(result.percentage),
            issues: result.issues.clone(),
        })
        .collect();
    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::perfect_post;
    use crate::model::{CategoryDetails, ImageDetails, MetaDetails};

    fn result_with(category: Category, score: u32, issue: &str) -> CategoryResult {
        let details: CategoryDetails = match category {
            Category::Images => ImageDetails {
                total: 1,
                with_alt: 0,
            }
            .into(),
            _ => MetaDetails {
                title_length: 0,
                description_length: 0,
            }
            .into(),
        };
        let issues = if issue.is_empty() {
            vec![]
        } else {
            vec![issue.to_string()]
        };
        CategoryResult::new(category, score, issues, details)
    }

    #[test]
    fn default_weights_sum_to_one_hundred() {
        assert_eq!(ScoreWeights::default().total(), 100.0);
    }

    #[test]
    fn empty_post_scores_zero_with_issues_everywhere() {
        let result = SeoScoreGenerator::default().analyze_blog_post(&BlogPost::default());
        assert_eq!(result.overall_score, 0);
        assert!(!result.passed);
        assert_eq!(result.category_scores.len(), 7);
        for category in Category::ALL {
            assert!(
                !result.category_scores[&category].issues.is_empty(),
                "{category} should report an issue"
            );
        }
        assert_eq!(result.recommendations.len(), 7);
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.priority == Priority::High));
    }

    #[test]
    fn perfect_post_passes() {
        let post = perfect_post();
        assert_eq!(post.title.chars().count(), 55);
        assert_eq!(post.meta_description.chars().count(), 155);

        let result = SeoScoreGenerator::default().analyze_blog_post(&post);
        assert!(
            result.overall_score >= 95,
            "score {} recommendations {:?}",
            result.overall_score,
            result.recommendations
        );
        assert!(result.passed);
        for category in Category::ALL {
            let scored = &result.category_scores[&category];
            assert_eq!(scored.score, scored.max_score, "{category}: {:?}", scored.issues);
        }
        assert_eq!(result.overall_score, 100);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn details_mirror_category_details() {
        let result = SeoScoreGenerator::default().analyze_blog_post(&perfect_post());
        for (category, scored) in &result.category_scores {
            assert_eq!(&result.details[category], &scored.details);
        }
    }

    #[test]
    fn recommendations_put_high_priority_first() {
        let mut scores = BTreeMap::new();
        // meta at 60% (medium), images at 40% (high); meta comes first in declaration order
        scores.insert(Category::Meta, result_with(Category::Meta, 9, "Title is a bit short"));
        scores.insert(
            Category::Images,
            result_with(Category::Images, 4, "Most images missing alt text"),
        );
        scores.insert(Category::Links, result_with(Category::Links, 10, ""));

        let recommendations = recommendations(&scores);
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].category, "Images");
        assert_eq!(recommendations[0].priority, Priority::High);
        assert_eq!(recommendations[1].category, "Meta");
        assert_eq!(recommendations[1].priority, Priority::Medium);
        assert_eq!(recommendations[1].issues, vec!["Title is a bit short"]);
    }

    #[test]
    fn total_score_applies_weights_and_rounds() {
        let generator = SeoScoreGenerator::default();
        let mut scores = BTreeMap::new();
        // 3/15 meta = 3 points, 1/10 images = 1 point, 1/5 readability = 1 point
        scores.insert(Category::Meta, result_with(Category::Meta, 3, ""));
        scores.insert(Category::Images, result_with(Category::Images, 1, ""));
        scores.insert(Category::Readability, result_with(Category::Readability, 1, ""));
        assert_eq!(generator.total_score(&scores), 5);

        // 1/25 keyword = 1 point, 1/20 content = 1 point, 1/15 meta = 1 point -> 3
        let mut scores = BTreeMap::new();
        scores.insert(Category::Keyword, result_with(Category::Keyword, 1, ""));
        scores.insert(Category::Content, result_with(Category::Content, 1, ""));
        scores.insert(Category::Meta, result_with(Category::Meta, 1, ""));
        assert_eq!(generator.total_score(&scores), 3);
    }

    #[test]
    fn injected_weights_change_the_composite() {
        let weights = ScoreWeights {
            keyword: 0.0,
            content: 0.0,
            meta: 100.0,
            structure: 0.0,
            links: 0.0,
            images: 0.0,
            readability: 0.0,
        };
        let generator = SeoScoreGenerator::new(weights);
        let post = BlogPost {
            title: "t".repeat(55),
            meta_description: "d".repeat(155),
            ..Default::default()
        };
        let result = generator.analyze_blog_post(&post);
        assert_eq!(result.overall_score, 100);
        assert!(result.passed);
    }
}
