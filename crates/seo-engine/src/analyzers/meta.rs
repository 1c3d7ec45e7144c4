use std::ops::RangeInclusive;

use crate::model::{BlogPost, Category, CategoryResult, MetaDetails};

/// Length bands for one meta field, in characters.
struct LengthBands {
    ideal: RangeInclusive<usize>,
    acceptable: RangeInclusive<usize>,
    points: (u32, u32, u32),
}

const TITLE_BANDS: LengthBands = LengthBands {
    ideal: 50..=60,
    acceptable: 40..=70,
    points: (8, 5, 2),
};

const DESCRIPTION_BANDS: LengthBands = LengthBands {
    ideal: 150..=160,
    acceptable: 120..=180,
    points: (7, 4, 1),
};

pub fn analyze(post: &BlogPost) -> CategoryResult {
    let mut score = 0;
    let mut issues = Vec::new();

    let title_length = post.title.chars().count();
    score += if title_length == 0 {
        issues.push("No title provided".to_string());
        0
    } else {
        score_length(
            title_length,
            &TITLE_BANDS,
            &mut issues,
            [
                "Title is a bit short",
                "Title is a bit long",
                "Title too short (aim for 50-60 chars)",
                "Title too long - will be truncated in search",
            ],
        )
    };

    let description_length = post.meta_description.chars().count();
    score += if description_length == 0 {
        issues.push("No meta description provided".to_string());
        0
    } else {
        score_length(
            description_length,
            &DESCRIPTION_BANDS,
            &mut issues,
            [
                "Meta description is a bit short",
                "Meta description is a bit long",
                "Meta description too short (aim for 150-160)",
                "Meta description too long - will be truncated",
            ],
        )
    };

    CategoryResult::new(
        Category::Meta,
        score,
        issues,
        MetaDetails {
            title_length,
            description_length,
        },
    )
}

/// Messages are: slightly short, slightly long, too short, too long.
fn score_length(
    length: usize,
    bands: &LengthBands,
    issues: &mut Vec<String>,
    messages: [&str; 4],
) -> u32 {
    let (ideal, acceptable, fallback) = bands.points;
    if bands.ideal.contains(&length) {
        return ideal;
    }
    if bands.acceptable.contains(&length) {
        let message = if length < *bands.ideal.start() {
            messages[0]
        } else {
            messages[1]
        };
        issues.push(message.to_string());
        return acceptable;
    }
    let message = if length < *bands.acceptable.start() {
        messages[2]
    } else {
        messages[3]
    };
    issues.push(message.to_string());
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_lengths(title: usize, description: usize) -> CategoryResult {
        analyze(&BlogPost {
            title: "t".repeat(title),
            meta_description: "d".repeat(description),
            ..Default::default()
        })
    }

    #[test]
    fn ideal_lengths_get_full_marks() {
        for (title, description) in [(50, 150), (55, 155), (60, 160)] {
            let result = analyze_lengths(title, description);
            assert_eq!(result.score, 15);
            assert!(result.issues.is_empty());
        }
    }

    #[test]
    fn acceptable_lengths_get_partial_credit() {
        let result = analyze_lengths(45, 130);
        assert_eq!(result.score, 5 + 4);
        assert_eq!(
            result.issues,
            vec!["Title is a bit short", "Meta description is a bit short"]
        );

        let result = analyze_lengths(70, 180);
        assert_eq!(result.score, 5 + 4);
        assert_eq!(
            result.issues,
            vec!["Title is a bit long", "Meta description is a bit long"]
        );
    }

    #[test]
    fn out_of_band_lengths() {
        let result = analyze_lengths(10, 50);
        assert_eq!(result.score, 2 + 1);
        assert_eq!(
            result.issues,
            vec![
                "Title too short (aim for 50-60 chars)",
                "Meta description too short (aim for 150-160)"
            ]
        );

        let result = analyze_lengths(71, 181);
        assert_eq!(result.score, 2 + 1);
        assert_eq!(
            result.issues,
            vec![
                "Title too long - will be truncated in search",
                "Meta description too long - will be truncated"
            ]
        );
    }

    #[test]
    fn empty_fields_score_zero() {
        let result = analyze_lengths(0, 0);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.issues,
            vec!["No title provided", "No meta description provided"]
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let result = analyze(&BlogPost {
            title: "é".repeat(55),
            ..Default::default()
        });
        match result.details {
            crate::model::CategoryDetails::Meta(d) => assert_eq!(d.title_length, 55),
            other => panic!("unexpected details: {other:?}"),
        }
        assert_eq!(result.score, 8);
    }
}
