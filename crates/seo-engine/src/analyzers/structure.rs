use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlogPost, Category, CategoryResult, StructureDetails};

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>").expect("valid regex"));
static H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>").expect("valid regex"));
static H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h3[^>]*>").expect("valid regex"));
static LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<ul[^>]*>|<ol[^>]*>").expect("valid regex"));

pub fn analyze(post: &BlogPost) -> CategoryResult {
    let content = post.content.as_str();
    if content.is_empty() {
        return CategoryResult::new(
            Category::Structure,
            0,
            vec!["No content to analyze".to_string()],
            StructureDetails {
                h1: 0,
                h2: 0,
                h3: 0,
                lists: 0,
            },
        );
    }

    let mut score = 0;
    let mut issues = Vec::new();

    let h1 = H1_RE.find_iter(content).count();
    match h1 {
        1 => score += 3,
        0 => issues.push("No H1 heading found".to_string()),
        _ => {
            issues.push("Multiple H1 tags found. Use only one.".to_string());
            score += 1;
        }
    }

    let h2 = H2_RE.find_iter(content).count();
    if h2 >= 3 {
        score += 6;
    } else if h2 >= 1 {
        score += 3;
        issues.push("Add more H2 headings for better structure".to_string());
    } else {
        issues.push("No H2 headings found. Add subheadings.".to_string());
    }

    let h3 = H3_RE.find_iter(content).count();
    if h3 > 0 {
        score += 3;
    } else {
        issues.push("Consider adding H3 tags for hierarchy".to_string());
        score += 1;
    }

    let lists = LIST_RE.find_iter(content).count();
    if lists >= 1 {
        score += 3;
    } else {
        issues.push("No lists found. Use bullet/numbered lists for readability".to_string());
    }

    CategoryResult::new(
        Category::Structure,
        score,
        issues,
        StructureDetails { h1, h2, h3, lists },
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

    #[test]
    fn well_structured_content() {
        let result = analyze_content(
            "<h1>Title</h1><h2 id=\"a\">A</h2><H2>B</H2><h2>C</h2><h3>C.1</h3><ol><li>x</li></ol>",
        );
        assert_eq!(result.score, 15);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn missing_headings_and_lists() {
        let result = analyze_content("<p>Just a paragraph.</p>");
        assert_eq!(result.score, 1);
        assert_eq!(
            result.issues,
            vec![
                "No H1 heading found",
                "No H2 headings found. Add subheadings.",
                "Consider adding H3 tags for hierarchy",
                "No lists found. Use bullet/numbered lists for readability",
            ]
        );
    }

    #[test]
    fn multiple_h1_and_few_h2() {
        let result = analyze_content("<h1>a</h1><h1>b</h1><h2>c</h2><ul><li>d</li></ul>");
        assert_eq!(result.score, 1 + 3 + 1 + 3);
        assert!(result
            .issues
            .contains(&"Multiple H1 tags found. Use only one.".to_string()));
        assert!(result
            .issues
            .contains(&"Add more H2 headings for better structure".to_string()));
    }

    #[test]
    fn unterminated_tag_does_not_fail() {
        let result = analyze_content("<h1>Title</h1><h2 Broken heading");
        match result.details {
            crate::model::CategoryDetails::Structure(d) => {
                assert_eq!(d.h1, 1);
                assert_eq!(d.h2, 0);
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn empty_content() {
        let result = analyze_content("");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec!["No content to analyze"]);
    }
}
