//! Shared posts for unit tests.

use crate::model::BlogPost;

/// A post that satisfies every heuristic.
pub fn perfect_post() -> BlogPost {
    let mut content = String::new();
    content.push_str("<h1>Rust testing basics</h1>\n");
    for section in 0..4 {
        content.push_str(&format!("<h2>Part {section} of the plan</h2>\n"));
        if section == 0 {
            content.push_str("<h3>Why it helps</h3>\n");
            content.push_str("<ul><li>fast</li><li>safe</li></ul>\n");
            content.push_str(r#"<img src="/img/a.png" alt="test run">"#);
            content.push_str(r#"<img src="/img/b.png" alt="test tree">"#);
            content.push_str(r#"<img src="/img/c.png" alt="test log">"#);
            content.push('\n');
            content.push_str(concat!(
                r#"<p>See <a href="/posts/one">one</a>, <a href="/posts/two">two</a> "#,
                r##"and <a href="#part-3">three</a>.</p>"##,
            ));
            content.push_str(concat!(
                r#"<p>Read <a href="https://doc.rust-lang.org/book/">the book</a> "#,
                r#"and <a href="https://crates.io/">the crates</a>.</p>"#,
            ));
            content.push('\n');
        }
        for _ in 0..6 {
            content.push_str(
                "<p>Rust testing is fun to do. However, we also keep each test small. \
                 The code runs fast and the team can read it. We write one test for each bug. \
                 Then we run the suite on every push. It is a good habit to keep. \
                 In fact, we like it a lot. Good tests help us ship with less fear.</p>\n",
            );
        }
    }

    BlogPost {
        title: "Rust testing guide: write quick and reliable unit tests".to_string(),
        content,
        meta_description: concat!(
            "Rust testing made simple: learn how to write fast, reliable unit tests, ",
            "organize your test modules, and keep the whole test suite easy to run on each push."
        )
        .to_string(),
        focus_keyword: "Rust testing".to_string(),
        slug: "rust-testing-guide".to_string(),
    }
}
