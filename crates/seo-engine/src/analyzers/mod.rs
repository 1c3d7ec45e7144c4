//! The seven category analyzers.
//!
//! Each analyzer is a total function over a [`BlogPost`]: empty fields and
//! malformed markup produce a low score and an issue, never an error. That lets
//! the generator aggregate all categories unconditionally.

pub mod content;
pub mod images;
pub mod keyword;
pub mod links;
pub mod meta;
pub mod readability;
pub mod structure;

use crate::model::{BlogPost, Category, CategoryResult};

/// Run the analyzer responsible for `category`.
pub fn analyze(category: Category, post: &BlogPost) -> CategoryResult {
    match category {
        Category::Keyword => keyword::analyze(post),
        Category::Content => content::analyze(post),
        Category::Meta => meta::analyze(post),
        Category::Structure => structure::analyze(post),
        Category::Links => links::analyze(post),
        Category::Images => images::analyze(post),
        Category::Readability => readability::analyze(post),
    }
}
