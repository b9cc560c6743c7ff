//! Tag post-count aggregation

use super::parser::tags_from_value;
use crate::domain::document::Document;
use std::collections::{HashMap, HashSet};

/// A tag and the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub post_count: usize,
}

/// Count tags across posts.
///
/// Each post counts at most once per tag. The result is in order of first
/// occurrence across all posts' tag tokens.
pub fn count_tags(posts: &[Document]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for post in posts {
        let mut seen: HashSet<&str> = HashSet::new();

        for token in tags_from_value(post.attributes.get("tags")) {
            if !seen.insert(token) {
                continue;
            }

            match index.get(token) {
                Some(&i) => counts[i].post_count += 1,
                None => {
                    index.insert(token.to_string(), counts.len());
                    counts.push(TagCount {
                        name: token.to_string(),
                        post_count: 1,
                    });
                }
            }
        }
    }

    counts
}
