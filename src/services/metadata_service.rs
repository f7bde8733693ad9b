use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{FilterMetadata, Product};

/// The most frequent words are assumed to be filler and dropped.
pub const SKIPPED_COMMON_WORDS: usize = 5;
pub const COMMON_WORDS_LIMIT: usize = 10;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("static pattern"));

/// Summarise price bounds, sizes and common description words.
/// An empty catalog yields zero bounds and empty lists.
pub fn summarize(products: &[Product]) -> FilterMetadata {
    if products.is_empty() {
        return FilterMetadata::default();
    }
    let (min_price, max_price) = price_bounds(products);
    FilterMetadata {
        min_price,
        max_price,
        sizes: distinct_sizes(products),
        common_words: common_words(products.iter().filter_map(|p| p.description.as_deref())),
    }
}

fn price_bounds(products: &[Product]) -> (f64, f64) {
    products
        .iter()
        .map(|p| p.price)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), price| {
            (lo.min(price), hi.max(price))
        })
}

/// Union of every size token, first-seen order.
fn distinct_sizes(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .flat_map(|p| p.sizes())
        .filter(|s| seen.insert(s.as_str()))
        .cloned()
        .collect()
}

/// Rank lower-cased words by frequency, skip the top few and keep the next
/// batch. Ties keep first-occurrence order.
pub fn common_words<'a>(descriptions: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for description in descriptions.filter(|d| !d.trim().is_empty()) {
        let lower = description.to_lowercase();
        for word in NON_WORD.split(&lower).filter(|w| !w.is_empty()) {
            match index.get(word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }
    }

    // sort_by is stable, which preserves first-occurrence order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .skip(SKIPPED_COMMON_WORDS)
        .take(COMMON_WORDS_LIMIT)
        .map(|(word, _)| word)
        .collect()
}
