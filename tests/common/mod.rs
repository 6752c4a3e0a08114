//! Shared fixtures for integration tests.

#![allow(dead_code)]

use lodestar::item::IndexableItem;

#[derive(Debug, Clone)]
pub struct ExampleItem {
    pub text: String,
    pub rank: i64,
    pub aliases: Vec<String>,
}

impl ExampleItem {
    pub fn new(text: &str, rank: i64, aliases: &[&str]) -> Self {
        ExampleItem {
            text: text.to_string(),
            rank,
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        }
    }
}

impl IndexableItem for ExampleItem {
    type Id = String;

    fn indexable_values(&self) -> Vec<&str> {
        std::iter::once(self.text.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .collect()
    }

    fn rank(&self) -> i64 {
        self.rank
    }

    fn id(&self) -> String {
        self.text.clone()
    }
}

pub fn test_items() -> Vec<ExampleItem> {
    vec![
        ExampleItem::new("apple", 10, &["fruit", "red"]),
        ExampleItem::new("banana", 12, &["yellow", "fruit"]),
        ExampleItem::new("application", 15, &["app", "software"]),
        ExampleItem::new("apply", 8, &["use", "request"]),
        ExampleItem::new("approach", 5, &["method", "way"]),
    ]
}

pub fn test_items2() -> Vec<ExampleItem> {
    vec![
        ExampleItem::new("the quick brown fox", 20, &["the (quick) brown fox"]),
        ExampleItem::new("the slow brown fox", 18, &[]),
        ExampleItem::new("the very-slow brown fox", 22, &[]),
        ExampleItem::new("the quick brown-dog", 25, &[]),
    ]
}

pub fn texts<'a, I>(hits: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a std::sync::Arc<ExampleItem>>,
{
    hits.into_iter().map(|item| item.text.clone()).collect()
}
