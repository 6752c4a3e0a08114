//! Index a handful of items and query them.
//!
//! Run with `RUST_LOG=debug cargo run --example basic` to see indexing logs.

use lodestar::prelude::*;

#[derive(Debug)]
struct ExampleItem {
    text: String,
    rank: i64,
    aliases: Vec<String>,
}

impl ExampleItem {
    fn new(text: &str, rank: i64, aliases: &[&str]) -> Self {
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

fn main() -> Result<()> {
    env_logger::init();

    let index = Index::new();
    let index = index.index_items(vec![
        ExampleItem::new("apple", 10, &["fruit", "red"]),
        ExampleItem::new("banana", 12, &["yellow", "fruit"]),
        ExampleItem::new("application", 15, &["app", "software"]),
        ExampleItem::new("apply", 8, &["use", "request"]),
        ExampleItem::new("approach", 5, &["method", "way"]),
    ])?;
    println!("Indexed {} tokens", index.count());

    let results = index.prefix_search("app", 0, None);
    println!("Search results for 'app':");
    for item in &results.hits {
        println!("- {} (rank: {})", item.text, item.rank());
    }
    println!("Search took {:?}", results.timing.total_time);

    let only_fruit =
        |_: &str, _: &str, item: &ExampleItem| item.aliases.iter().any(|alias| alias == "fruit");
    let results = index.prefix_search("a", 0, Some(&only_fruit));
    println!("Fruit starting with 'a':");
    for item in &results.hits {
        println!("- {} (rank: {})", item.text, item.rank());
    }

    match index.get("apply") {
        Some(list) => {
            println!("Get results for 'apply':");
            for item in list {
                println!("- {} (rank: {})", item.text, item.rank());
            }
        }
        None => println!("No results found for 'apply'"),
    }

    Ok(())
}
