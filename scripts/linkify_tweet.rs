//! Tweet Linkifying Script
//!
//! Renders a Tweet the way the service does and prints the text with its
//! clickable spans. Reads the Tweet JSON from the file given as the first
//! argument, or from stdin when no argument is given.
//!
//! ```bash
//! cargo run --bin linkify_tweet -- tweet.json
//! curl -s ... | cargo run --bin linkify_tweet
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};

use tweetlinkify::{linkify_tweet, LinkifyConfig, Tweet};

/// Reads the Tweet JSON from the path argument or stdin.
fn read_input() -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match env::args().nth(1) {
        Some(path) => {
            println!("📂 Reading Tweet from {}", path);
            Ok(fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path, e))?)
        }
        None => {
            println!("⌨️  Reading Tweet from stdin");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("🔗 Tweet Linkify Tool");
    println!("=====================");

    let input = read_input()?;
    if input.trim().is_empty() {
        println!("❌ No Tweet JSON provided!");
        return Err("Tweet JSON is required".into());
    }

    let tweet: Tweet = serde_json::from_str(&input).map_err(|e| {
        println!("❌ Input is not a valid Tweet: {}", e);
        e
    })?;

    let config = LinkifyConfig::from_env()?;
    println!(
        "⚙️  Strip quote Tweet: {}, strip Vine card: {}",
        config.strip_quote_tweet, config.strip_vine_card
    );

    let Some(linkified) = linkify_tweet(&tweet, &config, None) else {
        println!("⚠️  Tweet {} has no text", tweet.id);
        return Ok(());
    };

    println!("\n📝 {}", linkified);
    println!("📏 Length: {} UTF-16 code units", linkified.len());

    if linkified.spans().is_empty() {
        println!("🔍 No clickable spans");
    } else {
        println!("🔍 {} clickable spans:", linkified.spans().len());
        for span in linkified.spans() {
            println!(
                "   [{}, {}) {} -> {}",
                span.range.start,
                span.range.end,
                linkified.span_text(span).unwrap_or_default(),
                span.url
            );
        }
    }

    Ok(())
}
