//! Permalink builders for entities that carry no URL of their own.
//!
//! Hashtags, mentions and cashtags only report their text; clicking them should
//! open the matching page on twitter.com, tagged with the `ref_src` marker.

use urlencoding::encode;

const TWITTER_URL: &str = "https://twitter.com";
const REF_SRC: &str = "ref_src=twsrc%5Etwitterkit";
const UNKNOWN_SCREEN_NAME: &str = "twitter_unknown";

/// Builds the profile permalink for a screen name (without the leading `@`).
///
/// # Example
///
/// ```rust
/// use tweetlinkify::twitter::get_profile_permalink;
///
/// assert_eq!(
///     get_profile_permalink("jack"),
///     "https://twitter.com/jack?ref_src=twsrc%5Etwitterkit"
/// );
/// ```
pub fn get_profile_permalink(screen_name: &str) -> String {
    format!("{}/{}?{}", TWITTER_URL, encode(screen_name), REF_SRC)
}

/// Builds the hashtag page permalink for a hashtag (without the leading `#`).
pub fn get_hashtag_permalink(hashtag: &str) -> String {
    format!("{}/hashtag/{}?{}", TWITTER_URL, encode(hashtag), REF_SRC)
}

/// Builds the cashtag search permalink for a symbol (without the leading `$`).
pub fn get_symbol_permalink(symbol: &str) -> String {
    format!("{}/search?q=%24{}&{}", TWITTER_URL, encode(symbol), REF_SRC)
}

/// Builds the permalink of a status.
///
/// An empty or missing screen name falls back to `twitter_unknown`; twitter.com
/// redirects that path to the real author.
pub fn get_status_permalink(screen_name: Option<&str>, id: i64) -> String {
    let screen_name = match screen_name {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_SCREEN_NAME,
    };
    format!(
        "{}/{}/status/{}?{}",
        TWITTER_URL,
        encode(screen_name),
        id,
        REF_SRC
    )
}
