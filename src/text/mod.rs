//! Tweet text preparation.
//!
//! This module turns the raw text and entities delivered by the API into a
//! [`FormattedTweetText`] whose offsets match the unescaped UTF-16 text.

pub mod format;
pub mod html;

pub use format::{format_tweet_text, FormattedTweetText};
pub use html::{unescape, EscapedRange, Unescaped};
