//! Configuration module for the tweetlinkify service.
//!
//! This module contains the linkify rendering options and the environment variable
//! handling used to load them.

use log::{debug, info, warn};
use std::env;

use crate::color::Color;

/// Opacity of the link color when blended into the pressed-link background
pub const DEFAULT_HIGHLIGHT_OPACITY: f64 = 0.15;

const DEFAULT_LINK_COLOR: Color = Color(0xFF1D_A1F2);
const DEFAULT_BACKGROUND_COLOR: Color = Color::WHITE;
const DEFAULT_PORT: u16 = 3000;

/// Rendering options for linkified Tweet text.
///
/// The strip flags control whether a trailing quote Tweet or Vine card link is
/// hidden from the text; a trailing photo link is always hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkifyConfig {
    /// Hide a trailing link to a quoted status
    pub strip_quote_tweet: bool,
    /// Hide a trailing link to a Vine
    pub strip_vine_card: bool,
    /// Text color of the links
    pub link_color: Color,
    /// Background color of a link while it is pressed
    pub link_highlight_color: Color,
}

impl Default for LinkifyConfig {
    fn default() -> Self {
        LinkifyConfig {
            strip_quote_tweet: true,
            strip_vine_card: true,
            link_color: DEFAULT_LINK_COLOR,
            link_highlight_color: Color::calculate_opacity_transform(
                DEFAULT_HIGHLIGHT_OPACITY,
                DEFAULT_LINK_COLOR,
                DEFAULT_BACKGROUND_COLOR,
            ),
        }
    }
}

impl LinkifyConfig {
    /// Creates a new `LinkifyConfig` by reading environment variables.
    ///
    /// # Optional Environment Variables
    ///
    /// - `LINKIFY_STRIP_QUOTE_TWEET`: `true`/`false`/`1`/`0`/`yes`/`no` (default `true`)
    /// - `LINKIFY_STRIP_VINE_CARD`: same values (default `true`)
    /// - `LINKIFY_LINK_COLOR`: `#RRGGBB` or `#AARRGGBB` (default `#1DA1F2`)
    /// - `LINKIFY_BACKGROUND_COLOR`: background the highlight is blended over (default `#FFFFFF`)
    /// - `LINKIFY_LINK_HIGHLIGHT_COLOR`: explicit highlight color (default: link color at
    ///   15% opacity over the background)
    ///
    /// # Returns
    ///
    /// - `Ok(LinkifyConfig)`: If every variable that is set holds a valid value
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If a variable is malformed
    ///
    /// # Example
    ///
    /// ```rust
    /// use tweetlinkify::LinkifyConfig;
    ///
    /// let config = LinkifyConfig::from_env().unwrap_or_default();
    /// println!("Links are drawn in {}", config.link_color);
    /// ```
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading linkify configuration from environment variables");

        let strip_quote_tweet = read_flag("LINKIFY_STRIP_QUOTE_TWEET", true)?;
        let strip_vine_card = read_flag("LINKIFY_STRIP_VINE_CARD", true)?;
        let link_color = read_color("LINKIFY_LINK_COLOR")?.unwrap_or(DEFAULT_LINK_COLOR);

        let link_highlight_color = match read_color("LINKIFY_LINK_HIGHLIGHT_COLOR")? {
            Some(color) => color,
            None => {
                let background =
                    read_color("LINKIFY_BACKGROUND_COLOR")?.unwrap_or(DEFAULT_BACKGROUND_COLOR);
                let color = Color::calculate_opacity_transform(
                    DEFAULT_HIGHLIGHT_OPACITY,
                    link_color,
                    background,
                );
                debug!(
                    "Derived link highlight color {} from link color {} over {}",
                    color, link_color, background
                );
                color
            }
        };

        let config = LinkifyConfig {
            strip_quote_tweet,
            strip_vine_card,
            link_color,
            link_highlight_color,
        };

        info!("Linkify configuration loaded successfully");
        debug!("Linkify configuration: {:?}", config);

        Ok(config)
    }
}

fn read_flag(name: &str, default: bool) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    match env::var(name) {
        Ok(value) => {
            info!("Found {} environment variable", name);
            debug!("{} = {}", name, value);
            parse_flag(&value)
                .ok_or_else(|| format!("Invalid boolean value for {}: {}", name, value).into())
        }
        Err(_) => {
            info!("No {} found in environment variables, using {}", name, default);
            Ok(default)
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn read_color(name: &str) -> Result<Option<Color>, Box<dyn std::error::Error + Send + Sync>> {
    match env::var(name) {
        Ok(value) => {
            info!("Found {} environment variable", name);
            debug!("{} = {}", name, value);
            let color = value
                .parse::<Color>()
                .map_err(|e| format!("Invalid color for {}: {}", name, e))?;
            Ok(Some(color))
        }
        Err(_) => {
            info!("No {} found in environment variables", name);
            Ok(None)
        }
    }
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the environment variable is not set or cannot be parsed, it defaults to 3000.
///
/// # Returns
///
/// The port number as a u16.
///
/// # Example
///
/// ```rust
/// use tweetlinkify::get_server_port;
///
/// // With no PORT set
/// let port = get_server_port(); // Returns 3000
/// ```
pub fn get_server_port() -> u16 {
    match env::var("PORT") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("PORT is not a valid port number ({}): {}", value, e);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}
