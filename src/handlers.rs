//! HTTP route handlers for the tweetlinkify service.
//!
//! This module contains all the HTTP route handler functions that process
//! incoming requests and return appropriate responses.

use axum::{extract::State, response::Json};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::LinkifyConfig;
use crate::linkify::{linkify_tweet, trim_end, LinkifiedText};
use crate::twitter::Tweet;

/// Body of a `POST /linkify` request.
///
/// The optional flags override the service configuration for this request only.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkifyRequest {
    pub tweet: Tweet,
    #[serde(default)]
    pub strip_quote_tweet: Option<bool>,
    #[serde(default)]
    pub strip_vine_card: Option<bool>,
}

/// One clickable range of the rendered text, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanResponse {
    pub start: usize,
    pub end: usize,
    pub url: String,
    /// The text the span covers
    pub display: String,
}

/// Body of a `POST /linkify` response. `text` is `null` when the Tweet has no text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkifyResponse {
    pub text: Option<String>,
    pub spans: Vec<SpanResponse>,
}

impl From<Option<LinkifiedText>> for LinkifyResponse {
    fn from(linkified: Option<LinkifiedText>) -> Self {
        match linkified {
            Some(linkified) => LinkifyResponse {
                text: Some(linkified.text()),
                spans: linkified
                    .spans()
                    .iter()
                    .map(|span| SpanResponse {
                        start: span.range.start,
                        end: span.range.end,
                        url: span.url.clone(),
                        display: linkified.span_text(span).unwrap_or_default(),
                    })
                    .collect(),
            },
            None => LinkifyResponse {
                text: None,
                spans: Vec::new(),
            },
        }
    }
}

/// Body of a `POST /trim` request and response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimPayload {
    pub text: String,
}

/// Handles GET requests to the root `/` endpoint.
///
/// # Returns
///
/// A static welcome message.
pub async fn handle_root() -> &'static str {
    info!("Root endpoint requested");
    "Tweet text linkifier. POST a Tweet to /linkify."
}

/// Handles GET requests to the `/health` endpoint.
///
/// This endpoint provides a health check for the service, returning the current
/// status and service name.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "tweetlinkify"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "tweetlinkify"}))
}

/// Handles POST requests to the `/linkify` endpoint.
///
/// Formats the Tweet text, substitutes display urls for its entities and returns
/// the rendered text with the clickable ranges. Malformed entities are skipped, so
/// any well-formed JSON body gets a response.
///
/// # Example Response
///
/// ```json
/// {
///   "text": "just setting up my twttr dev.twitter.com",
///   "spans": [{"start": 25, "end": 40, "url": "http://t.co/foo", "display": "dev.twitter.com"}]
/// }
/// ```
pub async fn handle_linkify(
    State(config): State<Arc<LinkifyConfig>>,
    Json(request): Json<LinkifyRequest>,
) -> Json<LinkifyResponse> {
    info!("Linkifying Tweet {}", request.tweet.id);

    let config = LinkifyConfig {
        strip_quote_tweet: request
            .strip_quote_tweet
            .unwrap_or(config.strip_quote_tweet),
        strip_vine_card: request.strip_vine_card.unwrap_or(config.strip_vine_card),
        ..config.as_ref().clone()
    };

    let response = LinkifyResponse::from(linkify_tweet(&request.tweet, &config, None));
    debug!(
        "Tweet {} rendered with {} spans",
        request.tweet.id,
        response.spans.len()
    );

    Json(response)
}

/// Handles POST requests to the `/trim` endpoint.
///
/// Removes trailing whitespace and control characters from the text.
pub async fn handle_trim(Json(payload): Json<TrimPayload>) -> Json<TrimPayload> {
    let text = trim_end(&payload.text);
    debug!(
        "Trimmed {} trailing bytes",
        payload.text.len() - text.len()
    );

    Json(TrimPayload {
        text: text.to_string(),
    })
}
