//! Clickable regions attached to the rendered text.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::color::Color;

/// Receives the url of a link when the user activates it.
pub trait LinkClickListener: Send + Sync {
    fn on_url_clicked(&self, url: &str);
}

impl<F> LinkClickListener for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_url_clicked(&self, url: &str) {
        self(url)
    }
}

/// A substituted entity in the rendered text, bound to its target url.
///
/// `range` is in UTF-16 code units of the rendered text.
#[derive(Clone)]
pub struct ClickableLinkSpan {
    pub range: Range<usize>,
    pub url: String,
    /// Text color in the normal state
    pub link_color: Color,
    /// Background color while pressed
    pub highlight_color: Color,
    pub underline: bool,
    listener: Option<Arc<dyn LinkClickListener>>,
}

impl ClickableLinkSpan {
    pub fn new(
        range: Range<usize>,
        url: impl Into<String>,
        link_color: Color,
        highlight_color: Color,
        listener: Option<Arc<dyn LinkClickListener>>,
    ) -> Self {
        ClickableLinkSpan {
            range,
            url: url.into(),
            link_color,
            highlight_color,
            underline: false,
            listener,
        }
    }

    /// Forwards the click to the listener; a span without listener ignores it.
    pub fn on_click(&self) {
        if let Some(listener) = &self.listener {
            listener.on_url_clicked(&self.url);
        }
    }
}

impl fmt::Debug for ClickableLinkSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickableLinkSpan")
            .field("range", &self.range)
            .field("url", &self.url)
            .field("link_color", &self.link_color)
            .field("highlight_color", &self.highlight_color)
            .field("underline", &self.underline)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
