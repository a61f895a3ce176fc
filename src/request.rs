// SPDX-License-Identifier: MPL-2.0
//! Toast request and resolved style defaults.
//!
//! A [`ToastRequest`] carries everything one toast needs: the message,
//! an optional dwell override, optional style tokens, and an optional
//! completion handler. Every optional field falls back to the defaults
//! enumerated in [`Style`].

use crate::config::DwellSeconds;
use crate::measure::FontSpec;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Handler invoked exactly once when the session ends: `true` after a
/// normal dismissal, `false` when the session was replaced or disposed.
pub type CompletionHandler = Box<dyn FnOnce(bool)>;

/// Fully resolved style for one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub overlay_color: Color,
    pub card_color: Color,
    pub text_color: Color,
    pub font: FontSpec,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            overlay_color: palette::BLACK,
            card_color: palette::CARD_GRAY,
            text_color: palette::WHITE,
            font: FontSpec::default(),
        }
    }
}

/// One toast's input, immutable for the duration of the session.
pub struct ToastRequest {
    message: String,
    dwell: Option<Duration>,
    overlay_color: Option<Color>,
    card_color: Option<Color>,
    text_color: Option<Color>,
    font: Option<FontSpec>,
    on_complete: Option<CompletionHandler>,
}

impl ToastRequest {
    /// Creates a request with the given message and every option unset.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dwell: None,
            overlay_color: None,
            card_color: None,
            text_color: None,
            font: None,
            on_complete: None,
        }
    }

    /// Sets how long the toast stays fully visible before auto-dismissing.
    /// Absent, the default of 5 seconds applies.
    #[must_use]
    pub fn dwell(mut self, dwell: Duration) -> Self {
        self.dwell = Some(dwell);
        self
    }

    #[must_use]
    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = Some(color);
        self
    }

    #[must_use]
    pub fn card_color(mut self, color: Color) -> Self {
        self.card_color = Some(color);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    #[must_use]
    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the completion handler. Without one, teardown is silent.
    #[must_use]
    pub fn on_complete(mut self, handler: impl FnOnce(bool) + 'static) -> Self {
        self.on_complete = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the dwell, clamped to the supported range, or the default.
    #[must_use]
    pub fn dwell_or_default(&self) -> Duration {
        self.dwell
            .map(DwellSeconds::from)
            .unwrap_or_default()
            .as_duration()
    }

    /// Resolves the style tokens against `defaults`, field by field.
    #[must_use]
    pub fn resolve_style(&self, defaults: &Style) -> Style {
        Style {
            overlay_color: self.overlay_color.unwrap_or(defaults.overlay_color),
            card_color: self.card_color.unwrap_or(defaults.card_color),
            text_color: self.text_color.unwrap_or(defaults.text_color),
            font: self.font.unwrap_or(defaults.font),
        }
    }

    /// Takes the completion handler out of the request.
    pub(crate) fn take_handler(&mut self) -> Option<CompletionHandler> {
        self.on_complete.take()
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("message", &self.message)
            .field("dwell", &self.dwell)
            .field("has_handler", &self.on_complete.is_some())
            .finish()
    }
}
