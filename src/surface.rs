// SPDX-License-Identifier: MPL-2.0
//! Presentation surface boundary.
//!
//! The controller never draws anything itself: it mounts a [`Scene`] into a
//! [`PresentationSurface`], pushes a [`Frame`] on every tick, and unmounts
//! on teardown. The Iced rendering lives behind this trait (see
//! [`crate::ui::overlay`]), and tests substitute a recording mock.

use crate::config::{BOTTOM_INSET, OVERLAY_OPACITY};
use crate::measure::FontSpec;
use iced::Color;

/// Immutable description of one toast's visuals, fixed for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub message: String,
    /// Color of the full-screen dimming layer (applied at [`Frame`] alpha).
    pub overlay_color: Color,
    pub card_color: Color,
    pub text_color: Color,
    pub font: FontSpec,
    /// Measured card height: wrapped text height plus vertical padding.
    pub card_height: f32,
    pub surface_width: f32,
}

impl Scene {
    /// Card offset at which the card is fully below the viewport.
    #[must_use]
    pub fn hidden_offset(&self) -> f32 {
        self.card_height + BOTTOM_INSET
    }
}

/// Per-tick visual state pushed to the surface.
///
/// `card_offset` is the distance (in points) the card currently sits below
/// its resting position; 0 means flush with the bottom inset, and
/// [`Scene::hidden_offset`] means fully off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub overlay_alpha: f32,
    pub card_offset: f32,
}

impl Frame {
    /// Initial frame: overlay invisible, card parked below the viewport.
    #[must_use]
    pub fn hidden(scene: &Scene) -> Self {
        Self {
            overlay_alpha: 0.0,
            card_offset: scene.hidden_offset(),
        }
    }

    /// Fully presented frame: overlay dimmed, card at rest.
    #[must_use]
    pub fn resting() -> Self {
        Self {
            overlay_alpha: OVERLAY_OPACITY,
            card_offset: 0.0,
        }
    }
}

/// The external view/animation system the toast renders into.
pub trait PresentationSurface {
    /// Inserts the dimming layer and card for `scene`.
    ///
    /// Returns `false` when the surface has no window to render into, in
    /// which case the open request is dropped without further effects.
    fn mount(&mut self, scene: Scene) -> bool;

    /// Updates the mounted visuals. Called once per tick while a session
    /// is active; never called without a preceding successful `mount`.
    fn apply(&mut self, frame: Frame);

    /// Removes the dimming layer and card.
    fn unmount(&mut self);
}
