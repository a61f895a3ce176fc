// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of a mounted toast.
//!
//! [`IcedSurface`] is the [`PresentationSurface`] used by real
//! applications: it retains the mounted [`Scene`] and the latest
//! [`Frame`], and [`view`] turns them into widgets. The slide animation
//! is emulated with a clipped reveal window anchored to the bottom of the
//! screen: the card sits inside it under a top padding equal to the
//! frame's offset, so a growing offset pushes it out of view.

use crate::config::{BOTTOM_INSET, CORNER_RADIUS, INNER_PADDING, OUTER_MARGIN, VERTICAL_PADDING};
use crate::surface::{Frame, PresentationSurface, Scene};
use iced::widget::{container, text, Container};
use iced::{alignment, window, Background, Border, Color, Element, Length, Padding, Theme};

/// Presentation surface backed by the host window of an Iced application.
///
/// The surface is unavailable until [`IcedSurface::set_window`] is called;
/// `mount` then accepts scenes and the host's view renders them.
#[derive(Debug, Default)]
pub struct IcedSurface {
    window: Option<window::Id>,
    mounted: Option<(Scene, Frame)>,
}

impl IcedSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the surface as available by attaching the host window.
    pub fn set_window(&mut self, id: window::Id) {
        self.window = Some(id);
    }

    #[must_use]
    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Currently mounted scene and latest frame, if any.
    #[must_use]
    pub fn mounted(&self) -> Option<(&Scene, Frame)> {
        self.mounted.as_ref().map(|(scene, frame)| (scene, *frame))
    }
}

impl PresentationSurface for IcedSurface {
    fn mount(&mut self, scene: Scene) -> bool {
        if self.window.is_none() {
            return false;
        }
        let initial = Frame::hidden(&scene);
        self.mounted = Some((scene, initial));
        true
    }

    fn apply(&mut self, frame: Frame) {
        if let Some((_, current)) = &mut self.mounted {
            *current = frame;
        }
    }

    fn unmount(&mut self) {
        self.mounted = None;
    }
}

/// Renders the dimming layer and card for the surface's mounted toast.
///
/// Returns `None` while nothing is mounted; the host stacks the result
/// over its own content.
pub fn view<'a, Message: 'a>(surface: &'a IcedSurface) -> Option<Element<'a, Message>> {
    let (scene, frame) = surface.mounted()?;

    let message = Container::new(
        text(&scene.message)
            .size(scene.font.size)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .style(move |_theme: &Theme| text::Style {
                color: Some(scene.text_color),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    let card = Container::new(message)
        .width(Length::Fill)
        .height(Length::Fixed(scene.card_height))
        .padding(Padding::from([VERTICAL_PADDING, INNER_PADDING]))
        .style(move |_theme: &Theme| card_style(scene.card_color));

    // Reveal window: exactly tall enough for the resting card plus its
    // bottom inset. The frame offset becomes top padding, and anything
    // pushed past the bottom edge is clipped away.
    let reveal = Container::new(
        Container::new(card)
            .width(Length::Fill)
            .padding(Padding {
                top: frame.card_offset.max(0.0),
                right: OUTER_MARGIN,
                bottom: 0.0,
                left: OUTER_MARGIN,
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(scene.card_height + BOTTOM_INSET))
    .clip(true);

    let dim_color = Color {
        a: frame.overlay_alpha,
        ..scene.overlay_color
    };
    Some(
        Container::new(reveal)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom)
            .style(move |_theme: &Theme| dim_style(dim_color))
            .into(),
    )
}

/// Style for the full-screen dimming layer.
fn dim_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Style for the rounded message card.
fn card_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: CORNER_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
