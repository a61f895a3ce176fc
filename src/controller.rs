// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle controller.
//!
//! [`ToastController`] drives a single toast from request to teardown
//! through the phases `Idle → Presenting → Visible → Dismissing → Idle`.
//! It owns a [`PresentationSurface`] and at most one session at a time;
//! all timing flows through [`ToastController::tick`], which takes the
//! current instant explicitly so the lifecycle is testable with a
//! synthetic clock.
//!
//! Phase boundaries are computed from nominal offsets (`phase_started`
//! advances by whole phase durations), so a coarse or late tick neither
//! drifts the dwell nor skips a step: one tick can cross several
//! boundaries and still fires the completion handler exactly once,
//! strictly before the scene is unmounted.

use crate::config::{CLEANUP, ENTER_FADE, ENTER_SLIDE, EXIT_SLIDE, OVERLAY_OPACITY};
use crate::easing;
use crate::error::{Error, Result};
use crate::measure;
use crate::request::{CompletionHandler, Style, ToastRequest};
use crate::surface::{Frame, PresentationSurface, Scene};
use std::time::{Duration, Instant};

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session; nothing is mounted.
    Idle,
    /// Scene mounted; overlay fading in while the card slides up.
    Presenting,
    /// Card at rest; the dwell timer is running.
    Visible,
    /// Card sliding back down; ends with the handler, a short cleanup
    /// animation, and teardown.
    Dismissing,
}

/// Messages for hosts that drive the controller Elm-style.
///
/// Both variants carry the instant they happened at, so a host (or a
/// test) never depends on the wall clock inside the controller.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Periodic tick carrying the current instant.
    Tick(Instant),
    /// Dismiss the active toast at the carried instant, skipping any
    /// remaining dwell.
    Dismiss(Instant),
}

/// One request's lifecycle state, from successful mount to teardown.
struct Session {
    phase: Phase,
    /// Nominal start of the current phase.
    phase_started: Instant,
    dwell: Duration,
    /// Card travel distance between hidden and resting positions.
    hidden_offset: f32,
    handler: Option<CompletionHandler>,
    handler_fired: bool,
}

/// Drives a single toast's full lifecycle over a presentation surface.
///
/// Explicitly constructed and owned by the caller; there is no ambient
/// singleton. Opening a new toast while one is active replaces it: the
/// in-flight session is unmounted and its handler receives `false` before
/// the new session mounts.
pub struct ToastController<S: PresentationSurface> {
    surface: S,
    defaults: Style,
    session: Option<Session>,
}

impl<S: PresentationSurface> ToastController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, Style::default())
    }

    pub fn with_style(surface: S, defaults: Style) -> Self {
        Self {
            surface,
            defaults,
            session: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, |s| s.phase)
    }

    /// Whether a session is in flight (anything mounted on the surface).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Opens a toast, replacing any in-flight session.
    ///
    /// Measures the message at `surface_width` (inside the fixed margins
    /// and padding), mounts the scene, and enters `Presenting`. If the
    /// surface reports itself unavailable the call is a silent no-op:
    /// nothing mounts, no phase changes, and the handler is never invoked.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWidth`] if `surface_width` is zero, negative, or
    /// not finite.
    pub fn open(
        &mut self,
        mut request: ToastRequest,
        surface_width: f32,
        now: Instant,
    ) -> Result<()> {
        if !surface_width.is_finite() || surface_width <= 0.0 {
            return Err(Error::InvalidWidth(surface_width));
        }

        // Replace policy: the previous session ends here, completely,
        // before the new one touches the surface.
        self.cancel_in_flight();

        let style = request.resolve_style(&self.defaults);
        let scene = Scene {
            message: request.message().to_string(),
            overlay_color: style.overlay_color,
            card_color: style.card_color,
            text_color: style.text_color,
            font: style.font,
            card_height: measure::card_height(request.message(), surface_width, &style.font),
            surface_width,
        };
        let hidden_offset = scene.hidden_offset();
        let initial = Frame::hidden(&scene);

        if !self.surface.mount(scene) {
            log::warn!("presentation surface unavailable; dropping toast");
            return Ok(());
        }
        self.surface.apply(initial);

        self.session = Some(Session {
            phase: Phase::Presenting,
            phase_started: now,
            dwell: request.dwell_or_default(),
            hidden_offset,
            handler: request.take_handler(),
            handler_fired: false,
        });
        log::debug!("toast presenting, card travel {:.1}pt", hidden_offset);
        Ok(())
    }

    /// Advances the lifecycle to `now` and pushes the resulting frame.
    pub fn tick(&mut self, now: Instant) {
        let mut fire: Option<CompletionHandler> = None;
        let mut frame: Option<Frame> = None;
        let mut teardown = false;

        let Some(session) = self.session.as_mut() else {
            return;
        };

        loop {
            let elapsed = now.saturating_duration_since(session.phase_started);
            match session.phase {
                Phase::Presenting => {
                    if elapsed >= ENTER_SLIDE {
                        session.phase = Phase::Visible;
                        session.phase_started += ENTER_SLIDE;
                        log::debug!("toast visible, dwell {:?}", session.dwell);
                        continue;
                    }
                    let slide = easing::spring(elapsed.as_secs_f32() / ENTER_SLIDE.as_secs_f32());
                    let fade = easing::linear(elapsed.as_secs_f32() / ENTER_FADE.as_secs_f32());
                    frame = Some(Frame {
                        overlay_alpha: OVERLAY_OPACITY * fade,
                        card_offset: session.hidden_offset * (1.0 - slide),
                    });
                    break;
                }
                Phase::Visible => {
                    if elapsed >= session.dwell {
                        session.phase = Phase::Dismissing;
                        session.phase_started += session.dwell;
                        log::debug!("toast dismissing");
                        continue;
                    }
                    frame = Some(Frame::resting());
                    break;
                }
                Phase::Dismissing => {
                    if elapsed >= EXIT_SLIDE && !session.handler_fired {
                        session.handler_fired = true;
                        fire = session.handler.take();
                    }
                    if elapsed >= EXIT_SLIDE + CLEANUP {
                        teardown = true;
                        break;
                    }
                    let progress = elapsed.as_secs_f32() / EXIT_SLIDE.as_secs_f32();
                    frame = Some(Frame {
                        overlay_alpha: OVERLAY_OPACITY * (1.0 - easing::linear(progress)),
                        card_offset: session.hidden_offset * easing::spring(progress),
                    });
                    break;
                }
                // Sessions never hold Idle.
                Phase::Idle => unreachable!("idle session"),
            }
        }

        if let Some(frame) = frame {
            self.surface.apply(frame);
        }
        // The handler runs after the dismiss animation and before the
        // surface elements go away, even when both land in one tick.
        if let Some(handler) = fire {
            handler(true);
        }
        if teardown {
            self.surface.unmount();
            self.session = None;
            log::debug!("toast torn down");
        }
    }

    /// Dismisses the active toast immediately.
    ///
    /// Skips whatever remains of the entry animation or dwell and enters
    /// `Dismissing` at `now`; the session then completes normally and the
    /// handler receives `true`. No-op while idle or already dismissing.
    pub fn dismiss_now(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            if matches!(session.phase, Phase::Presenting | Phase::Visible) {
                session.phase = Phase::Dismissing;
                session.phase_started = now;
                log::debug!("toast dismissed early");
            }
        }
    }

    /// Ends the controller's current session, if any.
    ///
    /// The scene is unmounted and the handler receives `false`. Call this
    /// when the host screen goes away.
    pub fn dispose(&mut self) {
        self.cancel_in_flight();
    }

    /// Handles a host message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Dismiss(now) => self.dismiss_now(now),
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Some(handler) = session.handler.take() {
                handler(false);
            }
            self.surface.unmount();
            log::debug!("toast cancelled");
        }
    }
}

impl<S: PresentationSurface + std::fmt::Debug> std::fmt::Debug for ToastController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastController")
            .field("phase", &self.phase())
            .field("surface", &self.surface)
            .finish()
    }
}
