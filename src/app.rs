// SPDX-License-Identifier: MPL-2.0
//! Demo screen that triggers toasts.
//!
//! A minimal host application: a couple of buttons that open a toast over
//! the screen's content, a status line showing the last completion flag,
//! and the plumbing every real host needs (window tracking for surface
//! availability, a tick subscription gated on controller activity, and
//! config-driven dwell).

use crate::config::{self, Config};
use crate::controller::{Phase, ToastController};
use crate::request::ToastRequest;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::overlay::{self, IcedSurface};
use iced::widget::{button, text, Column, Container, Stack};
use iced::{
    event, time, window, Color, Element, Length, Size, Subscription, Task, Theme,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const DEMO_MESSAGE: &str = "You are now connected with internet.";

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional dwell override in seconds, taking precedence over the
    /// configured value.
    pub dwell: Option<f32>,
}

/// Root demo state: the toast controller plus window bookkeeping.
pub struct App {
    controller: ToastController<IcedSurface>,
    config: Config,
    dwell_override: Option<f32>,
    window_width: f32,
    /// Completion flag of the most recent toast, written by its handler.
    last_completion: Rc<Cell<Option<bool>>>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ShowToast,
    /// Opens a short-dwell toast with a custom card color, mirroring the
    /// reference demo's second trigger.
    ShowQuickToast,
    DismissToast,
    Tick(Instant),
    WindowOpened(window::Id, Size),
    WindowResized(Size),
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());
    iced::application(boot, App::update, App::view)
        .title("iced_toast demo")
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let app = Self {
            controller: ToastController::new(IcedSurface::new()),
            config,
            dwell_override: flags.dwell,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            last_completion: Rc::new(Cell::new(None)),
        };
        (app, Task::none())
    }

    fn theme(&self) -> Theme {
        if self.config.dark_theme.unwrap_or(true) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dwell for the main trigger: CLI flag, then config, then none
    /// (which leaves the controller's 5s default in charge).
    fn configured_dwell(&self) -> Option<Duration> {
        self.dwell_override
            .or(self.config.dwell_secs)
            .map(config::DwellSeconds::new)
            .map(config::DwellSeconds::as_duration)
    }

    fn open_toast(&mut self, request: ToastRequest) {
        let flag = self.last_completion.clone();
        flag.set(None);
        let request = request.on_complete(move |completed| flag.set(Some(completed)));
        if let Err(err) = self.controller.open(request, self.window_width, Instant::now()) {
            log::warn!("failed to open toast: {}", err);
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowToast => {
                let mut request = ToastRequest::new(DEMO_MESSAGE);
                if let Some(dwell) = self.configured_dwell() {
                    request = request.dwell(dwell);
                }
                self.open_toast(request);
            }
            Message::ShowQuickToast => {
                let request = ToastRequest::new(DEMO_MESSAGE)
                    .dwell(Duration::from_secs(1))
                    .card_color(Color::from_rgb(0.0, 0.6, 0.2))
                    .text_color(palette::BLACK);
                self.open_toast(request);
            }
            Message::DismissToast => {
                self.controller.dismiss_now(Instant::now());
            }
            Message::Tick(now) => {
                self.controller.tick(now);
            }
            Message::WindowOpened(id, size) => {
                self.controller.surface_mut().set_window(id);
                self.window_width = size.width;
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_subscription = event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(window::Event::Opened { size, .. }) => {
                Some(Message::WindowOpened(window_id, size))
            }
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        // Animation frames are only needed while a toast is in flight.
        let tick_subscription = if self.controller.is_active() {
            time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([window_subscription, tick_subscription])
    }

    fn view(&self) -> Element<'_, Message> {
        let status = match self.last_completion.get() {
            Some(true) => "last toast: completed",
            Some(false) => "last toast: cancelled",
            None => match self.controller.phase() {
                Phase::Idle => "no toast shown yet",
                _ => "toast in flight",
            },
        };

        let controls = Column::new()
            .spacing(spacing::SM)
            .push(text("iced_toast demo").size(24))
            .push(button(text("Show toast")).on_press(Message::ShowToast))
            .push(button(text("Show quick toast (1s)")).on_press(Message::ShowQuickToast))
            .push(button(text("Dismiss")).on_press(Message::DismissToast))
            .push(text(status).size(14));

        let base: Element<'_, Message> = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .into();

        let mut layers = Stack::new().push(base);
        if let Some(toast) = overlay::view(self.controller.surface()) {
            layers = layers.push(toast);
        }
        layers.into()
    }
}
