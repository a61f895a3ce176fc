// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a transient toast overlay for the Iced GUI framework.
//!
//! A [`ToastController`] drives one toast at a time through an explicit
//! lifecycle (slide in over a dimming layer, dwell, slide out, invoke a
//! completion handler, tear down) against a pluggable presentation
//! surface, so the timing and sequencing logic is testable without a
//! display.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod measure;
pub mod request;
pub mod surface;
pub mod ui;

pub use controller::{Message, Phase, ToastController};
pub use error::{Error, Result};
pub use request::{Style, ToastRequest};
pub use surface::{Frame, PresentationSurface, Scene};
