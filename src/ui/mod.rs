// SPDX-License-Identifier: MPL-2.0
//! Iced-facing pieces: design tokens and the overlay renderer.

pub mod design_tokens;
pub mod overlay;
