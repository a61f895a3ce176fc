// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast and the demo screen.
//!
//! ## Organization
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Default card background, the reference mid-gray (94/255).
    pub const CARD_GRAY: Color = Color::from_rgb(0.369, 0.369, 0.369);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const SM: f32 = 12.0; // 1.5 units
    pub const LG: f32 = 24.0; // 3 units
}
