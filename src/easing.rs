// SPDX-License-Identifier: MPL-2.0
//! Normalized easing curves for the toast animations.
//!
//! Both slide animations use an underdamped spring (damping ratio 0.4),
//! which overshoots its target and settles, while the overlay fades
//! linearly. All curves map normalized time `t` in `[0, 1]` to progress;
//! inputs outside the range are clamped.

/// Damping ratio of the slide spring.
const SPRING_DAMPING: f32 = 0.4;

/// Undamped angular frequency, scaled so the spring has visibly settled
/// by the end of the normalized duration.
const SPRING_FREQUENCY: f32 = 12.0;

/// Linear progress, clamped to `[0, 1]`.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Underdamped spring response from 0 to 1.
///
/// Overshoots past 1.0 around a third of the way in and oscillates with a
/// decaying envelope; `spring(0.0) == 0.0` and `spring(t >= 1.0) == 1.0`.
#[must_use]
pub fn spring(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let decay = SPRING_DAMPING * SPRING_FREQUENCY;
    let damped_freq = SPRING_FREQUENCY * (1.0 - SPRING_DAMPING * SPRING_DAMPING).sqrt();
    let envelope = (-decay * t).exp();

    1.0 - envelope * ((damped_freq * t).cos() + (decay / damped_freq) * (damped_freq * t).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_clamps_outside_range() {
        assert_eq!(linear(-0.5), 0.0);
        assert_eq!(linear(0.25), 0.25);
        assert_eq!(linear(1.5), 1.0);
    }

    #[test]
    fn spring_starts_at_zero_and_ends_at_one() {
        assert_eq!(spring(0.0), 0.0);
        assert_eq!(spring(1.0), 1.0);
        assert_eq!(spring(-1.0), 0.0);
        assert_eq!(spring(2.0), 1.0);
    }

    #[test]
    fn spring_overshoots_its_target() {
        let max = (1..100)
            .map(|i| spring(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(max > 1.0, "spring never overshot: max = {}", max);
    }

    #[test]
    fn spring_settles_near_target() {
        let value = spring(0.99);
        assert!(
            (value - 1.0).abs() < 0.02,
            "spring did not settle: {}",
            value
        );
    }

    #[test]
    fn spring_rises_through_the_first_quarter() {
        assert!(spring(0.1) < spring(0.2));
        assert!(spring(0.05) > 0.0);
    }
}
