// SPDX-License-Identifier: MPL-2.0
//! Tilt state management
//!
//! Converts pointer positions over a card surface into the two rotation
//! angles driving the pseudo-3D hover effect.

use iced::{Point, Size};

/// Full swing of the effect in degrees; each axis stays within ±half of this
/// for any pointer position inside the surface.
pub const TILT_AMPLITUDE_DEGREES: f32 = 25.0;

/// Per-card rotation angles, recomputed on every pointer movement.
///
/// Each card owns exactly one `TiltState`; pointer events on one card never
/// touch another card's angles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    /// Rotation around the horizontal axis, in degrees.
    pub rotate_x: f32,

    /// Rotation around the vertical axis, in degrees.
    pub rotate_y: f32,
}

impl TiltState {
    /// Recomputes the angles from a pointer position local to the surface.
    ///
    /// Positions are normalized to the surface size so the effect is the same
    /// for any card dimensions; the sign flip on `rotate_x` makes the near
    /// edge lean toward the pointer. A surface that has no layout yet (zero
    /// width or height) leaves the previous angles untouched so the division
    /// below can never produce NaN or infinity.
    pub fn track(&mut self, position: Point, surface: Size) {
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return;
        }

        self.rotate_x = (position.y / surface.height - 0.5) * -TILT_AMPLITUDE_DEGREES;
        self.rotate_y = (position.x / surface.width - 0.5) * TILT_AMPLITUDE_DEGREES;
    }

    /// Returns the surface to neutral. Easing, if any, is a styling concern
    /// and is not computed here.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the card is currently at rest.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size {
        width: 280.0,
        height: 200.0,
    };

    #[test]
    fn default_tilt_is_neutral() {
        let tilt = TiltState::default();
        assert!(tilt.is_neutral());
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn center_position_yields_zero_angles() {
        let mut tilt = TiltState::default();
        tilt.track(
            Point::new(SURFACE.width / 2.0, SURFACE.height / 2.0),
            SURFACE,
        );

        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn corners_reach_the_extreme_angles() {
        let half = TILT_AMPLITUDE_DEGREES / 2.0;
        let mut tilt = TiltState::default();

        tilt.track(Point::new(0.0, 0.0), SURFACE);
        assert_eq!(tilt.rotate_x, half);
        assert_eq!(tilt.rotate_y, -half);

        tilt.track(Point::new(SURFACE.width, SURFACE.height), SURFACE);
        assert_eq!(tilt.rotate_x, -half);
        assert_eq!(tilt.rotate_y, half);
    }

    #[test]
    fn angles_stay_within_bounds_across_the_surface() {
        let half = TILT_AMPLITUDE_DEGREES / 2.0;
        let mut tilt = TiltState::default();

        for step_x in 0..=10 {
            for step_y in 0..=10 {
                let position = Point::new(
                    SURFACE.width * step_x as f32 / 10.0,
                    SURFACE.height * step_y as f32 / 10.0,
                );
                tilt.track(position, SURFACE);

                assert!(tilt.rotate_x >= -half && tilt.rotate_x <= half);
                assert!(tilt.rotate_y >= -half && tilt.rotate_y <= half);
            }
        }
    }

    #[test]
    fn reset_returns_to_neutral_after_movement() {
        let mut tilt = TiltState::default();
        tilt.track(Point::new(10.0, 190.0), SURFACE);
        assert!(!tilt.is_neutral());

        tilt.reset();

        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn zero_width_surface_keeps_previous_angles() {
        let mut tilt = TiltState::default();
        tilt.track(Point::new(70.0, 50.0), SURFACE);
        let before = tilt;

        tilt.track(Point::new(10.0, 10.0), Size::new(0.0, 200.0));

        assert_eq!(tilt, before);
        assert!(tilt.rotate_x.is_finite());
        assert!(tilt.rotate_y.is_finite());
    }

    #[test]
    fn zero_height_surface_keeps_previous_angles() {
        let mut tilt = TiltState::default();
        tilt.track(Point::new(70.0, 50.0), SURFACE);
        let before = tilt;

        tilt.track(Point::new(10.0, 10.0), Size::new(280.0, 0.0));

        assert_eq!(tilt, before);
    }

    #[test]
    fn effect_is_resolution_independent() {
        let small = Size::new(100.0, 100.0);
        let large = Size::new(1000.0, 1000.0);

        let mut on_small = TiltState::default();
        let mut on_large = TiltState::default();
        on_small.track(Point::new(75.0, 25.0), small);
        on_large.track(Point::new(750.0, 250.0), large);

        assert_eq!(on_small, on_large);
    }
}
