// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Gesture: drag capture over normalized pointer/touch samples.
//!
//! [`DragRecognizer`] converts a raw press/move/release stream into the
//! drag deltas and release velocity the wall physics consumes:
//!
//! - A press only arms the recognizer when it lands on the pan surface
//!   itself; presses on images or (for touch) inside independently
//!   scrollable regions pass through untouched.
//! - Moves are gated by an accumulated-displacement threshold, so a shaky
//!   press still counts as a click rather than a pan.
//! - Forwarded deltas are inverted: content moves opposite to the gesture.
//! - Each forwarded move refreshes an instantaneous velocity estimate,
//!   normalized to a 16 ms frame and clamped to a maximum magnitude.
//! - Release after real movement reports that final velocity for inertia;
//!   release below the threshold reports a click-like end with none.
//!
//! The recognizer is headless: the host feeds it positions and millisecond
//! timestamps from whatever event system it has.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use fresco_gesture::{DragRecognizer, GestureConfig, PressTarget};
//!
//! let mut drag = DragRecognizer::new(GestureConfig::default());
//! drag.press(Point::new(100.0, 100.0), 0, PressTarget::Surface);
//!
//! // 3 px of travel stays under the 5 px threshold: nothing forwarded.
//! assert!(drag.move_to(Point::new(103.0, 100.0), 16).is_none());
//!
//! // Crossing the threshold forwards the accumulated, inverted delta.
//! let delta = drag.move_to(Point::new(112.0, 100.0), 32).unwrap();
//! assert_eq!(delta.dx, -12.0);
//!
//! // Release after movement carries a velocity for inertial panning.
//! let end = drag.release().unwrap();
//! assert!(end.velocity.is_some());
//! ```

use kurbo::{Point, Vec2};

/// Drag tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Accumulated displacement (px) required before a press becomes a drag.
    pub threshold: f64,
    /// Clamp for each velocity component, in px per 16 ms frame.
    pub max_velocity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: 5.0,
            max_velocity: 70.0,
        }
    }
}

/// What the initiating press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    /// The pan surface; arms the recognizer.
    Surface,
    /// An image element; the press is left for click handling.
    Image,
    /// An independently scrollable region (touch); the press scrolls that
    /// region instead of panning the wall.
    ScrollRegion,
}

/// One forwarded drag step: inverted deltas in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragDelta {
    /// Horizontal content delta (opposite the gesture).
    pub dx: f64,
    /// Vertical content delta (opposite the gesture).
    pub dy: f64,
}

/// The end of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    /// Final clamped velocity when the gesture really moved; `None` for a
    /// click-like press that never crossed the threshold.
    pub velocity: Option<Vec2>,
}

/// Converts press/move/release samples into drag deltas and a release
/// velocity. See the crate docs for the full protocol.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragRecognizer {
    config: GestureConfig,
    active: bool,
    moved: bool,
    start: Point,
    last: Point,
    last_time_ms: u64,
    velocity: Vec2,
}

impl DragRecognizer {
    /// Creates a recognizer with the given tunables.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            active: false,
            moved: false,
            start: Point::ZERO,
            last: Point::ZERO,
            last_time_ms: 0,
            velocity: Vec2::ZERO,
        }
    }

    /// Whether a press is currently being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Whether the current press has crossed the movement threshold.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.active && self.moved
    }

    /// Feeds a press. Presses on images or scrollable regions are ignored.
    pub fn press(&mut self, pos: Point, now_ms: u64, target: PressTarget) {
        if target != PressTarget::Surface {
            self.active = false;
            return;
        }
        self.active = true;
        self.moved = false;
        self.start = pos;
        self.last = pos;
        self.last_time_ms = now_ms;
        self.velocity = Vec2::ZERO;
    }

    /// Feeds a move sample. Returns the inverted delta to forward once the
    /// accumulated displacement exceeds the threshold, `None` otherwise.
    ///
    /// Until the threshold is crossed, the anchor for deltas stays at the
    /// press position, so the first forwarded delta covers the whole travel
    /// so far.
    pub fn move_to(&mut self, pos: Point, now_ms: u64) -> Option<DragDelta> {
        if !self.active {
            return None;
        }

        let delta = pos - self.last;
        let total = pos - self.start;

        if !self.moved
            && (total.x.abs() > self.config.threshold || total.y.abs() > self.config.threshold)
        {
            self.moved = true;
        }
        if !self.moved {
            return None;
        }

        let dt = now_ms.saturating_sub(self.last_time_ms);
        if dt > 0 {
            let max = self.config.max_velocity;
            let vx = -delta.x / dt as f64 * 16.0;
            let vy = -delta.y / dt as f64 * 16.0;
            self.velocity = Vec2::new(vx.clamp(-max, max), vy.clamp(-max, max));
        }

        self.last = pos;
        self.last_time_ms = now_ms;

        Some(DragDelta {
            dx: -delta.x,
            dy: -delta.y,
        })
    }

    /// Ends the gesture (pointer up, touch end, or the pointer leaving the
    /// capture surface). Returns `None` when no press was being tracked.
    pub fn release(&mut self) -> Option<DragEnd> {
        if !self.active {
            return None;
        }
        let end = DragEnd {
            velocity: self.moved.then_some(self.velocity),
        };
        self.active = false;
        self.moved = false;
        Some(end)
    }

    /// Abandons the gesture without reporting an end (touch cancel).
    pub fn cancel(&mut self) {
        self.active = false;
        self.moved = false;
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> DragRecognizer {
        DragRecognizer::new(GestureConfig::default())
    }

    #[test]
    fn press_on_image_does_not_arm() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Image);
        assert!(!drag.is_dragging());
        assert!(drag.move_to(Point::new(50.0, 0.0), 16).is_none());
        assert!(drag.release().is_none());
    }

    #[test]
    fn press_in_scroll_region_passes_through() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::ScrollRegion);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn under_threshold_move_forwards_nothing() {
        let mut drag = recognizer();
        drag.press(Point::new(100.0, 100.0), 0, PressTarget::Surface);
        // 3 px of travel: below the 5 px threshold, no event yet.
        assert!(drag.move_to(Point::new(103.0, 100.0), 16).is_none());
        assert!(!drag.has_moved());

        // A follow-up move totaling 12 px crosses the threshold and forwards
        // the full accumulated delta, inverted.
        let delta = drag.move_to(Point::new(112.0, 100.0), 32).unwrap();
        assert_eq!(delta, DragDelta {
            dx: -12.0,
            dy: 0.0
        });
    }

    #[test]
    fn deltas_are_inverted_and_incremental_after_threshold() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Surface);
        drag.move_to(Point::new(10.0, 0.0), 16);
        let delta = drag.move_to(Point::new(14.0, -2.0), 32).unwrap();
        assert_eq!(delta, DragDelta {
            dx: -4.0,
            dy: 2.0
        });
    }

    #[test]
    fn release_after_movement_reports_clamped_velocity() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Surface);
        // 400 px in 16 ms would be 400 px/frame; the clamp caps it at 70.
        drag.move_to(Point::new(400.0, 0.0), 16);
        let end = drag.release().unwrap();
        let velocity = end.velocity.unwrap();
        assert_eq!(velocity.x, -70.0);
        assert_eq!(velocity.y, 0.0);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_without_movement_is_a_click() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Surface);
        drag.move_to(Point::new(2.0, 1.0), 16);
        let end = drag.release().unwrap();
        assert_eq!(end.velocity, None);
    }

    #[test]
    fn velocity_is_normalized_to_frame_interval() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Surface);
        drag.move_to(Point::new(10.0, 0.0), 16);
        // 32 px over 32 ms is 16 px per 16 ms frame, inverted.
        drag.move_to(Point::new(42.0, 0.0), 48);
        let end = drag.release().unwrap();
        assert_eq!(end.velocity.unwrap().x, -16.0);
    }

    #[test]
    fn cancel_discards_the_gesture() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Surface);
        drag.move_to(Point::new(20.0, 0.0), 16);
        drag.cancel();
        assert!(drag.release().is_none());
    }

    #[test]
    fn zero_dt_keeps_previous_velocity_estimate() {
        let mut drag = recognizer();
        drag.press(Point::ZERO, 0, PressTarget::Surface);
        drag.move_to(Point::new(16.0, 0.0), 16);
        // Same-timestamp sample: the delta still forwards, the velocity
        // estimate stays at the last well-defined value.
        let delta = drag.move_to(Point::new(20.0, 0.0), 16).unwrap();
        assert_eq!(delta.dx, -4.0);
        assert_eq!(drag.release().unwrap().velocity.unwrap().x, -16.0);
    }
}
