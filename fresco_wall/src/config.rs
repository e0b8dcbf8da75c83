// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physics tunables and the device split.

use fresco_proximity::ProximityConfig;

/// Input class of the device, fixed at construction.
///
/// Touch devices get no pointer attraction but an ambient autoscroll;
/// pointer devices get the reverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Mouse/trackpad device with a hover position.
    #[default]
    Pointer,
    /// Touch device without hover.
    Touch,
}

/// Tunables of the unified pan physics.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    /// Velocity blend factor per frame on pointer devices.
    pub lerp_pointer: f64,
    /// Velocity blend factor per frame on touch devices.
    pub lerp_touch: f64,
    /// Velocity blend factor during accelerating/decelerating windows.
    pub lerp_transition: f64,
    /// Friction applied while the velocity target is idle.
    pub friction: f64,
    /// Heavier friction used during transitional windows.
    pub transition_friction: f64,
    /// Velocity components below this are zeroed.
    pub threshold: f64,
    /// Peak pointer-attraction speed at the viewport edge.
    pub pointer_max_speed: f64,
    /// Dead-zone radius as a fraction of the center-to-corner distance.
    pub pointer_dead_zone: f64,
    /// Power of the ramp between dead zone and edge.
    pub pointer_curve: f64,
    /// Autoscroll speed floor.
    pub autoscroll_min_speed: f64,
    /// Autoscroll speed cap when re-seeded from a drag release.
    pub autoscroll_max_speed: f64,
    /// Geometric per-frame decay of autoscroll speed toward the floor.
    pub autoscroll_decay: f64,
    /// Scale applied to wheel deltas before they join the velocity.
    pub wheel_multiplier: f64,
    /// Extra margin in px around the viewport that still counts as visible.
    pub visibility_buffer: f64,
    /// Per-frame blend factor of the scroll-to-target easing.
    pub scroll_lerp: f64,
    /// Proximity-scale curve and its per-frame smoothing factor.
    pub proximity: ProximityConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            lerp_pointer: 0.04,
            lerp_touch: 0.08,
            lerp_transition: 0.02,
            friction: 0.92,
            transition_friction: 0.96,
            threshold: 0.1,
            pointer_max_speed: 24.0,
            pointer_dead_zone: 0.15,
            pointer_curve: 2.0,
            autoscroll_min_speed: 0.5,
            autoscroll_max_speed: 8.0,
            autoscroll_decay: 0.998,
            wheel_multiplier: 0.45,
            visibility_buffer: 100.0,
            scroll_lerp: 0.06,
            proximity: ProximityConfig::default(),
        }
    }
}
