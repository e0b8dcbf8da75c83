// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared vocabulary for the sequencer state dimensions.
//!
//! These enums are read by every presentational layer and by the wall's
//! physics step, so they live here rather than in any single component.

/// The damping/velocity-source regime of the wall physics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    /// All velocity sources active.
    #[default]
    Active,
    /// Physics skipped entirely; velocities are zeroed on entry.
    Paused,
    /// Pointer attraction and autoscroll suppressed; explicit
    /// scroll-to-target still runs. Used while a menu is open.
    ScrollOnly,
    /// Transitional window after a close: heavier smoothing while motion
    /// resumes.
    Accelerating,
    /// Transitional window before a pause: friction forced so the wall
    /// coasts to a stop.
    Decelerating,
}

impl MotionMode {
    /// Whether this mode is one of the transitional mode-switch windows.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Accelerating | Self::Decelerating)
    }
}

/// Visual phase of the grid layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridPhase {
    /// Before the initial ripple-in has played.
    #[default]
    InitialHidden,
    /// Staggered fade toward visible.
    FadingIn,
    /// Fully shown.
    Visible,
    /// Staggered fade toward hidden.
    FadingOut,
    /// Fully hidden (viewer open).
    Hidden,
    /// Dimmed behind an open menu, highlight-ready.
    MenuMode,
}

impl GridPhase {
    /// Whether a staggered fade is currently in flight.
    #[must_use]
    pub fn is_fading(self) -> bool {
        matches!(self, Self::FadingIn | Self::FadingOut)
    }
}

/// Visibility phase of an animated UI layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerPhase {
    /// Not shown.
    #[default]
    Hidden,
    /// Shown.
    Visible,
    /// Effect engaged (blur layer).
    Active,
    /// Effect released (blur layer).
    Inactive,
}

/// Easing curve applied to a layer transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Decelerating curve.
    #[default]
    EaseOut,
    /// Accelerating curve.
    EaseIn,
    /// Symmetric curve.
    EaseInOut,
    /// Explicit cubic-bezier control points.
    CubicBezier(f32, f32, f32, f32),
}

/// The standard stagger easing used for tile fades.
pub const STAGGER_EASING: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

/// Animation descriptor for one UI layer: target phase plus timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerAnim {
    /// Target visibility phase.
    pub phase: LayerPhase,
    /// Transition duration in milliseconds.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl LayerAnim {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(phase: LayerPhase, duration_ms: u64, easing: Easing) -> Self {
        Self {
            phase,
            duration_ms,
            easing,
        }
    }
}
