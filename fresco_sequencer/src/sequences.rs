// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Triggers, timeline steps, and the built-in sequence table.

use fresco_data::{Easing, GridPhase, LayerAnim, LayerPhase, MotionMode};

use crate::state::Patch;

/// Stagger delay added per visibility rank during a grid fade.
pub const STAGGER_STEP_MS: u64 = 45;
/// Fade duration of a single tile during a staggered grid fade.
pub const STAGGER_ITEM_FADE_MS: u64 = 1200;

/// Highlight transition when a series gains a highlight from none.
pub const HIGHLIGHT_APPEAR_MS: u64 = 450;
/// Highlight transition when the highlight moves between two series.
pub const HIGHLIGHT_SWITCH_MS: u64 = 650;
/// Highlight transition when the highlight is removed.
pub const HIGHLIGHT_DISAPPEAR_MS: u64 = 450;

/// Total duration of a staggered grid fade whose slowest tile has the given
/// rank: its delay plus one item fade.
#[must_use]
pub fn stagger_duration_ms(max_rank: usize) -> u64 {
    max_rank as u64 * STAGGER_STEP_MS + STAGGER_ITEM_FADE_MS
}

/// When a timeline step fires, relative to `play`.
///
/// Stagger-relative variants resolve against the stagger duration passed at
/// play time, so the same sequence adapts to however many tiles are fading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A fixed delay in milliseconds.
    At(u64),
    /// The moment the staggered grid fade completes.
    StaggerEnd,
    /// A fixed offset after the staggered grid fade completes.
    StaggerEndPlus(u64),
}

impl Trigger {
    /// Resolves to a delay in milliseconds for the given stagger duration.
    #[must_use]
    pub fn resolve(self, stagger_ms: u64) -> u64 {
        match self {
            Self::At(ms) => ms,
            Self::StaggerEnd => stagger_ms,
            Self::StaggerEndPlus(offset) => stagger_ms + offset,
        }
    }
}

/// One step of a sequence: a trigger and the patch it applies.
#[derive(Clone, Debug)]
pub struct Step {
    /// When the step fires.
    pub at: Trigger,
    /// What the step writes.
    pub patch: Patch,
}

impl Step {
    /// Creates a step.
    #[must_use]
    pub fn new(at: Trigger, patch: Patch) -> Self {
        Self {
            at,
            patch,
        }
    }
}

/// An ordered timeline of steps.
pub type Sequence = Vec<Step>;

fn ease_out(phase: LayerPhase, duration_ms: u64) -> LayerAnim {
    LayerAnim::new(phase, duration_ms, Easing::EaseOut)
}

fn ease_in(phase: LayerPhase, duration_ms: u64) -> LayerAnim {
    LayerAnim::new(phase, duration_ms, Easing::EaseIn)
}

/// Looks up a built-in sequence, returning its canonical name and timeline.
///
/// The table covers the full choreography: viewer open/close, menu
/// open/close, the initial ripple-in, the viewer info panel, and the direct
/// menu-entry-to-viewer shortcut.
#[must_use]
pub fn builtin(name: &str) -> Option<(&'static str, Sequence)> {
    let (canonical, sequence) = match name {
        "open-viewer" => ("open-viewer", vec![
            Step::new(
                Trigger::At(0),
                Patch::new()
                    .header(false)
                    .grid(GridPhase::FadingOut)
                    .motion(MotionMode::Decelerating),
            ),
            Step::new(
                Trigger::StaggerEnd,
                Patch::new()
                    .grid(GridPhase::Hidden)
                    .motion(MotionMode::Paused)
                    .viewer_background(ease_out(LayerPhase::Visible, 300)),
            ),
            Step::new(
                Trigger::StaggerEndPlus(300),
                Patch::new().viewer_image(ease_out(LayerPhase::Visible, 500)),
            ),
            Step::new(
                Trigger::StaggerEndPlus(500),
                Patch::new().viewer_ui(ease_out(LayerPhase::Visible, 200)),
            ),
        ]),
        "close-viewer" => ("close-viewer", vec![
            Step::new(
                Trigger::At(0),
                Patch::new()
                    .viewer_ui(ease_in(LayerPhase::Hidden, 200))
                    .viewer_image(ease_in(LayerPhase::Hidden, 500)),
            ),
            Step::new(
                Trigger::At(300),
                Patch::new().viewer_background(ease_in(LayerPhase::Hidden, 300)),
            ),
            Step::new(
                Trigger::At(600),
                Patch::new()
                    .viewer(None)
                    .grid(GridPhase::FadingIn)
                    .motion(MotionMode::Accelerating),
            ),
            Step::new(
                Trigger::StaggerEnd,
                Patch::new()
                    .header(true)
                    .grid(GridPhase::Visible)
                    .motion(MotionMode::Active),
            ),
        ]),
        "open-menu" => ("open-menu", vec![
            Step::new(
                Trigger::At(0),
                Patch::new()
                    .header(false)
                    .grid(GridPhase::FadingOut)
                    .motion(MotionMode::Decelerating),
            ),
            Step::new(
                Trigger::StaggerEnd,
                Patch::new()
                    .menu(true)
                    .grid(GridPhase::MenuMode)
                    .motion(MotionMode::ScrollOnly)
                    .highlight_duration_ms(0),
            ),
        ]),
        "close-menu" => ("close-menu", vec![
            Step::new(
                Trigger::At(0),
                Patch::new()
                    .menu(false)
                    .highlighted_series(None)
                    .grid(GridPhase::FadingIn)
                    .motion(MotionMode::Accelerating),
            ),
            Step::new(
                Trigger::StaggerEnd,
                Patch::new()
                    .header(true)
                    .grid(GridPhase::Visible)
                    .motion(MotionMode::Active),
            ),
        ]),
        "initial-load" => ("initial-load", vec![
            Step::new(
                Trigger::At(0),
                Patch::new()
                    .grid(GridPhase::FadingIn)
                    .motion(MotionMode::Active),
            ),
            Step::new(
                Trigger::StaggerEnd,
                Patch::new().header(true).grid(GridPhase::Visible),
            ),
        ]),
        "show-infos" => ("show-infos", vec![
            Step::new(
                Trigger::At(0),
                Patch::new().viewer_blur(ease_out(LayerPhase::Active, 600)),
            ),
            Step::new(
                Trigger::At(400),
                Patch::new().viewer_infos(ease_out(LayerPhase::Visible, 450)),
            ),
        ]),
        "hide-infos" => ("hide-infos", vec![
            Step::new(
                Trigger::At(0),
                Patch::new().viewer_infos(ease_in(LayerPhase::Hidden, 450)),
            ),
            Step::new(
                Trigger::At(450),
                Patch::new().viewer_blur(ease_out(LayerPhase::Inactive, 600)),
            ),
        ]),
        // Skips the staggered fade entirely: the menu already covers the
        // grid, so the viewer comes up over a hard-hidden wall. The viewer
        // payload arrives through the play-time data patch at delay 0.
        "menu-to-viewer" => ("menu-to-viewer", vec![
            Step::new(
                Trigger::At(0),
                Patch::new()
                    .menu(false)
                    .highlighted_series(None)
                    .grid(GridPhase::Hidden)
                    .motion(MotionMode::Paused)
                    .viewer_background(ease_out(LayerPhase::Visible, 300)),
            ),
            Step::new(
                Trigger::At(500),
                Patch::new()
                    .viewer_image(ease_out(LayerPhase::Visible, 500))
                    .viewer_ui(ease_out(LayerPhase::Visible, 200)),
            ),
        ]),
        _ => return None,
    };

    Some((canonical, sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_resolve_against_stagger_duration() {
        assert_eq!(Trigger::At(600).resolve(900), 600);
        assert_eq!(Trigger::StaggerEnd.resolve(900), 900);
        assert_eq!(Trigger::StaggerEndPlus(300).resolve(900), 1200);
    }

    #[test]
    fn stagger_duration_combines_rank_delay_and_item_fade() {
        assert_eq!(stagger_duration_ms(0), 1200);
        assert_eq!(stagger_duration_ms(10), 10 * 45 + 1200);
    }

    #[test]
    fn builtin_table_covers_the_choreography() {
        for name in [
            "open-viewer",
            "close-viewer",
            "open-menu",
            "close-menu",
            "initial-load",
            "show-infos",
            "hide-infos",
            "menu-to-viewer",
        ] {
            let (canonical, sequence) = builtin(name).expect(name);
            assert_eq!(canonical, name);
            assert!(!sequence.is_empty());
        }
        assert!(builtin("open-doors").is_none());
    }
}
