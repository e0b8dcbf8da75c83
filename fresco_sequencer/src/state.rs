// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sequencer's state record and partial-state patches.

use fresco_data::{Easing, GridPhase, LayerAnim, LayerPhase, MotionMode, ViewerPayload};

use crate::sequences::HIGHLIGHT_APPEAR_MS;

/// The full choreography state read by every presentational layer.
///
/// Each field is one independent dimension; sequences and direct `set` calls
/// patch subsets of them. The record itself carries no timing.
#[derive(Clone, Debug)]
pub struct SequencerState {
    /// Whether the site header is shown.
    pub header: bool,
    /// Visual phase of the wall grid.
    pub grid: GridPhase,
    /// Physics regime of the wall.
    pub motion: MotionMode,
    /// Open viewer payload, or `None` when the viewer is closed.
    pub viewer: Option<ViewerPayload>,
    /// Whether the navigation menu is open.
    pub menu: bool,
    /// Series currently highlighted from the menu, if any.
    pub highlighted_series: Option<String>,
    /// Transition duration for highlight changes, in milliseconds.
    pub highlight_duration_ms: u64,
    /// Viewer background layer.
    pub viewer_background: LayerAnim,
    /// Viewer image layer.
    pub viewer_image: LayerAnim,
    /// Viewer chrome (arrows, counters, close control).
    pub viewer_ui: LayerAnim,
    /// Viewer backdrop blur.
    pub viewer_blur: LayerAnim,
    /// Viewer info panel.
    pub viewer_infos: LayerAnim,
}

impl Default for SequencerState {
    fn default() -> Self {
        Self {
            header: false,
            grid: GridPhase::InitialHidden,
            motion: MotionMode::Active,
            viewer: None,
            menu: false,
            highlighted_series: None,
            highlight_duration_ms: HIGHLIGHT_APPEAR_MS,
            viewer_background: LayerAnim::new(LayerPhase::Hidden, 300, Easing::EaseOut),
            viewer_image: LayerAnim::new(LayerPhase::Hidden, 500, Easing::EaseOut),
            viewer_ui: LayerAnim::new(LayerPhase::Hidden, 200, Easing::EaseOut),
            viewer_blur: LayerAnim::new(LayerPhase::Inactive, 200, Easing::EaseOut),
            viewer_infos: LayerAnim::new(LayerPhase::Hidden, 200, Easing::EaseOut),
        }
    }
}

/// A partial update of [`SequencerState`]: only `Some` fields are written.
///
/// Built with the fluent setters; [`Patch::apply_to`] merges it into a state
/// record. Nullable dimensions (`viewer`, `highlighted_series`) are doubly
/// optional so a patch can distinguish "leave alone" from "clear".
#[derive(Clone, Debug, Default)]
pub struct Patch {
    header: Option<bool>,
    grid: Option<GridPhase>,
    motion: Option<MotionMode>,
    viewer: Option<Option<ViewerPayload>>,
    menu: Option<bool>,
    highlighted_series: Option<Option<String>>,
    highlight_duration_ms: Option<u64>,
    viewer_background: Option<LayerAnim>,
    viewer_image: Option<LayerAnim>,
    viewer_ui: Option<LayerAnim>,
    viewer_blur: Option<LayerAnim>,
    viewer_infos: Option<LayerAnim>,
}

impl Patch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets header visibility.
    #[must_use]
    pub fn header(mut self, visible: bool) -> Self {
        self.header = Some(visible);
        self
    }

    /// Sets the grid phase.
    #[must_use]
    pub fn grid(mut self, phase: GridPhase) -> Self {
        self.grid = Some(phase);
        self
    }

    /// Sets the motion mode.
    #[must_use]
    pub fn motion(mut self, mode: MotionMode) -> Self {
        self.motion = Some(mode);
        self
    }

    /// Sets or clears the viewer payload.
    #[must_use]
    pub fn viewer(mut self, payload: Option<ViewerPayload>) -> Self {
        self.viewer = Some(payload);
        self
    }

    /// Sets menu visibility.
    #[must_use]
    pub fn menu(mut self, open: bool) -> Self {
        self.menu = Some(open);
        self
    }

    /// Sets or clears the highlighted series.
    #[must_use]
    pub fn highlighted_series(mut self, series: Option<String>) -> Self {
        self.highlighted_series = Some(series);
        self
    }

    /// Sets the highlight transition duration.
    #[must_use]
    pub fn highlight_duration_ms(mut self, duration: u64) -> Self {
        self.highlight_duration_ms = Some(duration);
        self
    }

    /// Sets the viewer background layer animation.
    #[must_use]
    pub fn viewer_background(mut self, anim: LayerAnim) -> Self {
        self.viewer_background = Some(anim);
        self
    }

    /// Sets the viewer image layer animation.
    #[must_use]
    pub fn viewer_image(mut self, anim: LayerAnim) -> Self {
        self.viewer_image = Some(anim);
        self
    }

    /// Sets the viewer chrome layer animation.
    #[must_use]
    pub fn viewer_ui(mut self, anim: LayerAnim) -> Self {
        self.viewer_ui = Some(anim);
        self
    }

    /// Sets the viewer blur layer animation.
    #[must_use]
    pub fn viewer_blur(mut self, anim: LayerAnim) -> Self {
        self.viewer_blur = Some(anim);
        self
    }

    /// Sets the viewer info panel layer animation.
    #[must_use]
    pub fn viewer_infos(mut self, anim: LayerAnim) -> Self {
        self.viewer_infos = Some(anim);
        self
    }

    /// Writes every `Some` field into `state`.
    pub fn apply_to(&self, state: &mut SequencerState) {
        if let Some(header) = self.header {
            state.header = header;
        }
        if let Some(grid) = self.grid {
            state.grid = grid;
        }
        if let Some(motion) = self.motion {
            state.motion = motion;
        }
        if let Some(viewer) = &self.viewer {
            state.viewer = viewer.clone();
        }
        if let Some(menu) = self.menu {
            state.menu = menu;
        }
        if let Some(highlighted) = &self.highlighted_series {
            state.highlighted_series = highlighted.clone();
        }
        if let Some(duration) = self.highlight_duration_ms {
            state.highlight_duration_ms = duration;
        }
        if let Some(anim) = self.viewer_background {
            state.viewer_background = anim;
        }
        if let Some(anim) = self.viewer_image {
            state.viewer_image = anim;
        }
        if let Some(anim) = self.viewer_ui {
            state.viewer_ui = anim;
        }
        if let Some(anim) = self.viewer_blur {
            state.viewer_blur = anim;
        }
        if let Some(anim) = self.viewer_infos {
            state.viewer_infos = anim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_pre_initial_load() {
        let state = SequencerState::default();
        assert!(!state.header);
        assert_eq!(state.grid, GridPhase::InitialHidden);
        assert_eq!(state.motion, MotionMode::Active);
        assert!(state.viewer.is_none());
        assert!(!state.menu);
        assert!(state.highlighted_series.is_none());
        assert_eq!(state.highlight_duration_ms, HIGHLIGHT_APPEAR_MS);
        assert_eq!(state.viewer_background.phase, LayerPhase::Hidden);
        assert_eq!(state.viewer_blur.phase, LayerPhase::Inactive);
    }

    #[test]
    fn patch_writes_only_some_fields() {
        let mut state = SequencerState::default();
        Patch::new()
            .grid(GridPhase::FadingIn)
            .highlighted_series(Some("dunes".to_owned()))
            .apply_to(&mut state);

        assert_eq!(state.grid, GridPhase::FadingIn);
        assert_eq!(state.highlighted_series.as_deref(), Some("dunes"));
        // Untouched dimensions keep their values.
        assert_eq!(state.motion, MotionMode::Active);
        assert!(!state.menu);
    }

    #[test]
    fn patch_can_clear_nullable_dimensions() {
        let mut state = SequencerState {
            highlighted_series: Some("dunes".to_owned()),
            ..SequencerState::default()
        };
        Patch::new().highlighted_series(None).apply_to(&mut state);
        assert!(state.highlighted_series.is_none());

        // An empty patch leaves them alone.
        state.highlighted_series = Some("dunes".to_owned());
        Patch::new().apply_to(&mut state);
        assert!(state.highlighted_series.is_some());
    }
}
