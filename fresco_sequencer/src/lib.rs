// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Sequencer: named, multi-step state transitions over time.
//!
//! The engine's choreography (opening the viewer, closing the menu, the
//! initial ripple-in) is expressed as named timelines of typed
//! partial-state patches. A [`Trigger`] fixes when each step fires, either
//! at a millisecond offset or relative to the end of the staggered grid
//! fade whose duration is only known at play time.
//!
//! The [`Sequencer`] is a plain timer queue: the host calls
//! [`Sequencer::tick`] with its own monotonic clock and due steps apply to
//! the shared [`SequencerState`]. Starting a sequence cancels the previous
//! one's pending steps, which is what makes rapid open/close reversals
//! safe.
//!
//! ## Minimal example
//!
//! ```rust
//! use fresco_data::GridPhase;
//! use fresco_sequencer::{PlayParams, Sequencer};
//!
//! let mut sequencer = Sequencer::new();
//! sequencer.play(
//!     "initial-load",
//!     PlayParams { stagger_duration_ms: 900, data: None },
//!     0,
//! );
//! assert_eq!(sequencer.state().grid, GridPhase::FadingIn);
//!
//! sequencer.tick(900);
//! assert_eq!(sequencer.state().grid, GridPhase::Visible);
//! assert!(sequencer.state().header);
//! ```

mod sequencer;
mod sequences;
mod state;

pub use sequencer::{PlayParams, Sequencer};
pub use sequences::{
    HIGHLIGHT_APPEAR_MS, HIGHLIGHT_DISAPPEAR_MS, HIGHLIGHT_SWITCH_MS, STAGGER_ITEM_FADE_MS,
    STAGGER_STEP_MS, Sequence, Step, Trigger, builtin, stagger_duration_ms,
};
pub use state::{Patch, SequencerState};
