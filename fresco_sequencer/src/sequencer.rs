// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sequencer itself: a host-agnostic millisecond timer queue.

use smallvec::SmallVec;
use tracing::warn;

use crate::sequences::builtin;
use crate::state::{Patch, SequencerState};

/// Margin after the last step before the playing marker clears.
const SETTLE_MS: u64 = 50;

/// Per-play parameters.
#[derive(Clone, Debug, Default)]
pub struct PlayParams {
    /// Stagger duration the sequence's stagger-relative triggers resolve
    /// against.
    pub stagger_duration_ms: u64,
    /// One-shot patch merged into the sequence's delay-0 steps, applied
    /// after them. Sequences use it to receive payloads (the viewer data)
    /// that are not part of their static timeline.
    pub data: Option<Patch>,
}

#[derive(Clone, Debug)]
struct PendingStep {
    due_ms: u64,
    order: usize,
    patch: Patch,
}

/// Plays named step timelines against a [`SequencerState`].
///
/// The sequencer owns no clock: the host calls [`Sequencer::tick`] with its
/// own monotonic millisecond timestamps (typically once per frame) and due
/// steps apply then. Starting a sequence cancels every pending step of the
/// previous one, so a close always wins over a half-finished open.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    state: SequencerState,
    pending: SmallVec<[PendingStep; 8]>,
    playing: Option<&'static str>,
    end_due_ms: u64,
}

impl Sequencer {
    /// Creates a sequencer in the pre-initial-load state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current choreography state.
    #[must_use]
    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    /// The name of the in-flight sequence, if any.
    #[must_use]
    pub fn playing(&self) -> Option<&'static str> {
        self.playing
    }

    /// Whether a sequence is in flight.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// Starts the named built-in sequence at `now_ms`.
    ///
    /// Cancels all pending steps first. Unknown names warn and change
    /// nothing. Steps whose trigger resolves to zero apply immediately,
    /// with `params.data` merged on top; later steps wait for [`Self::tick`].
    pub fn play(&mut self, name: &str, params: PlayParams, now_ms: u64) {
        let Some((canonical, sequence)) = builtin(name) else {
            warn!(name, "unknown sequence; ignoring");
            return;
        };

        self.pending.clear();
        self.playing = Some(canonical);

        let mut max_delay = 0;
        for (order, step) in sequence.into_iter().enumerate() {
            let delay = step.at.resolve(params.stagger_duration_ms);
            max_delay = max_delay.max(delay);
            self.pending.push(PendingStep {
                due_ms: now_ms + delay,
                order,
                patch: step.patch,
            });
        }
        if let Some(data) = params.data {
            // The data patch rides with the sequence start, after any
            // delay-0 steps, so a step cannot clobber the payload it needs.
            self.pending.push(PendingStep {
                due_ms: now_ms,
                order: usize::MAX,
                patch: data,
            });
        }
        self.end_due_ms = now_ms + max_delay + SETTLE_MS;

        self.tick(now_ms);
    }

    /// Applies a patch immediately, leaving pending steps untouched.
    pub fn set(&mut self, patch: &Patch) {
        patch.apply_to(&mut self.state);
    }

    /// Applies every step due at or before `now_ms`, in `(due, order)`
    /// order, then clears the playing marker once the settle margin after
    /// the last step has passed.
    pub fn tick(&mut self, now_ms: u64) {
        if self.pending.iter().any(|step| step.due_ms <= now_ms) {
            let mut due: Vec<PendingStep> = Vec::new();
            self.pending.retain(|step| {
                if step.due_ms <= now_ms {
                    due.push(step.clone());
                    false
                } else {
                    true
                }
            });
            due.sort_by_key(|step| (step.due_ms, step.order));
            for step in &due {
                step.patch.apply_to(&mut self.state);
            }
        }

        if self.playing.is_some() && self.pending.is_empty() && now_ms >= self.end_due_ms {
            self.playing = None;
        }
    }

    /// Drops all pending steps and the playing marker. The state keeps
    /// whatever has already applied.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.playing = None;
    }
}
