// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget viewer preload planning.
//!
//! When the viewer shows image `i` of an `n`-image series, the current image
//! and its immediate neighbors are requested eagerly; the remaining images
//! are requested opportunistically in rings of increasing distance, to be
//! fetched when the host is otherwise idle. Plans for a superseded index are
//! simply abandoned: the host drops the deferred list and asks for a new
//! plan.

/// Fetch urgency for one preload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadPriority {
    /// Fetch now: the current image and its direct neighbors.
    Eager,
    /// Fetch when idle.
    Idle,
}

/// Receives preload requests. Implementations are expected to de-duplicate
/// by URL and never block; failures are silent.
pub trait ImagePreloader {
    /// Requests that `url` be warmed in the image cache.
    fn request(&mut self, url: &str, priority: PreloadPriority);
}

/// Preload order for one viewer position, as ring-wrapped indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadPlan {
    /// Indices to fetch immediately: current, next, previous.
    pub eager: Vec<usize>,
    /// Indices to fetch when idle, nearest rings first.
    pub idle: Vec<usize>,
}

impl PreloadPlan {
    /// Builds the plan for viewing `index` out of `len` images.
    ///
    /// Indices wrap modulo `len` and each index appears at most once across
    /// both lists. An empty series yields an empty plan.
    #[must_use]
    pub fn for_index(len: usize, index: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        let wrap = |i: isize| -> usize { i.rem_euclid(len as isize) as usize };
        let mut seen = vec![false; len];
        let mut push = |out: &mut Vec<usize>, i: isize| {
            let idx = wrap(i);
            if !seen[idx] {
                seen[idx] = true;
                out.push(idx);
            }
        };

        let center = index as isize;
        let mut eager = Vec::new();
        push(&mut eager, center);
        push(&mut eager, center + 1);
        push(&mut eager, center - 1);

        let mut idle = Vec::new();
        for offset in 2..=(len as isize) {
            push(&mut idle, center + offset);
            push(&mut idle, center - offset);
        }

        Self { eager, idle }
    }

    /// Feeds the whole plan to a preloader, resolving indices to URLs.
    pub fn dispatch(&self, preloader: &mut dyn ImagePreloader, url_of: impl Fn(usize) -> String) {
        for &i in &self.eager {
            preloader.request(&url_of(i), PreloadPriority::Eager);
        }
        for &i in &self.idle {
            preloader.request(&url_of(i), PreloadPriority::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_eager() {
        let plan = PreloadPlan::for_index(6, 2);
        assert_eq!(plan.eager, vec![2, 3, 1]);
    }

    #[test]
    fn rings_expand_outward_without_duplicates() {
        let plan = PreloadPlan::for_index(6, 0);
        assert_eq!(plan.eager, vec![0, 1, 5]);
        assert_eq!(plan.idle, vec![2, 4, 3]);
        let mut all = plan.eager.clone();
        all.extend(&plan.idle);
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn wraps_at_series_ends() {
        let plan = PreloadPlan::for_index(3, 2);
        assert_eq!(plan.eager, vec![2, 0, 1]);
        assert!(plan.idle.is_empty());
    }

    #[test]
    fn empty_series_is_empty_plan() {
        assert_eq!(PreloadPlan::for_index(0, 0), PreloadPlan::default());
    }

    #[test]
    fn dispatch_orders_eager_before_idle() {
        struct Rec(Vec<(String, PreloadPriority)>);
        impl ImagePreloader for Rec {
            fn request(&mut self, url: &str, priority: PreloadPriority) {
                self.0.push((url.to_owned(), priority));
            }
        }
        let mut rec = Rec(Vec::new());
        PreloadPlan::for_index(4, 1).dispatch(&mut rec, |i| format!("img-{i}"));
        assert_eq!(rec.0[0], ("img-1".to_owned(), PreloadPriority::Eager));
        assert!(
            rec.0
                .iter()
                .skip(3)
                .all(|(_, p)| *p == PreloadPriority::Idle),
            "indices past the neighbors must be idle-priority"
        );
    }
}
