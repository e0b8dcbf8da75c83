// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Layout: irregular grid placement over a toroidal plane.
//!
//! Given `n` image slots, this crate computes an `L × H` cell grid and
//! assigns each image a square footprint anchor such that:
//!
//! - no two footprints overlap, and
//! - no footprint touching one grid edge has a counterpart footprint at the
//!   mirrored cell of the opposite edge, so tiles never become adjacent once
//!   the grid wraps around on screen.
//!
//! Anchors are ranked by a seeded smooth pseudo-noise field rather than
//! uniform randomness, which clusters images organically; the top 40% of
//! the ranked pool is shuffled for variety while the remainder keeps noise
//! order. Each placed image also draws a size-class scale from a weighted
//! discrete distribution.
//!
//! Images that no longer fit are skipped with a warning; the layout never
//! fails as a whole.
//!
//! ## Minimal example
//!
//! ```rust
//! use fresco_layout::{Layout, LayoutConfig};
//!
//! let layout = Layout::generate(12, &LayoutConfig::default(), 7);
//! assert!(layout.placements().len() <= 12);
//!
//! // Placements back-reference images by input index.
//! for p in layout.placements() {
//!     assert!(p.image < 12);
//!     assert!(p.x + 2 <= layout.width() && p.y + 2 <= layout.height());
//! }
//! ```

mod config;
mod generator;
mod noise;

pub use config::{LayoutConfig, ScaleWeight};
pub use generator::{GridSize, Layout, Placement, grid_size};
pub use noise::Noise;
