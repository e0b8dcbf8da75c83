// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Wall: the virtualization engine behind the infinite photo wall.
//!
//! A finite logical grid (from `fresco_layout`) is replicated into just
//! enough copies to cover the viewport plus one image zone. An unbounded
//! pan offset is wrapped onto that replicated wall, each tile copy gets a
//! wrap-corrected screen position, and off-screen tiles are culled with a
//! pixel buffer so edges never pop.
//!
//! The pan offset itself is driven by a unified physics step that blends
//! three velocity sources (pointer attraction toward the viewport edge,
//! inertial drag, and ambient autoscroll on touch) into one damped
//! velocity, plus an exponential ease toward explicit scroll targets.
//!
//! The engine is headless and clockless: the host owns the frame loop and
//! calls [`Wall::step`] once per frame, reading [`Wall::tiles`] back for
//! rendering. The display surface is abstracted behind the [`Viewport`]
//! trait so all of this runs in tests without a real window.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use fresco_layout::{Layout, LayoutConfig};
//! use fresco_wall::{DeviceClass, MotionConfig, StaticViewport, Wall};
//!
//! let config = LayoutConfig::default();
//! let layout = Layout::generate(0, &config, 1);
//! let viewport = StaticViewport::new(Size::new(1280.0, 800.0));
//! let mut wall = Wall::new(
//!     layout,
//!     config,
//!     Vec::new(),
//!     viewport,
//!     DeviceClass::Pointer,
//!     MotionConfig::default(),
//!     42,
//! );
//!
//! wall.wheel(Vec2::new(10.0, 0.0));
//! wall.step();
//! assert!(wall.is_ready());
//! ```

mod config;
mod viewport;
mod wall;

pub use config::{DeviceClass, MotionConfig};
pub use viewport::{StaticViewport, Viewport};
pub use wall::{Tile, TileKey, Wall, WallLayout, wrap_correct};
