// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Data: shared data model and collaborator contracts.
//!
//! This crate holds the session-immutable payload types produced once by the
//! data provider (series, grid image descriptors, about data), plus the small
//! pure contracts the rest of the engine consumes:
//!
//! - [`LocalizedString`] / [`Locale`]: `{fr, en}` text resolution with `fr`
//!   fallback.
//! - [`AssetResolver`] / [`CdnResolver`]: deterministic image URL resolution
//!   from an asset reference and a target width, plus srcset building.
//! - [`contrast_text_color`]: YIQ-luminance based readable text color for a
//!   given background.
//! - [`ImagePreloader`] / [`PreloadPlan`]: fire-and-forget neighbor preload
//!   prioritization for the viewer.
//! - [`MotionMode`] / [`GridPhase`] / [`LayerAnim`]: the shared vocabulary for
//!   the sequencer state dimensions read by every layer.
//!
//! Nothing here performs I/O; the data provider resolves everything up front
//! and the engine treats it as immutable for the session.
//!
//! ## Minimal example
//!
//! ```rust
//! use fresco_data::{Locale, LocalizedString, contrast_text_color};
//!
//! let title = LocalizedString::new("Bord de mer", "Seaside");
//! assert_eq!(title.resolve(Locale::En), "Seaside");
//!
//! // Dark backgrounds get light text.
//! assert_eq!(contrast_text_color(Some("#070707")), "#ffffff");
//! ```

mod asset;
mod color;
mod locale;
mod model;
mod modes;
mod preload;

pub use asset::{AssetRef, AssetResolver, CdnResolver, ResolveParams, SrcSetEntry, optimal_width};
pub use color::{contrast_text_color, luminance, parse_color};
pub use locale::{Locale, LocalizedString};
pub use model::{About, Contact, ImageDescriptor, Series, SeriesImage, ViewerImage, ViewerPayload};
pub use modes::{Easing, GridPhase, LayerAnim, LayerPhase, MotionMode, STAGGER_EASING};
pub use preload::{ImagePreloader, PreloadPlan, PreloadPriority};
