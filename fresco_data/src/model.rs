// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload types produced once by the data provider.
//!
//! All of these are resolved at build time by the content store collaborator
//! and are immutable for the session.

use crate::asset::{AssetRef, SrcSetEntry};
use crate::locale::LocalizedString;

/// One image as placed on the wall: a pre-flattened grid descriptor.
#[derive(Clone, Debug)]
pub struct ImageDescriptor {
    /// Stable identity within the payload.
    pub id: String,
    /// Default display URL.
    pub url: String,
    /// Responsive variants, ascending by width.
    pub src_set: Vec<SrcSetEntry>,
    /// Larger variant for zoomed-in contexts.
    pub url_large: String,
    /// Tiny blurred placeholder URL.
    pub lqip: String,
    /// Alt text, falling back to the series title upstream.
    pub alt: String,
    /// Identity of the owning series.
    pub series_id: String,
    /// Localized title of the owning series.
    pub series_title: LocalizedString,
    /// Ordinal position within the owning series.
    pub index_in_series: usize,
    /// Sibling count within the owning series.
    pub total_in_series: usize,
    /// Width over height; positive.
    pub aspect_ratio: f64,
    /// Background color of the owning series, if any (CSS color string).
    pub background_color: Option<String>,
}

/// One image entry inside a series.
#[derive(Clone, Debug)]
pub struct SeriesImage {
    /// Stable key within the series.
    pub key: String,
    /// Alt text.
    pub alt: String,
    /// Reference into the asset store.
    pub asset: AssetRef,
    /// Source pixel width.
    pub width: u32,
    /// Source pixel height.
    pub height: u32,
}

/// A collection of images with shared presentation metadata.
#[derive(Clone, Debug)]
pub struct Series {
    /// Stable identity.
    pub id: String,
    /// Localized display title.
    pub title: LocalizedString,
    /// Ordered image entries.
    pub images: Vec<SeriesImage>,
    /// How many leading images participate in the wall grid.
    pub grid_count: usize,
    /// Background color shown while this series is focused (CSS color string).
    pub background_color: Option<String>,
    /// Localized long-form description.
    pub description: Option<LocalizedString>,
}

/// A single contact entry on the about page.
#[derive(Clone, Debug)]
pub struct Contact {
    /// Stable key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Contact value (address, handle, URL).
    pub value: String,
}

/// About/bio data.
#[derive(Clone, Debug, Default)]
pub struct About {
    /// Bio text.
    pub bio: String,
    /// Contact entries.
    pub contacts: Vec<Contact>,
}

/// One resolvable image inside an open viewer.
#[derive(Clone, Debug)]
pub struct ViewerImage {
    /// Stable identity (the series image key).
    pub id: String,
    /// Default display URL at viewer resolution.
    pub url: String,
    /// Responsive variants, ascending by width.
    pub src_set: Vec<SrcSetEntry>,
    /// Alt text.
    pub alt: String,
    /// Localized title of the owning series.
    pub series_title: LocalizedString,
    /// Ordinal position within the series.
    pub index_in_series: usize,
    /// Sibling count within the series.
    pub total_in_series: usize,
}

/// The payload carried by the sequencer's viewer dimension while the
/// full-screen viewer is open.
#[derive(Clone, Debug)]
pub struct ViewerPayload {
    /// Identity of the viewed series.
    pub series_id: String,
    /// All images of the series at viewer resolution.
    pub images: Vec<ViewerImage>,
    /// Index of the currently shown image.
    pub current_index: usize,
    /// Background color behind the viewer, if the series defines one.
    pub background_color: Option<String>,
    /// Localized series description shown in the info panel.
    pub description: Option<LocalizedString>,
}
