// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic asset URL resolution.
//!
//! The content store hands out opaque asset references; a resolver turns
//! `(reference, target width, options)` into a fully-qualified URL. The same
//! inputs always produce the same URL, which the preloader relies on for its
//! de-duplication keys.

/// An opaque reference into the asset store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetRef(pub String);

impl AssetRef {
    /// Creates a reference from an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// One entry of a responsive srcset: a URL and the width it was rendered at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SrcSetEntry {
    /// Fully-qualified URL.
    pub url: String,
    /// Rendered pixel width.
    pub width: u32,
}

/// Optional resolution parameters beyond the target width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveParams {
    /// JPEG/WebP quality in `1..=100`.
    pub quality: Option<u8>,
    /// Gaussian blur amount (used for LQIP placeholders).
    pub blur: Option<u16>,
    /// Let the CDN pick the best encoding for the client.
    pub auto_format: bool,
}

impl ResolveParams {
    /// Parameters for a tiny blurred placeholder.
    #[must_use]
    pub fn lqip() -> Self {
        Self {
            quality: Some(20),
            blur: Some(50),
            auto_format: true,
        }
    }

    /// Parameters for a normal display variant.
    #[must_use]
    pub fn display() -> Self {
        Self {
            quality: None,
            blur: None,
            auto_format: true,
        }
    }
}

/// Resolves asset references to image URLs, deterministically.
pub trait AssetResolver {
    /// Returns the URL serving `asset` at `width` pixels with `params`.
    fn url(&self, asset: &AssetRef, width: u32, params: ResolveParams) -> String;

    /// Builds a srcset over the given widths, ascending.
    fn src_set(&self, asset: &AssetRef, widths: &[u32]) -> Vec<SrcSetEntry> {
        widths
            .iter()
            .map(|&width| SrcSetEntry {
                url: self.url(asset, width, ResolveParams::display()),
                width,
            })
            .collect()
    }
}

/// A query-parameter based resolver in front of an image CDN.
#[derive(Clone, Debug)]
pub struct CdnResolver {
    base: String,
}

impl CdnResolver {
    /// Creates a resolver rooted at `base` (no trailing slash).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl AssetResolver for CdnResolver {
    fn url(&self, asset: &AssetRef, width: u32, params: ResolveParams) -> String {
        let mut url = format!("{}/{}?w={width}", self.base, asset.0);
        if let Some(q) = params.quality {
            url.push_str(&format!("&q={q}"));
        }
        if let Some(blur) = params.blur {
            url.push_str(&format!("&blur={blur}"));
        }
        if params.auto_format {
            url.push_str("&auto=format");
        }
        url
    }
}

/// Picks the viewer variant width for a viewport: the smallest of
/// 1200/1800/2400 covering `viewport_width × dpr`.
#[must_use]
pub fn optimal_width(viewport_width: f64, device_pixel_ratio: f64) -> u32 {
    let needed = viewport_width * device_pixel_ratio.max(1.0);
    if needed <= 1200.0 {
        1200
    } else if needed <= 1800.0 {
        1800
    } else {
        2400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        let resolver = CdnResolver::new("https://cdn.example.com/images");
        let asset = AssetRef::new("abc123");
        let a = resolver.url(&asset, 800, ResolveParams::display());
        let b = resolver.url(&asset, 800, ResolveParams::display());
        assert_eq!(a, b);
        assert!(a.contains("w=800"));
        assert!(a.ends_with("auto=format"));
    }

    #[test]
    fn lqip_params_carry_blur_and_quality() {
        let resolver = CdnResolver::new("https://cdn.example.com/images");
        let url = resolver.url(&AssetRef::new("abc"), 20, ResolveParams::lqip());
        assert!(url.contains("blur=50"));
        assert!(url.contains("q=20"));
    }

    #[test]
    fn src_set_preserves_width_order() {
        let resolver = CdnResolver::new("https://cdn.example.com");
        let set = resolver.src_set(&AssetRef::new("abc"), &[400, 800, 1200]);
        let widths: Vec<u32> = set.iter().map(|e| e.width).collect();
        assert_eq!(widths, vec![400, 800, 1200]);
    }

    #[test]
    fn optimal_width_ladder() {
        assert_eq!(optimal_width(1000.0, 1.0), 1200);
        assert_eq!(optimal_width(1000.0, 1.5), 1800);
        assert_eq!(optimal_width(1400.0, 2.0), 2400);
    }
}
